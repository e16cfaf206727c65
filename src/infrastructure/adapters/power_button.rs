use core::cell::RefCell;

use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};
use esp_hal::{
    gpio::{Event, Input, InputConfig, InputPin, Io},
    handler,
    peripherals,
    ram,
};

/// Callback for a button edge, `true` when the button is held down
pub type PowerButtonCallback = fn(bool);

/// Button input pin
static BUTTON: Mutex<CriticalSectionRawMutex, RefCell<Option<Input>>> =
    Mutex::new(RefCell::new(None));

/// Callback for button edges
static CALLBACK: Mutex<
    CriticalSectionRawMutex,
    RefCell<Option<PowerButtonCallback>>,
> = Mutex::new(RefCell::new(None));

/// Bind the power button, reporting both edges
///
/// The button idles low, so a rising edge is a press and a falling edge
/// a release.
pub fn bind_power_button(
    mux: peripherals::IO_MUX<'static>,
    pin: impl InputPin + 'static,
    on_edge: PowerButtonCallback,
) {
    let mut io = Io::new(mux);
    io.set_interrupt_handler(handle_button_edge);

    // GPIO34-39 have no internal pulls, the board carries the pull-down
    let mut button = Input::new(pin, InputConfig::default());
    button.listen(Event::AnyEdge);

    BUTTON.lock(|cell| {
        cell.borrow_mut().replace(button);
    });
    CALLBACK.lock(|cell| {
        cell.borrow_mut().replace(on_edge);
    });
}

/// Handler for power button edges
#[handler]
#[ram]
fn handle_button_edge() {
    let pressed = BUTTON.lock(|cell| {
        let mut cell = cell.borrow_mut();
        let button = cell.as_mut()?;
        let is_set = button.is_interrupt_set();
        button.clear_interrupt();
        is_set.then(|| button.is_high())
    });

    if let Some(pressed) = pressed {
        CALLBACK.lock(|cell| {
            if let Some(callback) = cell.borrow().as_ref() {
                callback(pressed);
            }
        });
    }
}
