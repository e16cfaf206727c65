use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use montage_composer::DeviceInbox;

/// Queued link and command events waiting for the device task
pub(crate) const DEVICE_EVENTS_DEPTH: usize = 8;

pub(crate) static DEVICE_INBOX: DeviceInbox<CriticalSectionRawMutex, DEVICE_EVENTS_DEPTH> =
    DeviceInbox::new();

/// Raised by the device task whenever advertising has to (re)start
pub(crate) static ADVERTISE: Signal<CriticalSectionRawMutex, ()> = Signal::new();
