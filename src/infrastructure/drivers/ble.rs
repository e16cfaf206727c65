use bt_hci::controller::ExternalController;
use esp_hal::peripherals::BT;
use esp_radio::ble::controller::BleConnector;
use static_cell::make_static;

use montage_composer::SetupError;

/// HCI command slots shared with the controller
const HCI_SLOTS: usize = 20;

pub type BleController = ExternalController<BleConnector<'static>, HCI_SLOTS>;

/// Bring up the radio and wrap its BLE controller for the host stack
pub fn init_ble_controller(bt: BT<'static>) -> Result<BleController, SetupError> {
    let radio = esp_radio::init().map_err(|e| {
        log::error!("ble: radio init failed: {:?}", e);
        SetupError::Wireless
    })?;
    let radio = &*make_static!(radio);

    let connector = BleConnector::new(radio, bt, Default::default()).map_err(|e| {
        log::error!("ble: connector init failed: {:?}", e);
        SetupError::Wireless
    })?;

    Ok(ExternalController::new(connector))
}
