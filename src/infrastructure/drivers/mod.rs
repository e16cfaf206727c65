mod ble;
mod led_ws2812;

pub use ble::{BleController, init_ble_controller};
pub use led_ws2812::{EspChainDriver, init_pixel_chains};
