mod ble;
mod device;

pub use ble::ble_task;
pub use device::device_task;
