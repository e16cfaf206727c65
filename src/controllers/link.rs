use montage_composer::{DeviceEvent, Payload};

use super::dependencies::{ADVERTISE, DEVICE_INBOX};

/// Wait until the device asks for advertising
pub(crate) async fn wait_advertise_request() {
    ADVERTISE.wait().await;
}

pub(crate) async fn on_connected() {
    DEVICE_INBOX.post(DeviceEvent::Connected).await;
}

pub(crate) async fn on_disconnected() {
    DEVICE_INBOX.post(DeviceEvent::Disconnected).await;
}

/// Forward a command characteristic write
///
/// Writes longer than a command buffer are dropped here.
pub(crate) async fn on_command_written(data: &[u8]) {
    match Payload::from_slice(data) {
        Ok(payload) => DEVICE_INBOX.post(DeviceEvent::CommandWritten(payload)).await,
        Err(()) => log::warn!("command: {} byte write dropped", data.len()),
    }
}
