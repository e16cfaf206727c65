use montage_composer::LinkAction;

use crate::controllers::dependencies::{ADVERTISE, DEVICE_INBOX};
use crate::infrastructure::types::HeadformDevice;

/// Task owning the device context
///
/// Events are taken one at a time and each is handled to completion, the
/// settle delay after a button release included. A pending button edge
/// is always taken before queued link and command events.
#[embassy_executor::task]
pub async fn device_task(device: &'static mut HeadformDevice) {
    if device.boot() == LinkAction::StartAdvertising {
        ADVERTISE.signal(());
    }

    loop {
        let event = DEVICE_INBOX.next().await;
        if device.handle(event).await == LinkAction::StartAdvertising {
            ADVERTISE.signal(());
        }
    }
}
