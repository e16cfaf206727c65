use super::dependencies::DEVICE_INBOX;

/// Power button edge, called from interrupt context
pub fn handle_power_button(pressed: bool) {
    DEVICE_INBOX.button_edge(pressed);
}
