mod button;
pub(crate) mod dependencies;
pub(crate) mod link;

pub use button::handle_power_button;
