mod power_button;

pub use power_button::bind_power_button;
