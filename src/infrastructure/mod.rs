//! Infrastructure layer
//!
//! ESP32 implementations of the composer hardware seams (pixel chains,
//! relay, delay) plus the BLE transport and the embassy tasks.

pub mod adapters;
pub mod config;
pub mod drivers;
pub mod tasks;
pub mod types;
