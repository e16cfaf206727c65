#![allow(clippy::unreadable_literal)]

use montage_composer::HardwareRevision;

pub struct BleConfig {
    pub name: &'static str,
    pub service_uuid: u128,
    pub advertising_interval_ms: u64,
}

pub struct LightConfig {
    pub revision: &'static HardwareRevision,
}

pub struct FirmwareConfig {
    pub version: &'static str,
}

pub const BLE: BleConfig = BleConfig {
    name: "ESP32_BLE",
    service_uuid: 0x3322271e_756a_443d_8a9d_2f90c7a73bf5,
    advertising_interval_ms: 100,
};

#[cfg(not(feature = "single-chain"))]
pub const LIGHT: LightConfig = LightConfig {
    revision: &montage_composer::FOUR_CHAIN,
};
#[cfg(feature = "single-chain")]
pub const LIGHT: LightConfig = LightConfig {
    revision: &montage_composer::SINGLE_CHAIN,
};

pub const FIRMWARE: FirmwareConfig = FirmwareConfig {
    version: env!("BUILD_VERSION"),
};

/// Chain data lines, in chain id order
#[cfg(not(feature = "single-chain"))]
#[macro_export]
macro_rules! chain_gpios {
    ($p:expr) => {
        [
            esp_hal::gpio::Pin::degrade($p.GPIO26),
            esp_hal::gpio::Pin::degrade($p.GPIO25),
            esp_hal::gpio::Pin::degrade($p.GPIO33),
            esp_hal::gpio::Pin::degrade($p.GPIO32),
        ]
    };
}
#[cfg(feature = "single-chain")]
#[macro_export]
macro_rules! chain_gpios {
    ($p:expr) => {
        [esp_hal::gpio::Pin::degrade($p.GPIO26)]
    };
}

/// Momentary power button, idles low
#[macro_export]
macro_rules! button_gpio {
    ($p:expr) => {
        $p.GPIO36
    };
}

/// Main power relay
#[macro_export]
macro_rules! relay_gpio {
    ($p:expr) => {
        $p.GPIO12
    };
}
