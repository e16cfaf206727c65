use esp_hal::gpio::Output;
use montage_composer::{Device, PixelChains};

use crate::infrastructure::drivers::EspChainDriver;

#[cfg(not(feature = "single-chain"))]
pub const CHAIN_COUNT: usize = 4;
#[cfg(not(feature = "single-chain"))]
pub const MAX_CHAIN_LEDS: usize = 192;

#[cfg(feature = "single-chain")]
pub const CHAIN_COUNT: usize = 1;
#[cfg(feature = "single-chain")]
pub const MAX_CHAIN_LEDS: usize = 50;

pub type ChainDriver = EspChainDriver<'static>;

pub type Chains = PixelChains<ChainDriver, CHAIN_COUNT, MAX_CHAIN_LEDS>;

pub type HeadformDevice = Device<
    'static,
    ChainDriver,
    Output<'static>,
    embassy_time::Delay,
    CHAIN_COUNT,
    MAX_CHAIN_LEDS,
>;
