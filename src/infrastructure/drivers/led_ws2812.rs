use static_cell::make_static;

use esp_hal::gpio::AnyPin;
use esp_hal::xtensa_lx::interrupt;
use esp_hal::{peripherals::RMT, rmt::Rmt, time::Rate};
use esp_hal_smartled::{LedAdapterError, SmartLedsAdapter, buffer_size, smart_led_buffer};
use smart_leds::SmartLedsWrite;

use montage_composer::{OutputDriver, Rgb, SetupError};

use crate::infrastructure::types::{CHAIN_COUNT, Chains, MAX_CHAIN_LEDS};

/// RMT backed WS2812 driver for one chain
///
/// Every chain gets its own RMT channel and pulse buffer, so chains can be
/// flushed independently.
pub struct EspChainDriver<'a> {
    adapter: SmartLedsAdapter<'a, { buffer_size(MAX_CHAIN_LEDS) }>,
}

impl OutputDriver for EspChainDriver<'static> {
    type Error = LedAdapterError;

    fn write(&mut self, pixels: &[Rgb]) -> Result<(), Self::Error> {
        let mut result = Ok(());
        interrupt::free(|| {
            result = self.adapter.write(pixels.iter().copied());
        });
        result
    }
}

// Each expansion owns its own static pulse buffer
macro_rules! chain_driver {
    ($channel:expr, $pin:expr) => {
        EspChainDriver {
            adapter: SmartLedsAdapter::new(
                $channel,
                $pin,
                make_static!(smart_led_buffer!(MAX_CHAIN_LEDS)),
            ),
        }
    };
}

/// Attach every chain to its RMT channel and data line
///
/// `lengths` are the declared pixel counts, in chain id order.
pub fn init_pixel_chains(
    rmt: RMT<'static>,
    pins: [AnyPin<'static>; CHAIN_COUNT],
    lengths: &[u16],
) -> Result<Chains, SetupError> {
    let rmt = Rmt::new(rmt, Rate::from_mhz(80)).map_err(|e| {
        log::error!("chains: rmt init failed: {:?}", e);
        SetupError::Peripheral("rmt")
    })?;

    #[cfg(not(feature = "single-chain"))]
    let drivers = {
        let [pin0, pin1, pin2, pin3] = pins;
        [
            chain_driver!(rmt.channel0, pin0),
            chain_driver!(rmt.channel1, pin1),
            chain_driver!(rmt.channel2, pin2),
            chain_driver!(rmt.channel3, pin3),
        ]
    };
    #[cfg(feature = "single-chain")]
    let drivers = {
        let [pin0] = pins;
        [chain_driver!(rmt.channel0, pin0)]
    };

    let mut chains = Chains::new();
    for (driver, len) in drivers.into_iter().zip(lengths) {
        let id = chains.push(driver, usize::from(*len))?;
        log::info!("chains: chain {} attached with {} pixels", id, len);
    }
    Ok(chains)
}
