#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal_async::delay::DelayNs;
use montage_composer::{
    BLACK, Device, HardwareRevision, MontageRenderer, OutputDriver, PixelChains, Rgb,
};

/// Longest chain of any revision
pub const MAX_LEDS: usize = 192;
pub const CHAINS: usize = 4;

/// Hardware side effect seen by the mocks, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Flush { chain: u8, lit: usize },
    RelayHigh,
    RelayLow,
    Delay { ms: u32 },
}

pub type Journal = Rc<RefCell<Vec<Effect>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

/// Records every frame written to it
pub struct RecordingDriver {
    chain: u8,
    journal: Journal,
    failing: bool,
    frames: Vec<Vec<Rgb>>,
}

impl RecordingDriver {
    pub fn new(chain: u8, journal: &Journal) -> Self {
        Self {
            chain,
            journal: journal.clone(),
            failing: false,
            frames: Vec::new(),
        }
    }

    pub fn failing(chain: u8, journal: &Journal) -> Self {
        Self {
            failing: true,
            ..Self::new(chain, journal)
        }
    }

    pub fn frames(&self) -> &[Vec<Rgb>] {
        &self.frames
    }

    /// Last frame that reached the strip
    pub fn shown(&self) -> Option<&[Rgb]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl OutputDriver for RecordingDriver {
    type Error = &'static str;

    fn write(&mut self, pixels: &[Rgb]) -> Result<(), Self::Error> {
        let lit = pixels.iter().filter(|pixel| **pixel != BLACK).count();
        self.journal.borrow_mut().push(Effect::Flush {
            chain: self.chain,
            lit,
        });
        if self.failing {
            return Err("line stuck");
        }
        self.frames.push(pixels.to_vec());
        Ok(())
    }
}

pub struct MockRelay {
    journal: Journal,
}

impl MockRelay {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl ErrorType for MockRelay {
    type Error = Infallible;
}

impl OutputPin for MockRelay {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.journal.borrow_mut().push(Effect::RelayLow);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.journal.borrow_mut().push(Effect::RelayHigh);
        Ok(())
    }
}

pub struct MockDelay {
    journal: Journal,
}

impl MockDelay {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, _ns: u32) {}

    async fn delay_ms(&mut self, ms: u32) {
        self.journal.borrow_mut().push(Effect::Delay { ms });
    }
}

pub type TestChains = PixelChains<RecordingDriver, CHAINS, MAX_LEDS>;
pub type TestRenderer = MontageRenderer<RecordingDriver, CHAINS, MAX_LEDS>;
pub type TestDevice =
    Device<'static, RecordingDriver, MockRelay, MockDelay, CHAINS, MAX_LEDS>;

/// Chains matching the declared lengths of `revision`
pub fn chains_for(revision: &HardwareRevision, journal: &Journal) -> TestChains {
    let mut chains = TestChains::new();
    for (index, len) in revision.chain_lengths().iter().enumerate() {
        let driver = RecordingDriver::new(index as u8, journal);
        chains.push(driver, *len as usize).unwrap();
    }
    chains
}

pub fn renderer_for(revision: &HardwareRevision, journal: &Journal) -> TestRenderer {
    MontageRenderer::new(chains_for(revision, journal), &revision.montages).unwrap()
}

pub fn device_for(revision: &'static HardwareRevision, journal: &Journal) -> TestDevice {
    Device::new(
        revision,
        chains_for(revision, journal),
        MockRelay::new(journal),
        MockDelay::new(journal),
    )
    .unwrap()
}

/// Snapshot of every buffered pixel, chain by chain
pub fn snapshot(renderer: &TestRenderer) -> Vec<Vec<Rgb>> {
    let chains = renderer.chains();
    chains
        .ids()
        .map(|id| chains.pixels(id).unwrap().to_vec())
        .collect()
}

/// Snapshot of what each strip is actually showing
pub fn shown(renderer: &TestRenderer) -> Vec<Vec<Rgb>> {
    let chains = renderer.chains();
    chains
        .ids()
        .map(|id| {
            chains
                .driver(id)
                .unwrap()
                .shown()
                .map(<[Rgb]>::to_vec)
                .unwrap_or_default()
        })
        .collect()
}
