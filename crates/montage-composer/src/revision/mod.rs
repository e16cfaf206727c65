//! Hardware revisions
//!
//! A revision bundles everything that differs between headform builds:
//! chain lengths and geometry, the palette intensity ceiling and the
//! power-down settle delay. The renderer and parser are shared.

mod four_chain;
mod single_chain;

pub use four_chain::FOUR_CHAIN;
pub use single_chain::SINGLE_CHAIN;

use crate::geometry::MontageTable;
use crate::palette::Palette;

/// Settle delay between the off render and cutting relay power
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 3_000;

/// Static description of one headform build
#[derive(Debug)]
pub struct HardwareRevision {
    pub name: &'static str,
    pub montages: MontageTable,
    /// Brightest channel value any color may reach
    pub intensity_ceiling: u8,
    pub settle_delay_ms: u32,
}

impl HardwareRevision {
    /// Number of chains the revision is wired with
    pub const fn chain_count(&self) -> usize {
        self.montages.chains.len()
    }

    /// Declared chain lengths, indexed by chain id
    pub const fn chain_lengths(&self) -> &'static [u16] {
        self.montages.chains
    }

    pub const fn palette(&self) -> Palette {
        Palette::new(self.intensity_ceiling)
    }

    /// Total pixel count over every chain
    pub fn pixel_count(&self) -> usize {
        self.montages.chains.iter().map(|len| *len as usize).sum()
    }
}
