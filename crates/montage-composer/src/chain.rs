//! Pixel chain abstraction layer
//!
//! Every chain keeps a local pixel buffer. `set` and `clear` only touch the
//! buffer, `flush` is the single operation that reaches the hardware.

use core::fmt;
use core::iter::Map;
use core::ops::Range;

use heapless::Vec;

use crate::{BLACK, Rgb};

/// Abstract LED output for one chain
///
/// Implement this trait to support different hardware platforms.
/// One driver instance owns exactly one data line.
pub trait OutputDriver {
    /// Hardware specific transmission error
    type Error: fmt::Debug;

    /// Transmit colors to the LED strip
    fn write(&mut self, pixels: &[Rgb]) -> Result<(), Self::Error>;
}

/// Identifier of a chain, its position in [`PixelChains`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainId(pub u8);

impl ChainId {
    /// Position of the chain in the chain set
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Error type for chain operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainError {
    /// No chain registered under this id
    UnknownChain(ChainId),
    /// Pixel index past the end of the chain
    IndexOutOfRange {
        chain: ChainId,
        index: usize,
        len: usize,
    },
    /// Chain length exceeds the buffer capacity
    TooLong { len: usize, max: usize },
    /// All chain slots are taken
    TooManyChains { max: usize },
    /// Hardware transmission failed
    Flush(ChainId),
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainError::UnknownChain(chain) => write!(f, "unknown chain {}", chain),
            ChainError::IndexOutOfRange { chain, index, len } => {
                write!(f, "index {} out of range for chain {} (len {})", index, chain, len)
            }
            ChainError::TooLong { len, max } => {
                write!(f, "chain length {} exceeds capacity {}", len, max)
            }
            ChainError::TooManyChains { max } => write!(f, "at most {} chains supported", max),
            ChainError::Flush(chain) => write!(f, "flush failed on chain {}", chain),
        }
    }
}

impl core::error::Error for ChainError {}

/// A single LED strip: fixed length buffer plus its output driver
pub struct PixelChain<D, const MAX_LEDS: usize> {
    driver: D,
    len: usize,
    buffer: [Rgb; MAX_LEDS],
}

impl<D: OutputDriver, const MAX_LEDS: usize> PixelChain<D, MAX_LEDS> {
    /// Create a chain of `len` pixels, all unlit
    pub fn new(driver: D, len: usize) -> Result<Self, ChainError> {
        if len > MAX_LEDS {
            return Err(ChainError::TooLong { len, max: MAX_LEDS });
        }

        Ok(Self {
            driver,
            len,
            buffer: [BLACK; MAX_LEDS],
        })
    }

    /// Number of pixels on the chain
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Buffered pixel colors (not necessarily transmitted yet)
    pub fn pixels(&self) -> &[Rgb] {
        &self.buffer[..self.len]
    }

    /// Output driver of the chain
    pub const fn driver(&self) -> &D {
        &self.driver
    }
}

/// The full set of independent chains owned by the device
pub struct PixelChains<D, const CHAINS: usize, const MAX_LEDS: usize> {
    chains: Vec<PixelChain<D, MAX_LEDS>, CHAINS>,
}

impl<D: OutputDriver, const CHAINS: usize, const MAX_LEDS: usize> PixelChains<D, CHAINS, MAX_LEDS> {
    /// Create an empty chain set
    pub const fn new() -> Self {
        Self { chains: Vec::new() }
    }

    /// Register the next chain and return its id
    pub fn push(&mut self, driver: D, len: usize) -> Result<ChainId, ChainError> {
        let chain = PixelChain::new(driver, len)?;
        let id = ChainId(self.chains.len() as u8);
        self.chains
            .push(chain)
            .map_err(|_| ChainError::TooManyChains { max: CHAINS })?;
        Ok(id)
    }

    /// Number of registered chains
    pub fn count(&self) -> usize {
        self.chains.len()
    }

    /// Iterate over the ids of all registered chains
    ///
    /// The iterator does not borrow the chain set, so chains can be
    /// mutated while walking it.
    pub fn ids(&self) -> Map<Range<u8>, fn(u8) -> ChainId> {
        (0..self.chains.len() as u8).map(ChainId as fn(u8) -> ChainId)
    }

    /// Length of a chain
    pub fn len(&self, chain: ChainId) -> Result<usize, ChainError> {
        Ok(self.chain(chain)?.len())
    }

    /// Buffered pixels of a chain
    pub fn pixels(&self, chain: ChainId) -> Result<&[Rgb], ChainError> {
        Ok(self.chain(chain)?.pixels())
    }

    /// Output driver of a chain
    pub fn driver(&self, chain: ChainId) -> Result<&D, ChainError> {
        Ok(self.chain(chain)?.driver())
    }

    /// Set a single buffered pixel
    pub fn set(&mut self, chain: ChainId, index: usize, color: Rgb) -> Result<(), ChainError> {
        let target = self.chain_mut(chain)?;
        if index >= target.len {
            return Err(ChainError::IndexOutOfRange {
                chain,
                index,
                len: target.len,
            });
        }
        target.buffer[index] = color;
        Ok(())
    }

    /// Set every buffered pixel in `[start, end)`
    ///
    /// The whole range is checked before any pixel is written.
    pub fn fill(
        &mut self,
        chain: ChainId,
        start: usize,
        end: usize,
        color: Rgb,
    ) -> Result<(), ChainError> {
        let target = self.chain_mut(chain)?;
        if start > end || end > target.len {
            return Err(ChainError::IndexOutOfRange {
                chain,
                index: end.max(start),
                len: target.len,
            });
        }
        target.buffer[start..end].fill(color);
        Ok(())
    }

    /// Set every buffered pixel of a chain to black without flushing
    pub fn clear(&mut self, chain: ChainId) -> Result<(), ChainError> {
        let target = self.chain_mut(chain)?;
        let len = target.len;
        target.buffer[..len].fill(BLACK);
        Ok(())
    }

    /// Transmit the buffered pixels of a chain to the hardware
    pub fn flush(&mut self, chain: ChainId) -> Result<(), ChainError> {
        let target = self.chain_mut(chain)?;
        let len = target.len;
        target.driver.write(&target.buffer[..len]).map_err(|e| {
            log::error!("chains: write to chain {} failed: {:?}", chain, e);
            ChainError::Flush(chain)
        })
    }

    fn chain(&self, chain: ChainId) -> Result<&PixelChain<D, MAX_LEDS>, ChainError> {
        self.chains
            .get(chain.index())
            .ok_or(ChainError::UnknownChain(chain))
    }

    fn chain_mut(&mut self, chain: ChainId) -> Result<&mut PixelChain<D, MAX_LEDS>, ChainError> {
        self.chains
            .get_mut(chain.index())
            .ok_or(ChainError::UnknownChain(chain))
    }
}

impl<D: OutputDriver, const CHAINS: usize, const MAX_LEDS: usize> Default
    for PixelChains<D, CHAINS, MAX_LEDS>
{
    fn default() -> Self {
        Self::new()
    }
}
