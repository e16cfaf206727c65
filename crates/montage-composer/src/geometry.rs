//! Montage geometry tables
//!
//! A montage is a named list of segments, each segment naming one chain and
//! either a half-open index range or a single index. Tables are compiled-in
//! calibration data for a given headform; the renderer never assumes any
//! relationship between segments of the same montage.

use core::fmt;

use crate::chain::ChainId;

/// Sentinel montage name that turns every chain off
pub const OFF: &str = "off";

/// A run of LED positions on one chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Pixels `[start, end)`
    Range { chain: ChainId, start: u16, end: u16 },
    /// One pixel
    Single { chain: ChainId, index: u16 },
}

impl Segment {
    pub const fn range(chain: u8, start: u16, end: u16) -> Self {
        Self::Range {
            chain: ChainId(chain),
            start,
            end,
        }
    }

    pub const fn single(chain: u8, index: u16) -> Self {
        Self::Single {
            chain: ChainId(chain),
            index,
        }
    }

    /// Chain the segment lives on
    pub const fn chain(self) -> ChainId {
        match self {
            Self::Range { chain, .. } | Self::Single { chain, .. } => chain,
        }
    }

    /// Half-open pixel span `[start, end)` covered by the segment
    pub const fn span(self) -> (usize, usize) {
        match self {
            Self::Range { start, end, .. } => (start as usize, end as usize),
            Self::Single { index, .. } => (index as usize, index as usize + 1),
        }
    }

    /// Check if the segment covers `index` on `chain`
    pub const fn contains(self, chain: ChainId, index: usize) -> bool {
        let (start, end) = self.span();
        self.chain().0 == chain.0 && index >= start && index < end
    }
}

/// Named, immutable montage definition
#[derive(Debug, PartialEq, Eq)]
pub struct Montage {
    pub name: &'static str,
    pub segments: &'static [Segment],
}

impl Montage {
    /// Check if any segment of the montage covers `index` on `chain`
    pub fn covers(&self, chain: ChainId, index: usize) -> bool {
        self.segments
            .iter()
            .any(|segment| segment.contains(chain, index))
    }
}

/// Result of a montage name lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// The `off` sentinel
    Off,
    /// A compiled-in montage
    Montage(&'a Montage),
}

/// Static check failure of a geometry table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// Segment references a chain the table does not declare
    UnknownChain {
        montage: &'static str,
        chain: ChainId,
    },
    /// Range segment with `start >= end`
    EmptySegment {
        montage: &'static str,
        chain: ChainId,
    },
    /// Segment reaches past the end of its chain
    OutOfBounds {
        montage: &'static str,
        chain: ChainId,
        end: usize,
        len: usize,
    },
    /// Two montages share a name, or a montage shadows `off`
    DuplicateName(&'static str),
    /// Physical chain lengths differ from the declared ones
    ChainLengthMismatch {
        chain: ChainId,
        declared: usize,
        actual: usize,
    },
    /// Physical chain count differs from the declared one
    ChainCountMismatch { declared: usize, actual: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::UnknownChain { montage, chain } => {
                write!(f, "montage '{}' references unknown chain {}", montage, chain)
            }
            GeometryError::EmptySegment { montage, chain } => {
                write!(f, "montage '{}' has an empty range on chain {}", montage, chain)
            }
            GeometryError::OutOfBounds {
                montage,
                chain,
                end,
                len,
            } => write!(
                f,
                "montage '{}' reaches index {} on chain {} of length {}",
                montage, end, chain, len
            ),
            GeometryError::DuplicateName(name) => write!(f, "duplicate montage name '{}'", name),
            GeometryError::ChainLengthMismatch {
                chain,
                declared,
                actual,
            } => write!(
                f,
                "chain {} declared with {} pixels but has {}",
                chain, declared, actual
            ),
            GeometryError::ChainCountMismatch { declared, actual } => {
                write!(f, "{} chains declared but {} attached", declared, actual)
            }
        }
    }
}

impl core::error::Error for GeometryError {}

/// Montage lookup table for one hardware revision
#[derive(Debug)]
pub struct MontageTable {
    /// Declared pixel count of every chain, indexed by chain id
    pub chains: &'static [u16],
    pub montages: &'static [Montage],
}

impl MontageTable {
    /// Resolve a montage name, ignoring ASCII case
    pub fn resolve(&self, name: &str) -> Option<Selection<'_>> {
        if name.eq_ignore_ascii_case(OFF) {
            return Some(Selection::Off);
        }

        self.montages
            .iter()
            .find(|montage| montage.name.eq_ignore_ascii_case(name))
            .map(Selection::Montage)
    }

    /// Names of every montage, in table order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.montages.iter().map(|montage| montage.name)
    }

    /// Declared length of a chain
    pub fn chain_len(&self, chain: ChainId) -> Option<usize> {
        self.chains.get(chain.index()).map(|len| *len as usize)
    }

    /// Check that every segment names a declared chain and stays in bounds
    pub fn validate(&self) -> Result<(), GeometryError> {
        for (position, montage) in self.montages.iter().enumerate() {
            let shadowed = montage.name.eq_ignore_ascii_case(OFF)
                || self.montages[..position]
                    .iter()
                    .any(|other| other.name.eq_ignore_ascii_case(montage.name));
            if shadowed {
                return Err(GeometryError::DuplicateName(montage.name));
            }

            for segment in montage.segments {
                self.validate_segment(montage.name, *segment)?;
            }
        }
        Ok(())
    }

    /// Check the table against the lengths of the chains actually attached
    pub fn validate_chains(&self, lengths: &[usize]) -> Result<(), GeometryError> {
        if lengths.len() != self.chains.len() {
            return Err(GeometryError::ChainCountMismatch {
                declared: self.chains.len(),
                actual: lengths.len(),
            });
        }

        for (index, (declared, actual)) in self.chains.iter().zip(lengths).enumerate() {
            if *declared as usize != *actual {
                return Err(GeometryError::ChainLengthMismatch {
                    chain: ChainId(index as u8),
                    declared: *declared as usize,
                    actual: *actual,
                });
            }
        }

        self.validate()
    }

    fn validate_segment(&self, montage: &'static str, segment: Segment) -> Result<(), GeometryError> {
        let chain = segment.chain();
        let len = self
            .chain_len(chain)
            .ok_or(GeometryError::UnknownChain { montage, chain })?;

        let (start, end) = segment.span();
        if start >= end {
            return Err(GeometryError::EmptySegment { montage, chain });
        }
        if end > len {
            return Err(GeometryError::OutOfBounds {
                montage,
                chain,
                end,
                len,
            });
        }
        Ok(())
    }
}
