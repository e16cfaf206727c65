//! Montage renderer
//!
//! Every render runs the same three steps on the owned chains:
//! clear all buffers, apply the montage segments, flush every chain.
//! Chains are flushed one after another, so two chains may briefly show
//! different frames while a render is in progress.

use crate::Rgb;
use crate::chain::{ChainId, OutputDriver, PixelChains};
use crate::command::RenderRequest;
use crate::geometry::{GeometryError, Montage, MontageTable, Segment};

/// Owns the pixel chains and turns render requests into chain writes
pub struct MontageRenderer<D, const CHAINS: usize, const MAX_LEDS: usize> {
    chains: PixelChains<D, CHAINS, MAX_LEDS>,
}

impl<D: OutputDriver, const CHAINS: usize, const MAX_LEDS: usize> MontageRenderer<D, CHAINS, MAX_LEDS> {
    /// Take ownership of the chains after checking them against `table`
    ///
    /// Fails if the attached chains differ from the declared ones or if any
    /// montage segment is out of bounds.
    pub fn new(
        chains: PixelChains<D, CHAINS, MAX_LEDS>,
        table: &MontageTable,
    ) -> Result<Self, GeometryError> {
        let mut lengths = [0usize; CHAINS];
        for id in chains.ids() {
            lengths[id.index()] = chains.len(id).unwrap_or_default();
        }
        table.validate_chains(&lengths[..chains.count()])?;

        Ok(Self { chains })
    }

    /// Chains owned by the renderer
    pub const fn chains(&self) -> &PixelChains<D, CHAINS, MAX_LEDS> {
        &self.chains
    }

    /// Render a request onto every chain
    ///
    /// A chain that fails to flush is logged and skipped; the remaining
    /// chains are still flushed.
    pub fn render(&mut self, request: &RenderRequest<'_>) {
        self.clear_all();

        if let RenderRequest::Montage { montage, color } = request {
            self.apply(montage, *color);
        }

        let failed = self.flush_all();
        if failed == 0 {
            log::info!("render: '{}' applied", request.name());
        } else {
            log::warn!(
                "render: '{}' applied, {} of {} chains failed to flush",
                request.name(),
                failed,
                self.chains.count()
            );
        }
    }

    /// Turn every chain off
    pub fn render_off(&mut self) {
        self.render(&RenderRequest::Off);
    }

    fn clear_all(&mut self) {
        for id in self.chains.ids() {
            if let Err(e) = self.chains.clear(id) {
                log::error!("render: clear failed: {}", e);
            }
        }
    }

    fn apply(&mut self, montage: &Montage, color: Rgb) {
        for segment in montage.segments {
            let result = match *segment {
                Segment::Single { chain, index } => {
                    self.chains.set(chain, usize::from(index), color)
                }
                Segment::Range { chain, start, end } => {
                    self.chains.fill(chain, usize::from(start), usize::from(end), color)
                }
            };
            if let Err(e) = result {
                log::error!("render: montage '{}' segment skipped: {}", montage.name, e);
            }
        }
    }

    /// Flush every chain independently, returning the number of failures
    fn flush_all(&mut self) -> usize {
        let mut failed = 0;
        for id in self.chains.ids() {
            if self.flush(id).is_err() {
                failed += 1;
            }
        }
        failed
    }

    fn flush(&mut self, chain: ChainId) -> Result<(), ()> {
        self.chains.flush(chain).map_err(|e| {
            log::warn!("render: {}", e);
        })
    }
}
