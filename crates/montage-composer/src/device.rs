//! Device context
//!
//! One [`Device`] is built at startup and owns every piece of mutable state:
//! the renderer (and through it every chain), the link state machine and the
//! power relay. Events are handled one at a time, each to completion, so two
//! commands can never interleave on the chains.

use core::fmt;

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use heapless::Vec;

use crate::chain::{ChainError, OutputDriver, PixelChains};
use crate::command::{CommandParser, decode};
use crate::geometry::GeometryError;
use crate::palette::Palette;
use crate::renderer::MontageRenderer;
use crate::revision::HardwareRevision;
use crate::supervisor::{LinkAction, LinkSupervisor, PowerSupervisor};

/// Largest characteristic write accepted
pub const MAX_COMMAND_LEN: usize = 64;

/// Raw characteristic write, copied out of the wireless stack
pub type Payload = Vec<u8, MAX_COMMAND_LEN>;

/// Everything the device reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    /// A client connected
    Connected,
    /// The client disconnected or the link was lost
    Disconnected,
    /// The command characteristic was written
    CommandWritten(Payload),
    /// Power button rising edge
    ButtonPressed,
    /// Power button falling edge
    ButtonReleased,
}

/// Fatal startup failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// A chain could not be attached
    Chain(ChainError),
    /// Geometry does not match the attached chains
    Geometry(GeometryError),
    /// A peripheral failed to initialize
    Peripheral(&'static str),
    /// Wireless controller or stack could not be brought up
    Wireless,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Chain(e) => write!(f, "chain: {}", e),
            SetupError::Geometry(e) => write!(f, "geometry: {}", e),
            SetupError::Peripheral(name) => write!(f, "{} initialization failed", name),
            SetupError::Wireless => write!(f, "wireless registration failed"),
        }
    }
}

impl core::error::Error for SetupError {}

impl From<ChainError> for SetupError {
    fn from(e: ChainError) -> Self {
        SetupError::Chain(e)
    }
}

impl From<GeometryError> for SetupError {
    fn from(e: GeometryError) -> Self {
        SetupError::Geometry(e)
    }
}

/// Process-wide device context
pub struct Device<'a, O, R, D, const CHAINS: usize, const MAX_LEDS: usize> {
    revision: &'a HardwareRevision,
    palette: Palette,
    renderer: MontageRenderer<O, CHAINS, MAX_LEDS>,
    link: LinkSupervisor,
    power: PowerSupervisor<R, D>,
}

impl<'a, O, R, D, const CHAINS: usize, const MAX_LEDS: usize> Device<'a, O, R, D, CHAINS, MAX_LEDS>
where
    O: OutputDriver,
    R: OutputPin,
    D: DelayNs,
{
    /// Build the device, validating the revision geometry against `chains`
    pub fn new(
        revision: &'a HardwareRevision,
        chains: PixelChains<O, CHAINS, MAX_LEDS>,
        relay: R,
        delay: D,
    ) -> Result<Self, SetupError> {
        let renderer = MontageRenderer::new(chains, &revision.montages)?;
        let power = PowerSupervisor::new(relay, delay, revision.settle_delay_ms);

        Ok(Self {
            revision,
            palette: revision.palette(),
            renderer,
            link: LinkSupervisor::new(),
            power,
        })
    }

    /// Blank every chain and arm advertising
    pub fn boot(&mut self) -> LinkAction {
        log::info!(
            "device: revision '{}', {} chain(s), {} pixels, intensity ceiling {}",
            self.revision.name,
            self.revision.chain_count(),
            self.revision.pixel_count(),
            self.palette.ceiling()
        );
        for name in self.revision.montages.names() {
            log::debug!("device: montage '{}'", name);
        }

        self.renderer.render_off();
        self.link.on_boot()
    }

    /// Process one event to completion
    ///
    /// Never fails: rejected commands and hardware faults are logged and
    /// the device keeps its current state.
    pub async fn handle(&mut self, event: DeviceEvent) -> LinkAction {
        match event {
            DeviceEvent::Connected => self.link.on_connected().unwrap_or(LinkAction::Nothing),
            DeviceEvent::Disconnected => self.link.on_disconnected(),
            DeviceEvent::CommandWritten(payload) => {
                self.execute(&payload);
                LinkAction::Nothing
            }
            DeviceEvent::ButtonPressed => {
                self.power.on_button_pressed();
                LinkAction::Nothing
            }
            DeviceEvent::ButtonReleased => {
                self.power.on_button_released(&mut self.renderer).await;
                LinkAction::Nothing
            }
        }
    }

    fn execute(&mut self, payload: &[u8]) {
        let parser = CommandParser::new(&self.revision.montages, self.palette);
        match decode(payload).and_then(|text| parser.parse(text)) {
            Ok(request) => {
                log::debug!("command: {:?}", request);
                self.renderer.render(&request);
            }
            Err(e) => log::warn!("command: rejected: {}", e),
        }
    }

    pub const fn revision(&self) -> &'a HardwareRevision {
        self.revision
    }

    pub const fn renderer(&self) -> &MontageRenderer<O, CHAINS, MAX_LEDS> {
        &self.renderer
    }

    pub const fn link(&self) -> &LinkSupervisor {
        &self.link
    }

    pub const fn power(&self) -> &PowerSupervisor<R, D> {
        &self.power
    }
}
