//! Connection and power supervision
//!
//! [`LinkSupervisor`] tracks the wireless link and tells the transport when
//! to (re)start advertising. [`PowerSupervisor`] drives the main power relay
//! from the physical button and guarantees the strips are dark before power
//! is cut.

use core::fmt;

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::chain::OutputDriver;
use crate::renderer::MontageRenderer;

/// Wireless link state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// Not started yet
    Idle,
    /// Advertising and waiting for a client
    Advertising,
    /// A client is connected
    Connected,
}

/// What the transport has to do after a link event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAction {
    /// Start (or restart) advertising
    StartAdvertising,
    /// Keep going as is
    Nothing,
}

/// Rejected link transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    /// A connection arrived while advertising was not armed
    NotAdvertising(LinkState),
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::NotAdvertising(state) => {
                write!(f, "connection refused in state {:?}", state)
            }
        }
    }
}

impl core::error::Error for LinkError {}

/// Wireless link state machine
///
/// `Idle -> Advertising -> Connected -> Advertising -> ...`
#[derive(Debug)]
pub struct LinkSupervisor {
    state: LinkState,
}

impl LinkSupervisor {
    pub const fn new() -> Self {
        Self {
            state: LinkState::Idle,
        }
    }

    pub const fn state(&self) -> LinkState {
        self.state
    }

    pub const fn is_connected(&self) -> bool {
        matches!(self.state, LinkState::Connected)
    }

    /// Device booted, advertising starts right away
    pub fn on_boot(&mut self) -> LinkAction {
        log::info!("link: advertising");
        self.state = LinkState::Advertising;
        LinkAction::StartAdvertising
    }

    /// A client connected
    ///
    /// Only accepted while advertising is armed.
    pub fn on_connected(&mut self) -> Result<LinkAction, LinkError> {
        if self.state != LinkState::Advertising {
            log::warn!("link: connection in state {:?} ignored", self.state);
            return Err(LinkError::NotAdvertising(self.state));
        }
        log::info!("link: connected");
        self.state = LinkState::Connected;
        Ok(LinkAction::Nothing)
    }

    /// The client went away, explicitly or by link loss
    pub fn on_disconnected(&mut self) -> LinkAction {
        match self.state {
            LinkState::Connected => log::info!("link: disconnected, advertising again"),
            state => log::warn!("link: disconnect in state {:?}, advertising again", state),
        }
        self.state = LinkState::Advertising;
        LinkAction::StartAdvertising
    }
}

impl Default for LinkSupervisor {
    fn default() -> Self {
        Self::new()
    }
}

/// Main power relay controller
pub struct PowerSupervisor<R, D> {
    relay: R,
    delay: D,
    settle_delay_ms: u32,
    powered: bool,
}

impl<R: OutputPin, D: DelayNs> PowerSupervisor<R, D> {
    /// Create a supervisor, the relay is driven low right away
    pub fn new(mut relay: R, delay: D, settle_delay_ms: u32) -> Self {
        if let Err(e) = relay.set_low() {
            log::error!("power: relay reset failed: {:?}", e);
        }
        Self {
            relay,
            delay,
            settle_delay_ms,
            powered: false,
        }
    }

    pub const fn is_powered(&self) -> bool {
        self.powered
    }

    pub const fn settle_delay_ms(&self) -> u32 {
        self.settle_delay_ms
    }

    /// Button pressed: power the strips
    pub fn on_button_pressed(&mut self) {
        match self.relay.set_high() {
            Ok(()) => {
                self.powered = true;
                log::info!("power: relay on");
            }
            Err(e) => log::error!("power: relay on failed: {:?}", e),
        }
    }

    /// Button released: render off, wait for the transmission to settle,
    /// then cut power
    pub async fn on_button_released<O, const CHAINS: usize, const MAX_LEDS: usize>(
        &mut self,
        renderer: &mut MontageRenderer<O, CHAINS, MAX_LEDS>,
    ) where
        O: OutputDriver,
    {
        renderer.render_off();
        self.delay.delay_ms(self.settle_delay_ms).await;

        match self.relay.set_low() {
            Ok(()) => {
                self.powered = false;
                log::info!("power: relay off");
            }
            Err(e) => log::error!("power: relay off failed: {:?}", e),
        }
    }
}
