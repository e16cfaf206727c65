#![no_std]

//! Montage Composer - EEG montage rendering core
//!
//! Architecture layers:
//! - `chain` - Pixel chain buffers and the hardware [`OutputDriver`] seam
//! - `geometry` - Compiled-in montage segment tables
//! - `palette` - Named colors with a device intensity ceiling
//! - `command` - Text command decoding and resolution
//! - `renderer` - Clear, apply and flush across every chain
//! - `supervisor` - Wireless link and power relay state machines
//! - `device` - Single event handler tying the above together
//! - `inbox` - Event intake where the power button takes precedence
//! - `revision` - Hardware revisions (chain lengths + geometry + limits)
//! - `advertising` - Advertising payload for the command service
//!
//! Nothing here touches hardware directly, the firmware supplies
//! an [`OutputDriver`] per chain, a relay pin and a delay source.

pub mod advertising;
pub mod chain;
pub mod command;
pub mod device;
pub mod geometry;
pub mod inbox;
pub mod palette;
pub mod renderer;
pub mod revision;
pub mod supervisor;

pub use advertising::{AdvertisingError, AdvertisingPayload, advertising_payload};
pub use chain::{ChainError, ChainId, OutputDriver, PixelChain, PixelChains};
pub use command::{CommandError, CommandParser, RenderRequest, decode};
pub use device::{Device, DeviceEvent, MAX_COMMAND_LEN, Payload, SetupError};
pub use geometry::{GeometryError, Montage, MontageTable, Segment, Selection};
pub use inbox::DeviceInbox;
pub use palette::Palette;
pub use renderer::MontageRenderer;
pub use revision::{FOUR_CHAIN, HardwareRevision, SINGLE_CHAIN};
pub use supervisor::{LinkAction, LinkError, LinkState, LinkSupervisor, PowerSupervisor};

/// Pixel color type shared with the `smart-leds` ecosystem
pub type Rgb = smart_leds::RGB8;

/// Unlit pixel
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
