//! Event intake for the device task
//!
//! Link and command events are queued in order. The power button keeps
//! only its latest level and is always taken before anything queued, so a
//! burst of wireless writes can never push a power edge out.

use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Channel, TrySendError};
use embassy_sync::signal::Signal;

use crate::device::DeviceEvent;

pub struct DeviceInbox<M: RawMutex, const DEPTH: usize> {
    button: Signal<M, bool>,
    events: Channel<M, DeviceEvent, DEPTH>,
}

impl<M: RawMutex, const DEPTH: usize> DeviceInbox<M, DEPTH> {
    pub const fn new() -> Self {
        Self {
            button: Signal::new(),
            events: Channel::new(),
        }
    }

    /// Record a button level, safe to call from interrupt context
    ///
    /// An edge not yet taken is replaced by the newer one.
    pub fn button_edge(&self, pressed: bool) {
        self.button.signal(pressed);
    }

    /// Queue a link or command event, waiting for room
    pub async fn post(&self, event: DeviceEvent) {
        self.events.send(event).await;
    }

    /// Queue an event without waiting
    pub fn try_post(&self, event: DeviceEvent) -> Result<(), DeviceEvent> {
        self.events.try_send(event).map_err(|TrySendError::Full(event)| event)
    }

    /// Next event to handle, a pending button edge first
    pub async fn next(&self) -> DeviceEvent {
        match select(self.button.wait(), self.events.receive()).await {
            Either::First(true) => DeviceEvent::ButtonPressed,
            Either::First(false) => DeviceEvent::ButtonReleased,
            Either::Second(event) => event,
        }
    }
}

impl<M: RawMutex, const DEPTH: usize> Default for DeviceInbox<M, DEPTH> {
    fn default() -> Self {
        Self::new()
    }
}
