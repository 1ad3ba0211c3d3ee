//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other side
//! decide what to do with them: log to the serial console, record them in
//! a test, and so on.

use crate::app::commands::FillCommand;
use crate::error::Error;
use crate::threshold::TankStatus;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service has started (carries the tank capacity).
    Started { capacity: u32 },

    /// A fill was accepted and applied.
    CommandAccepted { command: FillCommand, level: u32 },

    /// An input was refused. State is unchanged.
    CommandRejected(Error),

    /// The tracked level moved.
    LevelChanged { from: u32, to: u32 },

    /// The threshold status flipped.
    StatusChanged { from: TankStatus, to: TankStatus },
}
