//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to the
//! logger (stderr on the host, the serial console on the board). This is
//! the operator's only feedback channel for refused keys.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { capacity } => {
                info!("START | capacity={}L", capacity);
            }
            AppEvent::CommandAccepted { command, level } => {
                info!("FILL | {} accepted, tank now {}L", command, level);
            }
            AppEvent::CommandRejected(e) => {
                warn!("REJECT | {}", e);
            }
            AppEvent::LevelChanged { from, to } => {
                info!("LEVEL | {}L -> {}L", from, to);
            }
            AppEvent::StatusChanged { from, to } => {
                info!("STATUS | {:?} -> {:?}", from, to);
            }
        }
    }
}
