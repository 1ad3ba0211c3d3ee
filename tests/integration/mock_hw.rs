//! Mock adapters for integration tests.
//!
//! Records every actuator call and every emitted event so tests can assert
//! on the full history without any output device.

use std::collections::VecDeque;

use tankmon::app::events::AppEvent;
use tankmon::app::ports::{ActuatorPort, EventSink, InputPort};
use tankmon::error::ActuatorError;
use tankmon::render::patterns::MATRIX_CELLS;
use tankmon::threshold::TankStatus;

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ActuatorCall {
    Indicators(TankStatus),
    Matrix([u32; MATRIX_CELLS]),
    ClearDisplay,
    Text { label: String, level: String },
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub calls: Vec<ActuatorCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    pub fn last_call(&self) -> Option<&ActuatorCall> {
        self.calls.last()
    }

    /// Status the LEDs were last driven to.
    pub fn indicators(&self) -> Option<TankStatus> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::Indicators(s) => Some(*s),
            _ => None,
        })
    }

    /// Last frame sent to the matrix.
    pub fn matrix(&self) -> Option<&[u32; MATRIX_CELLS]> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::Matrix(words) => Some(words),
            _ => None,
        })
    }

    /// Last level string shown on the display.
    pub fn level_text(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::Text { level, .. } => Some(level.as_str()),
            _ => None,
        })
    }

    pub fn matrix_draws(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, ActuatorCall::Matrix(_)))
            .count()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl ActuatorPort for MockHardware {
    fn set_indicators(&mut self, status: TankStatus) -> Result<(), ActuatorError> {
        self.calls.push(ActuatorCall::Indicators(status));
        Ok(())
    }

    fn draw_matrix(&mut self, words: &[u32; MATRIX_CELLS]) -> Result<(), ActuatorError> {
        self.calls.push(ActuatorCall::Matrix(*words));
        Ok(())
    }

    fn clear_display(&mut self) -> Result<(), ActuatorError> {
        self.calls.push(ActuatorCall::ClearDisplay);
        Ok(())
    }

    fn show_text(&mut self, label: &str, level: &str) -> Result<(), ActuatorError> {
        self.calls.push(ActuatorCall::Text {
            label: label.to_owned(),
            level: level.to_owned(),
        });
        Ok(())
    }
}

// ── ScriptedInput ─────────────────────────────────────────────

/// Replays a fixed byte script, then reports the link as closed.
pub struct ScriptedInput {
    bytes: VecDeque<u8>,
    connected: bool,
}

#[allow(dead_code)]
impl ScriptedInput {
    pub fn new(script: &[u8]) -> Self {
        Self {
            bytes: script.iter().copied().collect(),
            connected: true,
        }
    }

    /// A link that never came up.
    pub fn disconnected(script: &[u8]) -> Self {
        Self {
            connected: false,
            ..Self::new(script)
        }
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }
}

impl InputPort for ScriptedInput {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn read_code(&mut self) -> Option<u8> {
        let next = self.bytes.pop_front();
        if next.is_none() {
            self.connected = false;
        }
        next
    }
}

// ── LogSink ───────────────────────────────────────────────────

pub struct LogSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl LogSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
