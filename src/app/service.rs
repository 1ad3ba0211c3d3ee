//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the tank, the threshold monitor and the current
//! visual frame. One call to [`handle_code`](AppService::handle_code) is one
//! complete input cycle: decode, apply, evaluate, then refresh every output
//! before returning. Nothing is interleaved, so each accepted fill is fully
//! visible before the next key is read.
//!
//! ```text
//!  InputPort ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                │          AppService           │
//! ActuatorPort ◀─│ Tank · Threshold · Renderer   │
//!                └──────────────────────────────┘
//! ```

use log::{info, warn};

use crate::config::SystemConfig;
use crate::error::{ActuatorError, Error};
use crate::render::{self, VisualFrame};
use crate::tank::TankState;
use crate::threshold::{TankStatus, ThresholdMonitor};

use super::commands::FillCommand;
use super::events::AppEvent;
use super::ports::{ActuatorPort, EventSink, InputPort};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    tank: TankState,
    threshold: ThresholdMonitor,
    frame: VisualFrame,
    config: SystemConfig,
    accepted: u32,
    rejected: u32,
}

impl AppService {
    /// Construct the service with an empty tank.
    ///
    /// Does **not** touch any output. Call [`start`](Self::start) next.
    pub fn new(config: SystemConfig) -> Self {
        let tank = TankState::new();
        Self {
            frame: render::render(&tank),
            tank,
            threshold: ThresholdMonitor::new(),
            config,
            accepted: 0,
            rejected: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Put the outputs in their power-on state: ok LED lit, full LED dark,
    /// display blank. The matrix is left dark until the first fill.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        report(hw.set_indicators(self.threshold.status()));
        report(hw.clear_display());
        sink.emit(&AppEvent::Started {
            capacity: self.tank.capacity(),
        });
        info!("AppService started, capacity {}L", self.tank.capacity());
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Input step of one loop tick.
    ///
    /// Returns `None` when the input link is down or nothing is pending,
    /// otherwise the outcome of handling the byte that was read.
    pub fn poll(
        &mut self,
        input: &mut impl InputPort,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> Option<Result<u32, Error>> {
        if !input.is_connected() {
            return None;
        }
        let code = input.read_code()?;
        Some(self.handle_code(code, hw, sink))
    }

    /// Run one full input cycle for `code`: decode → apply → evaluate →
    /// indicators → matrix → display.
    ///
    /// Returns the new level. Every refusal is reported through `sink`
    /// and leaves the tank untouched.
    pub fn handle_code(
        &mut self,
        code: u8,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> Result<u32, Error> {
        let result = FillCommand::from_code(code)
            .map_err(Error::from)
            .and_then(|cmd| self.apply(cmd, hw, sink));

        if let Err(e) = result {
            self.rejected = self.rejected.saturating_add(1);
            sink.emit(&AppEvent::CommandRejected(e));
        }
        result
    }

    /// Apply an already-decoded command.
    pub fn handle_command(
        &mut self,
        cmd: FillCommand,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> Result<u32, Error> {
        self.handle_code(cmd.code(), hw, sink)
    }

    // ── Queries ───────────────────────────────────────────────

    /// Litres currently in the tank.
    pub fn level(&self) -> u32 {
        self.tank.level()
    }

    pub fn tank(&self) -> &TankState {
        &self.tank
    }

    /// Last evaluated threshold status.
    pub fn status(&self) -> TankStatus {
        self.threshold.status()
    }

    /// Frame currently shown on the outputs.
    pub fn frame(&self) -> &VisualFrame {
        &self.frame
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Fills applied since startup.
    pub fn accepted_count(&self) -> u32 {
        self.accepted
    }

    /// Inputs refused since startup.
    pub fn rejected_count(&self) -> u32 {
        self.rejected
    }

    // ── Internal ──────────────────────────────────────────────

    fn apply(
        &mut self,
        cmd: FillCommand,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> Result<u32, Error> {
        let prev = self.tank.level();
        let level = self.tank.apply_increment(cmd.litres())?;
        self.accepted = self.accepted.saturating_add(1);

        sink.emit(&AppEvent::CommandAccepted {
            command: cmd,
            level,
        });
        sink.emit(&AppEvent::LevelChanged {
            from: prev,
            to: level,
        });

        let (_, flipped) = self.threshold.update(&self.tank);
        if let Some(from) = flipped {
            sink.emit(&AppEvent::StatusChanged {
                from,
                to: self.threshold.status(),
            });
        }

        self.frame = render::render(&self.tank);
        self.apply_outputs(hw);
        Ok(level)
    }

    /// Push the current frame to every output. A failing device is logged
    /// and skipped; the level is already committed.
    fn apply_outputs(&self, hw: &mut impl ActuatorPort) {
        let frame = &self.frame;
        report(hw.set_indicators(frame.status()));
        report(hw.draw_matrix(&frame.matrix_words()));
        report(hw.show_text(frame.label(), frame.level_text.as_str()));
    }
}

fn report(result: Result<(), ActuatorError>) {
    if let Err(e) = result {
        warn!("Output update failed: {}", e);
    }
}
