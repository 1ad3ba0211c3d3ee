//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (console input, LED drivers, display, event sinks)
//! implement these traits. The [`AppService`](super::service::AppService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.

use crate::error::ActuatorError;
use crate::render::patterns::MATRIX_CELLS;
use crate::threshold::TankStatus;

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: operator → domain)
// ───────────────────────────────────────────────────────────────

/// Source of single-byte fill codes.
pub trait InputPort {
    /// Whether an operator link is up. Polling is skipped while it is down.
    fn is_connected(&self) -> bool;

    /// Next input byte, skipping whitespace. `None` if nothing is pending
    /// or the link has closed.
    fn read_code(&mut self) -> Option<u8>;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → output devices)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the three output devices.
pub trait ActuatorPort {
    /// Drive the ok/full LED pair for `status`. Exactly one LED ends up lit.
    fn set_indicators(&mut self, status: TankStatus) -> Result<(), ActuatorError>;

    /// Show a full matrix frame. `words` is in logical row-major order; the
    /// adapter owns the physical push order.
    fn draw_matrix(&mut self, words: &[u32; MATRIX_CELLS]) -> Result<(), ActuatorError>;

    /// Blank the character display.
    fn clear_display(&mut self) -> Result<(), ActuatorError>;

    /// Redraw the display with `label` on the first line and `level` on the
    /// second.
    fn show_text(&mut self, label: &str, level: &str) -> Result<(), ActuatorError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
