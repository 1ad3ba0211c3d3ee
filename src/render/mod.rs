//! Visual renderer — level to matrix pattern, indicator pair and text.
//!
//! [`render`] is a pure projection of [`TankState`]. The result is
//! recomputed after every accepted fill and pushed to all three outputs.
//!
//! ## Tier mapping
//!
//! `tier = clamp(level / 100 - 1, 0, 4)` with integer division. The mapping
//! is coarse: 0–199L all land on tier 0, so an empty tank still shows the
//! bottom row lit. Device behaviour depends on that, so it is kept.
//!
//! | level   | tier | lit rows |
//! |---------|------|----------|
//! | 0–199   | 0    | 1        |
//! | 200–299 | 1    | 2        |
//! | 300–399 | 2    | 3        |
//! | 400–499 | 3    | 4        |
//! | 500     | 4    | 5        |

pub mod colour;
pub mod patterns;

use core::fmt::Write;

use crate::tank::TankState;
use crate::threshold::{self, TankStatus};
use patterns::{MATRIX_CELLS, Pattern, TIER_COUNT};

/// First line of the OLED.
pub const LEVEL_LABEL: &str = "NIVEL DA AGUA";

/// Litres per tier step.
const LITRES_PER_TIER: u32 = 100;

/// Second line of the OLED, e.g. `"350L"`.
pub type LevelText = heapless::String<12>;

/// Everything the three output devices show for one tank state.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualFrame {
    /// Matrix fill tier, 0–4.
    pub tier: usize,
    /// Formatted level for the display.
    pub level_text: LevelText,
    /// Green LED: level below capacity.
    pub ok_indicator: bool,
    /// Red LED: tank full.
    pub full_indicator: bool,
}

impl VisualFrame {
    /// Constant display label.
    pub fn label(&self) -> &'static str {
        LEVEL_LABEL
    }

    pub fn pattern(&self) -> &'static Pattern {
        patterns::pattern(self.tier)
    }

    /// Colour words in logical (row-major) order.
    pub fn matrix_words(&self) -> [u32; MATRIX_CELLS] {
        (*self.pattern()).map(colour::water_cell)
    }

    pub fn status(&self) -> TankStatus {
        if self.full_indicator {
            TankStatus::Full
        } else {
            TankStatus::Ok
        }
    }
}

/// Project `state` onto the three outputs.
pub fn render(state: &TankState) -> VisualFrame {
    let (ok_indicator, full_indicator) = threshold::evaluate(state).indicators();
    VisualFrame {
        tier: tier_for_level(state.level()),
        level_text: format_level(state.level()),
        ok_indicator,
        full_indicator,
    }
}

/// Matrix tier for `level`. See the module docs for the table.
pub fn tier_for_level(level: u32) -> usize {
    let raw = i64::from(level / LITRES_PER_TIER) - 1;
    raw.clamp(0, TIER_COUNT as i64 - 1) as usize
}

/// `"<level>L"`.
pub fn format_level(level: u32) -> LevelText {
    let mut text = LevelText::new();
    // A u32 is at most ten digits, so this always fits.
    let _ = write!(text, "{level}L");
    text
}
