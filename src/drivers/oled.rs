//! Two-line OLED text panel.
//!
//! Lays out the level label and the level value on any monochrome
//! [`DrawTarget`]. Drawing goes to the target's frame buffer; nothing is
//! visible until [`FlushTarget::flush`] sends the buffer to the glass. Each
//! redraw clears the whole buffer first so a shorter value never leaves
//! stale digits behind.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::error::ActuatorError;

/// Buffered displays that need an explicit transfer to show a frame.
pub trait FlushTarget {
    fn flush(&mut self) -> Result<(), ActuatorError>;
}

pub struct OledPanel<D> {
    target: D,
    label_origin: Point,
    level_origin: Point,
}

impl<D> OledPanel<D>
where
    D: DrawTarget<Color = BinaryColor> + FlushTarget,
{
    pub fn new(target: D, label_origin: (i32, i32), level_origin: (i32, i32)) -> Self {
        Self {
            target,
            label_origin: Point::new(label_origin.0, label_origin.1),
            level_origin: Point::new(level_origin.0, level_origin.1),
        }
    }

    /// Blank the panel.
    pub fn clear(&mut self) -> Result<(), ActuatorError> {
        self.target
            .clear(BinaryColor::Off)
            .map_err(|_| ActuatorError::DisplayWriteFailed)?;
        self.target.flush()
    }

    /// Redraw with `label` above `level`.
    pub fn show(&mut self, label: &str, level: &str) -> Result<(), ActuatorError> {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

        self.target
            .clear(BinaryColor::Off)
            .map_err(|_| ActuatorError::DisplayWriteFailed)?;
        Text::with_baseline(label, self.label_origin, style, Baseline::Top)
            .draw(&mut self.target)
            .map_err(|_| ActuatorError::DisplayWriteFailed)?;
        Text::with_baseline(level, self.level_origin, style, Baseline::Top)
            .draw(&mut self.target)
            .map_err(|_| ActuatorError::DisplayWriteFailed)?;
        self.target.flush()
    }

    pub fn target(&self) -> &D {
        &self.target
    }
}
