//! Output device drivers.

pub mod indicators;
pub mod led_matrix;
pub mod oled;
