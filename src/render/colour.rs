//! Colour words for the addressable LED matrix.
//!
//! The matrix LEDs take one 32-bit word per cell, MSB first, laid out as
//! `GGRRBB00`: green at bit 24, red at bit 16, blue at bit 8. The low byte
//! is padding that the state machine never shifts out.

/// Colour as (R, G, B) channel intensities, each 0.0–1.0.
pub type RgbF = (f32, f32, f32);

/// Lit water cells are pure blue.
pub const WATER_BLUE: RgbF = (0.0, 0.0, 1.0);

/// Word for an unlit cell.
pub const OFF: u32 = 0;

/// Pack three 0.0–1.0 channels into a matrix word.
///
/// Channels are clamped before scaling so an out-of-range input can never
/// bleed into a neighbouring byte.
pub fn matrix_rgb(r: f32, g: f32, b: f32) -> u32 {
    (scale(g) << 24) | (scale(r) << 16) | (scale(b) << 8)
}

/// Word for a cell of the given brightness in [`WATER_BLUE`].
pub fn water_cell(brightness: f32) -> u32 {
    let (r, g, b) = WATER_BLUE;
    matrix_rgb(r * brightness, g * brightness, b * brightness)
}

/// Inverse of [`matrix_rgb`], as 8-bit `(r, g, b)`.
pub fn unpack(word: u32) -> (u8, u8, u8) {
    let g = (word >> 24) as u8;
    let r = (word >> 16) as u8;
    let b = (word >> 8) as u8;
    (r, g, b)
}

fn scale(channel: f32) -> u32 {
    (channel.clamp(0.0, 1.0) * 255.0) as u32
}
