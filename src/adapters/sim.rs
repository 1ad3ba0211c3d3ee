//! Host-side stand-ins for the board peripherals.
//!
//! | Device   | Stand-in    | Implements                          |
//! |----------|-------------|-------------------------------------|
//! | GPIO LED | `SimPin`    | `embedded_hal::digital::OutputPin`  |
//! | PIO FIFO | `SimPio`    | [`WordSink`]                        |
//! | SSD1306  | `SimOled`   | `DrawTarget<BinaryColor>`, [`FlushTarget`] |
//! | sleep    | `StdDelay`  | `embedded_hal::delay::DelayNs`      |
//!
//! Each one keeps enough state for tests to assert on what the real device
//! would be showing.

use core::convert::Infallible;
use std::time::Duration;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::drivers::led_matrix::WordSink;
use crate::drivers::oled::FlushTarget;
use crate::error::ActuatorError;
use crate::render::colour;
use crate::render::patterns::{MATRIX_CELLS, MATRIX_SIDE};

// ── GPIO ──────────────────────────────────────────────────────

/// Simulated push-pull output.
#[derive(Debug)]
pub struct SimPin {
    gpio: u8,
    high: bool,
    writes: u32,
}

impl SimPin {
    pub fn new(gpio: u8) -> Self {
        Self {
            gpio,
            high: false,
            writes: 0,
        }
    }

    pub fn gpio(&self) -> u8 {
        self.gpio
    }

    pub fn is_high(&self) -> bool {
        self.high
    }

    /// Level writes since construction.
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        self.writes += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        self.writes += 1;
        Ok(())
    }
}

// ── PIO TX FIFO ───────────────────────────────────────────────

/// Collects matrix words and reassembles complete frames.
#[derive(Debug)]
pub struct SimPio {
    pending: heapless::Vec<u32, MATRIX_CELLS>,
    /// Last complete frame, in the order the words arrived.
    wire: [u32; MATRIX_CELLS],
    frames: u32,
}

impl SimPio {
    pub fn new() -> Self {
        Self {
            pending: heapless::Vec::new(),
            wire: [colour::OFF; MATRIX_CELLS],
            frames: 0,
        }
    }

    /// Last frame as received on the data line.
    pub fn wire_order(&self) -> &[u32; MATRIX_CELLS] {
        &self.wire
    }

    /// Last frame mapped back onto the grid (row-major, top row first).
    pub fn grid(&self) -> [u32; MATRIX_CELLS] {
        core::array::from_fn(|cell| self.wire[MATRIX_CELLS - 1 - cell])
    }

    /// Complete frames received.
    pub fn frames(&self) -> u32 {
        self.frames
    }
}

impl Default for SimPio {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSink for SimPio {
    fn put_word(&mut self, word: u32) -> Result<(), ActuatorError> {
        self.pending
            .push(word)
            .map_err(|_| ActuatorError::MatrixWriteFailed)?;
        if self.pending.is_full() {
            self.wire.copy_from_slice(&self.pending);
            self.pending.clear();
            self.frames += 1;
        }
        Ok(())
    }
}

/// Render a logical matrix frame as five rows of `#` (lit) and `.` (off).
pub fn matrix_ascii(words: &[u32; MATRIX_CELLS]) -> String {
    words
        .chunks(MATRIX_SIDE)
        .map(|row| {
            row.iter()
                .map(|&w| if w == colour::OFF { '.' } else { '#' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ── SSD1306 ───────────────────────────────────────────────────

/// 128×64 monochrome panel. One `u128` per row, bit `x` = column `x`.
#[derive(Debug)]
pub struct SimOled {
    ram: [u128; DISPLAY_HEIGHT as usize],
    shown: [u128; DISPLAY_HEIGHT as usize],
    flushes: u32,
}

impl SimOled {
    pub fn new() -> Self {
        Self {
            ram: [0; DISPLAY_HEIGHT as usize],
            shown: [0; DISPLAY_HEIGHT as usize],
            flushes: 0,
        }
    }

    /// Whether the pixel at `(x, y)` is lit on the glass.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        x < DISPLAY_WIDTH && y < DISPLAY_HEIGHT && (self.shown[y as usize] >> x) & 1 == 1
    }

    /// Lit pixels on the glass within rows `rows`.
    pub fn lit_in_rows(&self, rows: core::ops::Range<u32>) -> u32 {
        rows.filter(|&y| y < DISPLAY_HEIGHT)
            .map(|y| self.shown[y as usize].count_ones())
            .sum()
    }

    pub fn is_blank(&self) -> bool {
        self.shown.iter().all(|&row| row == 0)
    }

    /// Buffer transfers since construction.
    pub fn flushes(&self) -> u32 {
        self.flushes
    }
}

impl Default for SimOled {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for SimOled {
    fn size(&self) -> Size {
        Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }
}

impl DrawTarget for SimOled {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // Off-panel pixels are clipped, as on the real controller.
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            if x >= DISPLAY_WIDTH || y >= DISPLAY_HEIGHT {
                continue;
            }
            let row = &mut self.ram[y as usize];
            match color {
                BinaryColor::On => *row |= 1u128 << x,
                BinaryColor::Off => *row &= !(1u128 << x),
            }
        }
        Ok(())
    }
}

impl FlushTarget for SimOled {
    fn flush(&mut self) -> Result<(), ActuatorError> {
        self.shown = self.ram;
        self.flushes += 1;
        Ok(())
    }
}

// ── Delay ─────────────────────────────────────────────────────

/// Blocking delay backed by `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }
}
