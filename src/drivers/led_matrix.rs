//! 5×5 addressable LED matrix driver.
//!
//! The LEDs form one serial chain clocked out by a PIO state machine. Each
//! cell takes one 32-bit colour word (see [`render::colour`]). The chain is
//! wired from the last cell of the grid back to the first, so a frame is
//! pushed in reverse index order: cell 24 first, cell 0 last.
//!
//! After the last word the line must stay idle long enough for the LEDs to
//! latch; the driver blocks for the configured settle time.
//!
//! [`render::colour`]: crate::render::colour

use embedded_hal::delay::DelayNs;

use crate::error::ActuatorError;
use crate::render::patterns::MATRIX_CELLS;

/// Transmit side of the matrix data line (a PIO TX FIFO on the device).
pub trait WordSink {
    /// Queue one colour word, blocking while the FIFO is full.
    fn put_word(&mut self, word: u32) -> Result<(), ActuatorError>;
}

pub struct LedMatrix<S, D> {
    sink: S,
    delay: D,
    settle_ms: u32,
    frames: u32,
}

impl<S: WordSink, D: DelayNs> LedMatrix<S, D> {
    pub fn new(sink: S, delay: D, settle_ms: u32) -> Self {
        Self {
            sink,
            delay,
            settle_ms,
            frames: 0,
        }
    }

    /// Push `words` (logical row-major order) in wiring order, then wait
    /// for the latch.
    pub fn draw(&mut self, words: &[u32; MATRIX_CELLS]) -> Result<(), ActuatorError> {
        for &word in words.iter().rev() {
            self.sink.put_word(word)?;
        }
        self.delay.delay_ms(self.settle_ms);
        self.frames = self.frames.wrapping_add(1);
        Ok(())
    }

    /// Complete frames pushed since construction.
    pub fn frames_drawn(&self) -> u32 {
        self.frames
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
