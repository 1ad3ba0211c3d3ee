//! Hardware adapter — bridges the output drivers to [`ActuatorPort`].
//!
//! Owns the status LED pair, the LED matrix and the OLED panel. It is the
//! only module that touches output devices. Drivers are generic over
//! `embedded-hal` / `embedded-graphics` traits, so the same adapter runs on
//! the board and, via [`SimHardware`], on the host.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::DrawTarget;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::{debug, info};

use crate::adapters::sim::{self, SimOled, SimPin, SimPio, StdDelay};
use crate::app::ports::ActuatorPort;
use crate::config::SystemConfig;
use crate::drivers::indicators::StatusIndicators;
use crate::drivers::led_matrix::{LedMatrix, WordSink};
use crate::drivers::oled::{FlushTarget, OledPanel};
use crate::error::ActuatorError;
use crate::pins;
use crate::render::patterns::MATRIX_CELLS;
use crate::threshold::TankStatus;

/// Concrete adapter that combines all output hardware behind the port trait.
pub struct HardwareAdapter<OK, FULL, S, D, P> {
    indicators: StatusIndicators<OK, FULL>,
    matrix: LedMatrix<S, D>,
    panel: OledPanel<P>,
    echo_matrix: bool,
}

impl<OK, FULL, S, D, P> HardwareAdapter<OK, FULL, S, D, P>
where
    OK: OutputPin,
    FULL: OutputPin,
    S: WordSink,
    D: DelayNs,
    P: DrawTarget<Color = BinaryColor> + FlushTarget,
{
    pub fn new(
        indicators: StatusIndicators<OK, FULL>,
        matrix: LedMatrix<S, D>,
        panel: OledPanel<P>,
        echo_matrix: bool,
    ) -> Self {
        Self {
            indicators,
            matrix,
            panel,
            echo_matrix,
        }
    }

    pub fn indicators(&self) -> &StatusIndicators<OK, FULL> {
        &self.indicators
    }

    pub fn matrix(&self) -> &LedMatrix<S, D> {
        &self.matrix
    }

    pub fn panel(&self) -> &OledPanel<P> {
        &self.panel
    }
}

/// Output stack with every device simulated on the host.
pub type SimHardware = HardwareAdapter<SimPin, SimPin, SimPio, StdDelay, SimOled>;

impl SimHardware {
    pub fn simulated(config: &SystemConfig) -> Self {
        debug!(
            "HW | sim outputs: ok=GPIO{} full=GPIO{} matrix=GPIO{} oled=0x{:02X}@{}Hz",
            pins::LED_OK_GPIO,
            pins::LED_FULL_GPIO,
            pins::MATRIX_DATA_GPIO,
            pins::OLED_I2C_ADDR,
            pins::I2C_FREQ_HZ,
        );
        Self::new(
            StatusIndicators::new(
                SimPin::new(pins::LED_OK_GPIO),
                SimPin::new(pins::LED_FULL_GPIO),
            ),
            LedMatrix::new(SimPio::new(), StdDelay, config.matrix_settle_ms),
            OledPanel::new(SimOled::new(), config.label_origin, config.level_origin),
            config.echo_matrix,
        )
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<OK, FULL, S, D, P> ActuatorPort for HardwareAdapter<OK, FULL, S, D, P>
where
    OK: OutputPin,
    FULL: OutputPin,
    S: WordSink,
    D: DelayNs,
    P: DrawTarget<Color = BinaryColor> + FlushTarget,
{
    fn set_indicators(&mut self, status: TankStatus) -> Result<(), ActuatorError> {
        self.indicators.show(status)
    }

    fn draw_matrix(&mut self, words: &[u32; MATRIX_CELLS]) -> Result<(), ActuatorError> {
        self.matrix.draw(words)?;
        if self.echo_matrix {
            info!("MATRIX |\n{}", sim::matrix_ascii(words));
        }
        Ok(())
    }

    fn clear_display(&mut self) -> Result<(), ActuatorError> {
        self.panel.clear()
    }

    fn show_text(&mut self, label: &str, level: &str) -> Result<(), ActuatorError> {
        self.panel.show(label, level)?;
        info!("OLED | {} / {}", label, level);
        Ok(())
    }
}
