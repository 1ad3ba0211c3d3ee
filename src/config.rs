//! System configuration parameters
//!
//! Runtime tunables for the monitor loop and output layout. Tank capacity,
//! grid size and tier count are board constants and deliberately absent.
//!
//! Defaults can be overridden with a JSON object in the `TANKMON_CONFIG`
//! environment variable; missing fields keep their defaults.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable holding an optional JSON override.
pub const CONFIG_ENV_VAR: &str = "TANKMON_CONFIG";

/// OLED panel width in pixels.
pub const DISPLAY_WIDTH: u32 = 128;
/// OLED panel height in pixels.
pub const DISPLAY_HEIGHT: u32 = 64;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Timing ---
    /// Idle pause between input polls (milliseconds)
    pub poll_interval_ms: u32,
    /// Latch time after pushing a matrix frame (milliseconds)
    pub matrix_settle_ms: u32,

    // --- Display layout ---
    /// Top-left pixel of the label line
    pub label_origin: (i32, i32),
    /// Top-left pixel of the level line
    pub level_origin: (i32, i32),

    // --- Simulation ---
    /// Log the matrix as ASCII art after each redraw
    pub echo_matrix: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Timing
            poll_interval_ms: 100,
            matrix_settle_ms: 10,

            // Display layout
            label_origin: (10, 10),
            level_origin: (50, 30),

            // Simulation
            echo_matrix: true,
        }
    }
}

impl SystemConfig {
    /// Range-check every field. Invalid values are rejected, not clamped.
    pub fn validate(&self) -> Result<()> {
        if !(10..=5000).contains(&self.poll_interval_ms) {
            return Err(Error::Config("poll_interval_ms must be 10..=5000"));
        }
        if self.matrix_settle_ms > 1000 {
            return Err(Error::Config("matrix_settle_ms must be <= 1000"));
        }
        if !on_panel(self.label_origin) {
            return Err(Error::Config("label_origin is off the display"));
        }
        if !on_panel(self.level_origin) {
            return Err(Error::Config("level_origin is off the display"));
        }
        Ok(())
    }

    /// Parse and validate a JSON override.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed JSON"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Load the configuration from [`CONFIG_ENV_VAR`], falling back to defaults
/// when it is unset or invalid.
pub fn load_from_env() -> SystemConfig {
    match std::env::var(CONFIG_ENV_VAR) {
        Ok(json) => match SystemConfig::from_json(&json) {
            Ok(cfg) => {
                info!("Config loaded from {}", CONFIG_ENV_VAR);
                cfg
            }
            Err(e) => {
                warn!("{} rejected ({}), using defaults", CONFIG_ENV_VAR, e);
                SystemConfig::default()
            }
        },
        Err(_) => SystemConfig::default(),
    }
}

fn on_panel((x, y): (i32, i32)) -> bool {
    (0..DISPLAY_WIDTH as i32).contains(&x) && (0..DISPLAY_HEIGHT as i32).contains(&y)
}
