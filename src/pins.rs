//! GPIO / peripheral pin assignments for the tank monitor board.
//!
//! Single source of truth — every driver and simulated device references
//! this module rather than hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Status LEDs
// ---------------------------------------------------------------------------

/// Green LED: level below capacity.
pub const LED_OK_GPIO: u8 = 11;
/// Red LED: tank full.
pub const LED_FULL_GPIO: u8 = 13;

// ---------------------------------------------------------------------------
// 5×5 addressable LED matrix
// ---------------------------------------------------------------------------

/// Serial data line, driven by a PIO state machine.
pub const MATRIX_DATA_GPIO: u8 = 7;

// ---------------------------------------------------------------------------
// I²C bus (SSD1306 OLED)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: u8 = 14;
pub const I2C_SCL_GPIO: u8 = 15;
/// Bus clock.
pub const I2C_FREQ_HZ: u32 = 400_000;
/// 7-bit OLED address.
pub const OLED_I2C_ADDR: u8 = 0x3C;
