//! Unified error types for the tank monitor.
//!
//! One `Error` enum that every subsystem converts into, so the input loop
//! handles every failure the same way: report it, drop the input, keep
//! polling. All variants are `Copy` so they can be carried inside
//! [`AppEvent`](crate::app::events::AppEvent)s without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the monitor funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input byte is not one of the recognised fill codes.
    Input(InputError),
    /// The fill request was refused by the level tracker.
    Fill(FillError),
    /// An output device write failed.
    Actuator(ActuatorError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "input: {e}"),
            Self::Fill(e) => write!(f, "fill: {e}"),
            Self::Actuator(e) => write!(f, "actuator: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Input errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Byte outside `A`..=`E`. Carries the raw byte for the diagnostic.
    InvalidCode(u8),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCode(code) if code.is_ascii_graphic() => {
                write!(f, "invalid option '{}', use A, B, C, D or E", *code as char)
            }
            Self::InvalidCode(code) => {
                write!(f, "invalid option 0x{code:02x}, use A, B, C, D or E")
            }
        }
    }
}

impl From<InputError> for Error {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

// ---------------------------------------------------------------------------
// Fill errors
// ---------------------------------------------------------------------------

/// Refusals from [`TankState::apply_increment`](crate::tank::TankState::apply_increment).
/// Neither variant mutates the tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillError {
    /// The tank is already at capacity.
    AlreadyFull,
    /// `level + amount` would overshoot capacity.
    WouldExceedCapacity { level: u32, amount: u32 },
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyFull => write!(f, "maximum capacity reached"),
            Self::WouldExceedCapacity { level, amount } => {
                write!(f, "adding {amount}L to {level}L exceeds capacity")
            }
        }
    }
}

impl From<FillError> for Error {
    fn from(e: FillError) -> Self {
        Self::Fill(e)
    }
}

// ---------------------------------------------------------------------------
// Actuator errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorError {
    /// GPIO write to one of the status LEDs failed.
    IndicatorWriteFailed,
    /// Pushing a colour word to the matrix failed.
    MatrixWriteFailed,
    /// Drawing to or flushing the OLED failed.
    DisplayWriteFailed,
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndicatorWriteFailed => write!(f, "indicator write failed"),
            Self::MatrixWriteFailed => write!(f, "LED matrix write failed"),
            Self::DisplayWriteFailed => write!(f, "display write failed"),
        }
    }
}

impl From<ActuatorError> for Error {
    fn from(e: ActuatorError) -> Self {
        Self::Actuator(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
