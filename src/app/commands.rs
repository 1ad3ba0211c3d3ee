//! Inbound fill commands.
//!
//! The operator types one key per fill. Exactly five keys are recognised;
//! anything else is refused before it reaches the level tracker.

use core::fmt;

use crate::error::InputError;

/// A request to add a fixed volume to the tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillCommand {
    /// `A`: 100 L.
    Add100,
    /// `B`: 200 L.
    Add200,
    /// `C`: 300 L.
    Add300,
    /// `D`: 400 L.
    Add400,
    /// `E`: 500 L.
    Add500,
}

impl FillCommand {
    /// Every command, in key order.
    pub const ALL: [Self; 5] = [
        Self::Add100,
        Self::Add200,
        Self::Add300,
        Self::Add400,
        Self::Add500,
    ];

    /// Decode one input byte. Case-sensitive: `a` is not `A`.
    pub fn from_code(code: u8) -> Result<Self, InputError> {
        match code {
            b'A' => Ok(Self::Add100),
            b'B' => Ok(Self::Add200),
            b'C' => Ok(Self::Add300),
            b'D' => Ok(Self::Add400),
            b'E' => Ok(Self::Add500),
            other => Err(InputError::InvalidCode(other)),
        }
    }

    /// Key that selects this command.
    pub const fn code(self) -> u8 {
        match self {
            Self::Add100 => b'A',
            Self::Add200 => b'B',
            Self::Add300 => b'C',
            Self::Add400 => b'D',
            Self::Add500 => b'E',
        }
    }

    /// Volume added, in litres.
    pub const fn litres(self) -> u32 {
        match self {
            Self::Add100 => 100,
            Self::Add200 => 200,
            Self::Add300 => 300,
            Self::Add400 => 400,
            Self::Add500 => 500,
        }
    }
}

impl TryFrom<u8> for FillCommand {
    type Error = InputError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl fmt::Display for FillCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' ({}L)", self.code() as char, self.litres())
    }
}
