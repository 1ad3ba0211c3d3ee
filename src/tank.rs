//! Level tracker.
//!
//! [`TankState`] owns the accumulated volume and the fixed capacity. It is
//! the only place the level changes, and it only ever goes up: there is no
//! drain operation. Increments are all-or-nothing. A request that would
//! overshoot is refused whole rather than topped up to the brim.

use log::debug;

use crate::error::FillError;

/// Maximum volume of the tank, in litres.
pub const CAPACITY_LITRES: u32 = 500;

/// Current fill state of the single tank.
///
/// Invariant: `0 <= level <= capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TankState {
    level: u32,
    capacity: u32,
}

impl TankState {
    /// An empty tank with the board's fixed capacity.
    pub const fn new() -> Self {
        Self {
            level: 0,
            capacity: CAPACITY_LITRES,
        }
    }

    /// Litres currently in the tank.
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Maximum litres the tank holds.
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Litres still free.
    pub const fn headroom(&self) -> u32 {
        self.capacity - self.level
    }

    pub const fn is_full(&self) -> bool {
        self.level >= self.capacity
    }

    /// Add `amount` litres and return the new level.
    ///
    /// Refuses with [`FillError::AlreadyFull`] when the tank is at capacity,
    /// checked before anything else, and with
    /// [`FillError::WouldExceedCapacity`] when the sum would pass capacity.
    /// Reaching capacity exactly is allowed. On refusal the level is
    /// untouched.
    pub fn apply_increment(&mut self, amount: u32) -> Result<u32, FillError> {
        if self.level == self.capacity {
            return Err(FillError::AlreadyFull);
        }

        let next = match self.level.checked_add(amount) {
            Some(next) if next <= self.capacity => next,
            _ => {
                return Err(FillError::WouldExceedCapacity {
                    level: self.level,
                    amount,
                });
            }
        };

        debug!("tank: {}L + {}L -> {}L", self.level, amount, next);
        self.level = next;
        Ok(next)
    }
}

impl Default for TankState {
    fn default() -> Self {
        Self::new()
    }
}
