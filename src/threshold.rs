//! Threshold evaluator.
//!
//! The tank is either `Ok` or `Full`; there is no in-between. The status
//! drives the two indicator LEDs in strict mutual exclusion: exactly one of
//! them is lit at any time.
//!
//! [`ThresholdMonitor`] runs after every accepted fill. It latches the last
//! status so that a flip is logged once, on the edge, rather than on every
//! cycle.

use log::{info, warn};

use crate::tank::TankState;

/// Binary fill status derived from level versus capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TankStatus {
    #[default]
    Ok,
    Full,
}

impl TankStatus {
    /// `(ok_indicator, full_indicator)` for this status.
    pub const fn indicators(self) -> (bool, bool) {
        match self {
            Self::Ok => (true, false),
            Self::Full => (false, true),
        }
    }
}

/// `Full` iff the level has reached capacity.
pub fn evaluate(state: &TankState) -> TankStatus {
    if state.level() >= state.capacity() {
        TankStatus::Full
    } else {
        TankStatus::Ok
    }
}

/// Edge-detecting wrapper around [`evaluate`].
pub struct ThresholdMonitor {
    status: TankStatus,
}

impl ThresholdMonitor {
    pub fn new() -> Self {
        Self {
            status: TankStatus::Ok,
        }
    }

    /// Re-evaluate `state`. Returns the new status and, if it differs from
    /// the previous one, the status it replaced.
    pub fn update(&mut self, state: &TankState) -> (TankStatus, Option<TankStatus>) {
        let next = evaluate(state);
        if next == self.status {
            return (next, None);
        }

        match next {
            TankStatus::Full => warn!("THRESHOLD SET: tank full at {}L", state.level()),
            TankStatus::Ok => info!("THRESHOLD CLEARED: {}L below capacity", state.level()),
        }
        let prev = core::mem::replace(&mut self.status, next);
        (next, Some(prev))
    }

    /// Last evaluated status.
    pub fn status(&self) -> TankStatus {
        self.status
    }
}

impl Default for ThresholdMonitor {
    fn default() -> Self {
        Self::new()
    }
}
