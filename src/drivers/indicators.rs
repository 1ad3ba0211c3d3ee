//! Ok/full status LED pair.
//!
//! Two discrete LEDs on plain GPIO outputs: green while the tank has room,
//! red once it is full. They are driven in strict mutual exclusion, and the
//! LED being switched off is always written first so both are never lit at
//! once, even for the instant between the two writes.
//!
//! Generic over [`embedded_hal::digital::OutputPin`], so any HAL's pin
//! driver (or the host simulation pin) plugs in unchanged.

use embedded_hal::digital::OutputPin;

use crate::error::ActuatorError;
use crate::threshold::TankStatus;

pub struct StatusIndicators<OK, FULL> {
    ok: OK,
    full: FULL,
    current: Option<TankStatus>,
}

impl<OK: OutputPin, FULL: OutputPin> StatusIndicators<OK, FULL> {
    pub fn new(ok: OK, full: FULL) -> Self {
        Self {
            ok,
            full,
            current: None,
        }
    }

    /// Light the LED for `status` and extinguish the other.
    pub fn show(&mut self, status: TankStatus) -> Result<(), ActuatorError> {
        match status {
            TankStatus::Ok => {
                self.full.set_low().map_err(|_| ActuatorError::IndicatorWriteFailed)?;
                self.ok.set_high().map_err(|_| ActuatorError::IndicatorWriteFailed)?;
            }
            TankStatus::Full => {
                self.ok.set_low().map_err(|_| ActuatorError::IndicatorWriteFailed)?;
                self.full.set_high().map_err(|_| ActuatorError::IndicatorWriteFailed)?;
            }
        }
        self.current = Some(status);
        Ok(())
    }

    /// Status last shown, `None` before the first write.
    pub fn current(&self) -> Option<TankStatus> {
        self.current
    }

    pub fn pins(&self) -> (&OK, &FULL) {
        (&self.ok, &self.full)
    }
}
