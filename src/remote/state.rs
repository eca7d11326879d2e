//! # AC State
//!
//! The virtual-remote state: what the air conditioner is currently set to,
//! as far as this controller knows.
//!
//! Transitions are builder-style: each `with_*` call validates its input
//! and returns a candidate state, leaving the original untouched. The
//! controller encodes the candidate first and only commits it once the
//! encode succeeds, so a rejected input can never corrupt the stored
//! state.

use crate::error::{AirconBridgeError, Result};
use crate::protocol::tables::{FanSpeed, Mode, TEMP_MAX_C, TEMP_MIN_C};
use std::fmt;

/// Current settings of the virtual remote
///
/// The fan speed is always remembered, even while the mode is Auto and the
/// encoder's override code suppresses it on the wire. Leaving Auto
/// restores the previous selection; that persistence is the reason this
/// state exists at all instead of stateless encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcState {
    mode: Mode,
    fan: FanSpeed,
    temperature: u8,
}

impl Default for AcState {
    /// Startup defaults: Cool, auto fan, 24 C
    fn default() -> Self {
        Self {
            mode: Mode::Cool,
            fan: FanSpeed::Auto,
            temperature: 24,
        }
    }
}

impl AcState {
    /// Build a state from explicit settings
    ///
    /// # Errors
    ///
    /// Returns [`AirconBridgeError::OutOfRange`] if `temperature` is
    /// outside 17-30 C.
    pub fn new(mode: Mode, fan: FanSpeed, temperature: u8) -> Result<Self> {
        Self {
            mode,
            fan,
            temperature: 24,
        }
        .with_temperature(temperature)
    }

    /// Current operating mode
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Stored fan selection (what the encoder sees before any override)
    #[must_use]
    pub const fn fan(&self) -> FanSpeed {
        self.fan
    }

    /// Setpoint in degrees Celsius
    #[must_use]
    pub const fn temperature(&self) -> u8 {
        self.temperature
    }

    /// Candidate state with a new setpoint; mode and fan untouched
    ///
    /// # Errors
    ///
    /// Returns [`AirconBridgeError::OutOfRange`] if `celsius` is outside
    /// 17-30 C. `self` is unaffected either way.
    pub fn with_temperature(self, celsius: u8) -> Result<Self> {
        if !(TEMP_MIN_C..=TEMP_MAX_C).contains(&celsius) {
            return Err(AirconBridgeError::OutOfRange(celsius));
        }

        Ok(Self {
            temperature: celsius,
            ..self
        })
    }

    /// Candidate state with a new mode
    ///
    /// The stored fan selection survives the transition in both
    /// directions. Entering Auto does not reset it (the encoder's override
    /// hides it on the wire instead), so switching back out of Auto
    /// resumes with the previously chosen fan speed.
    #[must_use]
    pub fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    /// Candidate state with a new fan selection
    ///
    /// Accepted in every mode. While the mode is Auto the selection is
    /// only remembered; the next packet still carries the auto-mode
    /// override byte.
    #[must_use]
    pub fn with_fan(self, fan: FanSpeed) -> Self {
        Self { fan, ..self }
    }
}

impl fmt::Display for AcState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mode={} temp={}C fan={}",
            self.mode, self.temperature, self.fan
        )
    }
}
