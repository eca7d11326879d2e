//! # Protocol Lookup Tables
//!
//! Static mappings from logical AC settings to their on-wire codes.
//!
//! The temperature table is a deliberately non-linear, Gray-code-like
//! pattern captured from the original remote; it must be reproduced
//! bit-for-bit or the unit will misread the setpoint. Fan and mode codes
//! are total functions over their enums.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AirconBridgeError, Result};

/// Lowest supported setpoint in degrees Celsius
pub const TEMP_MIN_C: u8 = 17;

/// Highest supported setpoint in degrees Celsius
pub const TEMP_MAX_C: u8 = 30;

/// 4-bit temperature codes, indexed by `celsius - 17`
///
/// Non-linear on purpose; captured from the remote, not derived.
const TEMP_CODES: [u8; 14] = [
    0x0, // 17 C
    0x8, // 18 C
    0xC, // 19 C
    0x4, // 20 C
    0x6, // 21 C
    0xE, // 22 C
    0xA, // 23 C
    0x2, // 24 C
    0x3, // 25 C
    0xB, // 26 C
    0x9, // 27 C
    0x1, // 28 C
    0x5, // 29 C
    0xD, // 30 C
];

/// Fan byte the encoder substitutes whenever the mode is [`Mode::Auto`].
///
/// Not a selectable fan speed: auto mode always transmits this code, while
/// the user's fan selection stays remembered in the state store.
pub const AUTO_MODE_FAN_OVERRIDE: u8 = 0xF8;

/// Look up the 4-bit wire code for a temperature setpoint
///
/// # Arguments
///
/// * `celsius` - Setpoint in degrees Celsius (17-30)
///
/// # Returns
///
/// * `Result<u8>` - The 4-bit code, low nibble of byte 4
///
/// # Errors
///
/// Returns [`AirconBridgeError::OutOfRange`] if `celsius` is outside 17-30.
/// Callers are expected to validate or clamp before encoding.
///
/// # Examples
///
/// ```
/// use aircon_bridge::protocol::tables::temperature_code;
///
/// assert_eq!(temperature_code(24).unwrap(), 0x2);
/// assert!(temperature_code(16).is_err());
/// ```
pub fn temperature_code(celsius: u8) -> Result<u8> {
    if !(TEMP_MIN_C..=TEMP_MAX_C).contains(&celsius) {
        return Err(AirconBridgeError::OutOfRange(celsius));
    }

    Ok(TEMP_CODES[(celsius - TEMP_MIN_C) as usize])
}

/// Operating mode of the air conditioner
///
/// Only the three modes the remote documents; Dry and Fan-only have no
/// known wire codes and are not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Cool,
    Auto,
    Heat,
}

impl Mode {
    /// 4-bit mode code, high nibble of byte 4
    #[must_use]
    pub const fn wire_code(self) -> u8 {
        match self {
            Mode::Cool => 0x0,
            Mode::Auto => 0x1,
            Mode::Heat => 0x3,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Cool => write!(f, "cool"),
            Mode::Auto => write!(f, "auto"),
            Mode::Heat => write!(f, "heat"),
        }
    }
}

/// Fan speed selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FanSpeed {
    Auto,
    Low,
    Medium,
    High,
}

impl FanSpeed {
    /// Fan byte (byte 2 of a state packet, before the auto-mode override)
    #[must_use]
    pub const fn wire_code(self) -> u8 {
        match self {
            FanSpeed::Auto => 0xFD,
            FanSpeed::Low => 0xF9,
            FanSpeed::Medium => 0xFA,
            FanSpeed::High => 0xFC,
        }
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FanSpeed::Auto => write!(f, "auto"),
            FanSpeed::Low => write!(f, "low"),
            FanSpeed::Medium => write!(f, "medium"),
            FanSpeed::High => write!(f, "high"),
        }
    }
}
