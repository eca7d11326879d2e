//! # Command Tokens
//!
//! Typed commands and the short token grammar used on the control line.
//!
//! ## Token grammar
//!
//! | Token | Command |
//! |-------|---------|
//! | `t17` .. `t30` | set temperature setpoint |
//! | `mc` / `ma` / `mh` | set mode Cool / Auto / Heat |
//! | `fa` / `fl` / `fm` / `fh` | set fan Auto / Low / Medium / High |
//! | `led` | toggle the display LED |
//! | `turbo` | toggle turbo mode |
//! | `swing` | toggle the swing louver |
//! | `off` | power the unit off |
//!
//! Tokens are case-insensitive. Temperature validation happens at the
//! state store, not here: `t99` parses into a command and is rejected when
//! the transition is attempted, so the parser stays a thin grammar layer.

use crate::error::{AirconBridgeError, Result};
use crate::protocol::encoder::SpecialCommand;
use crate::protocol::tables::{FanSpeed, Mode};
use std::fmt;
use std::str::FromStr;

/// A validated control command, the input boundary of the core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Set the temperature setpoint in degrees Celsius
    SetTemperature(u8),
    /// Set the operating mode
    SetMode(Mode),
    /// Set the fan speed
    SetFan(FanSpeed),
    /// Fire one of the stateless toggle commands
    Special(SpecialCommand),
}

impl FromStr for Command {
    type Err = AirconBridgeError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim().to_lowercase();

        if let Some(digits) = token.strip_prefix('t') {
            if let Ok(celsius) = digits.parse::<u8>() {
                return Ok(Command::SetTemperature(celsius));
            }
        }

        match token.as_str() {
            "mc" => Ok(Command::SetMode(Mode::Cool)),
            "ma" => Ok(Command::SetMode(Mode::Auto)),
            "mh" => Ok(Command::SetMode(Mode::Heat)),
            "fa" => Ok(Command::SetFan(FanSpeed::Auto)),
            "fl" => Ok(Command::SetFan(FanSpeed::Low)),
            "fm" => Ok(Command::SetFan(FanSpeed::Medium)),
            "fh" => Ok(Command::SetFan(FanSpeed::High)),
            "led" => Ok(Command::Special(SpecialCommand::Led)),
            "turbo" => Ok(Command::Special(SpecialCommand::Turbo)),
            "swing" => Ok(Command::Special(SpecialCommand::Swing)),
            "off" => Ok(Command::Special(SpecialCommand::PowerOff)),
            _ => Err(AirconBridgeError::UnknownCommand(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Command {
    /// Round-trips through the token grammar, e.g. `t24` or `led`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::SetTemperature(celsius) => write!(f, "t{}", celsius),
            Command::SetMode(Mode::Cool) => write!(f, "mc"),
            Command::SetMode(Mode::Auto) => write!(f, "ma"),
            Command::SetMode(Mode::Heat) => write!(f, "mh"),
            Command::SetFan(FanSpeed::Auto) => write!(f, "fa"),
            Command::SetFan(FanSpeed::Low) => write!(f, "fl"),
            Command::SetFan(FanSpeed::Medium) => write!(f, "fm"),
            Command::SetFan(FanSpeed::High) => write!(f, "fh"),
            Command::Special(special) => write!(f, "{}", special),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_temperature_tokens() {
        assert_eq!("t17".parse::<Command>().unwrap(), Command::SetTemperature(17));
        assert_eq!("t24".parse::<Command>().unwrap(), Command::SetTemperature(24));
        assert_eq!("t30".parse::<Command>().unwrap(), Command::SetTemperature(30));
    }

    #[test]
    fn test_parse_out_of_range_temperature_still_a_command() {
        // Range enforcement belongs to the state store
        assert_eq!("t99".parse::<Command>().unwrap(), Command::SetTemperature(99));
    }

    #[test]
    fn test_parse_mode_tokens() {
        assert_eq!("mc".parse::<Command>().unwrap(), Command::SetMode(Mode::Cool));
        assert_eq!("ma".parse::<Command>().unwrap(), Command::SetMode(Mode::Auto));
        assert_eq!("mh".parse::<Command>().unwrap(), Command::SetMode(Mode::Heat));
    }

    #[test]
    fn test_parse_fan_tokens() {
        assert_eq!("fa".parse::<Command>().unwrap(), Command::SetFan(FanSpeed::Auto));
        assert_eq!("fl".parse::<Command>().unwrap(), Command::SetFan(FanSpeed::Low));
        assert_eq!("fm".parse::<Command>().unwrap(), Command::SetFan(FanSpeed::Medium));
        assert_eq!("fh".parse::<Command>().unwrap(), Command::SetFan(FanSpeed::High));
    }

    #[test]
    fn test_parse_special_tokens() {
        assert_eq!(
            "led".parse::<Command>().unwrap(),
            Command::Special(SpecialCommand::Led)
        );
        assert_eq!(
            "turbo".parse::<Command>().unwrap(),
            Command::Special(SpecialCommand::Turbo)
        );
        assert_eq!(
            "swing".parse::<Command>().unwrap(),
            Command::Special(SpecialCommand::Swing)
        );
        assert_eq!(
            "off".parse::<Command>().unwrap(),
            Command::Special(SpecialCommand::PowerOff)
        );
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!("  T24 ".parse::<Command>().unwrap(), Command::SetTemperature(24));
        assert_eq!("LED".parse::<Command>().unwrap(), Command::Special(SpecialCommand::Led));
    }

    #[test]
    fn test_parse_unknown_token() {
        for bad in ["", "x", "t", "tableflip", "m", "mx", "f9", "on"] {
            let result = bad.parse::<Command>();
            assert!(result.is_err(), "token {:?} should be rejected", bad);

            match result.unwrap_err() {
                AirconBridgeError::UnknownCommand(_) => {}
                other => panic!("expected UnknownCommand, got: {:?}", other),
            }
        }
    }

    #[test]
    fn test_display_round_trips() {
        let commands = [
            Command::SetTemperature(24),
            Command::SetMode(Mode::Heat),
            Command::SetFan(FanSpeed::Medium),
            Command::Special(SpecialCommand::Swing),
            Command::Special(SpecialCommand::PowerOff),
        ];

        for command in commands {
            let token = command.to_string();
            assert_eq!(token.parse::<Command>().unwrap(), command, "token {:?}", token);
        }
    }
}
