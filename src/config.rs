//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.

use serde::de::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::protocol::tables::{FanSpeed, Mode, TEMP_MAX_C, TEMP_MIN_C};
use crate::remote::state::AcState;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub serial: SerialConfig,
    pub remote: RemoteConfig,
    pub history: HistoryConfig,
}

/// Serial port configuration for the IR blaster
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SerialConfig {
    /// Device path; empty means auto-detect the usual candidates
    pub port: String,

    pub baud_rate: u32,
}

/// Startup state of the virtual remote
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RemoteConfig {
    pub temperature: u8,

    pub mode: Mode,

    pub fan: FanSpeed,
}

/// Transmit history configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HistoryConfig {
    pub enabled: bool,

    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            serial: SerialConfig::default(),
            remote: RemoteConfig::default(),
            history: HistoryConfig::default(),
        }
    }
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port: String::new(),
            baud_rate: 115_200,
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            temperature: 24,
            mode: Mode::Cool,
            fan: FanSpeed::Auto,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_file: "./logs/transmit.jsonl".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// * `Result<Config>` - Loaded and validated configuration
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Startup state for the bridge, from the `[remote]` section
    pub fn initial_state(&self) -> Result<AcState> {
        AcState::new(self.remote.mode, self.remote.fan, self.remote.temperature)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns error if any configuration value is out of valid range
    fn validate(&self) -> Result<()> {
        // Serial port may be empty (auto-detect), but the baud rate must be
        // one the blaster firmware supports
        if ![9600, 19200, 38400, 57600, 115200, 230400].contains(&self.serial.baud_rate) {
            return Err(crate::error::AirconBridgeError::Config(
                toml::de::Error::custom(
                    "baud_rate must be one of: 9600, 19200, 38400, 57600, 115200, 230400",
                ),
            ));
        }

        if !(TEMP_MIN_C..=TEMP_MAX_C).contains(&self.remote.temperature) {
            return Err(crate::error::AirconBridgeError::Config(
                toml::de::Error::custom("remote temperature must be between 17 and 30"),
            ));
        }

        if self.history.enabled && self.history.log_file.is_empty() {
            return Err(crate::error::AirconBridgeError::Config(
                toml::de::Error::custom("history log_file cannot be empty when enabled"),
            ));
        }

        Ok(())
    }
}
