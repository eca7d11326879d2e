//! # Error Types
//!
//! Custom error types for Aircon Bridge using `thiserror`.

use thiserror::Error;

/// Main error type for Aircon Bridge
#[derive(Debug, Error)]
pub enum AirconBridgeError {
    /// Temperature outside the supported setpoint range
    #[error("temperature {0} C is outside the supported range 17-30 C")]
    OutOfRange(u8),

    /// Timing buffer too small for the full pulse sequence
    #[error("timing buffer capacity {capacity} cannot hold {needed} pulse entries")]
    CapacityExceeded { needed: usize, capacity: usize },

    /// Unrecognized command token
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),

    /// Serial port errors
    #[error("serial error: {0}")]
    Serial(String),

    /// No IR blaster device found
    #[error("no IR blaster found at any of: {0}")]
    SerialPortNotFound(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// History record serialization errors
    #[error("history log error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Aircon Bridge
pub type Result<T> = std::result::Result<T, AirconBridgeError>;
