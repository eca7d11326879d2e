//! # Aircon Bridge Library
//!
//! Drive a vendor-specific air conditioner through a serial-attached
//! infrared blaster.
//!
//! This library provides the core functionality for turning typed AC control
//! commands (temperature, mode, fan speed and toggle functions) into the
//! remote's pulse-distance infrared bitstream, ready for a 38 kHz blaster.

pub mod bridge;
pub mod config;
pub mod error;
pub mod history;
pub mod protocol;
pub mod remote;
pub mod serial;
