//! # Remote Module
//!
//! The virtual remote: typed commands and the persistent AC state.
//!
//! This module handles:
//! - Parsing command tokens (`t24`, `mc`, `fl`, `led`, ...) into typed commands
//! - Holding the virtual-remote state (mode, setpoint, fan speed)
//! - Validated state transitions for the encode-then-commit cycle

pub mod command;
pub mod state;
