//! # AC IR Protocol Module
//!
//! Implementation of the remote's infrared wire protocol.
//!
//! This module handles:
//! - Lookup tables for temperature, fan speed and mode wire codes
//! - 6-byte packet encoding (state packets and fixed special commands)
//! - Inverted-byte redundancy and the (0xFD - sum) packet checksum
//! - Expansion of a packet into the pulse-distance timing sequence

pub mod checksum;
pub mod encoder;
pub mod tables;
pub mod timing;
