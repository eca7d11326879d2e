//! # Packet Encoder
//!
//! Builds the remote's 6-byte packets from AC state or from the fixed
//! special-command templates.
//!
//! Both paths share the same sealing step: bytes 0-4 are filled in, then
//! byte 5 is the packet checksum. State packets additionally carry the
//! inverted-byte redundancy field (byte 3 = `!byte 2`) that the receiver
//! checks.

use super::checksum::packet_checksum;
use super::tables::{temperature_code, Mode, AUTO_MODE_FAN_OVERRIDE};
use crate::error::Result;
use crate::remote::state::AcState;
use std::fmt;

/// Packet length in bytes (5 body bytes + checksum)
pub const PACKET_LEN: usize = 6;

/// Fixed manufacturer header for state packets
pub const STATE_HEADER: [u8; 2] = [0x4D, 0xB2];

/// A complete 6-byte wire packet, checksum included
///
/// Created fresh on every encode call and immutable once produced; it has
/// no identity beyond its byte values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Packet([u8; PACKET_LEN]);

impl Packet {
    /// Packet bytes, checksum last
    #[must_use]
    pub const fn bytes(&self) -> &[u8; PACKET_LEN] {
        &self.0
    }

    /// Fill bytes 0-4 and seal with the checksum in byte 5
    fn seal(body: [u8; PACKET_LEN - 1]) -> Self {
        let mut bytes = [0u8; PACKET_LEN];
        bytes[..PACKET_LEN - 1].copy_from_slice(&body);
        bytes[PACKET_LEN - 1] = packet_checksum(&body);
        Self(bytes)
    }
}

impl AsRef<[u8]> for Packet {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Packet {
    /// Hex rendering, e.g. `4D B2 FD 02 02 FD`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

/// Encode the current AC state into a wire packet
///
/// Packet layout:
///
/// | Byte | Content |
/// |------|---------|
/// | 0-1  | `4D B2` manufacturer header |
/// | 2    | fan code, overwritten with 0xF8 when mode is Auto |
/// | 3    | bitwise complement of byte 2 |
/// | 4    | `mode_code << 4 \| temperature_code` |
/// | 5    | checksum |
///
/// The auto-mode override is applied after the fan lookup, not instead of
/// it: the stored fan speed is a cross-field interaction handled at encode
/// time, so the state keeps remembering the user's selection for when the
/// mode leaves Auto.
///
/// # Arguments
///
/// * `state` - The virtual-remote state to encode
///
/// # Returns
///
/// * `Result<Packet>` - The sealed 6-byte packet
///
/// # Errors
///
/// Returns [`AirconBridgeError::OutOfRange`](crate::error::AirconBridgeError::OutOfRange)
/// if the state's temperature is outside 17-30 C. States built through
/// [`AcState`]'s validated transitions never trip this.
///
/// # Examples
///
/// ```
/// use aircon_bridge::protocol::encoder::encode_state;
/// use aircon_bridge::remote::state::AcState;
///
/// let packet = encode_state(&AcState::default()).unwrap();
/// assert_eq!(packet.bytes(), &[0x4D, 0xB2, 0xFD, 0x02, 0x02, 0xFD]);
/// ```
pub fn encode_state(state: &AcState) -> Result<Packet> {
    let mut body = [0u8; PACKET_LEN - 1];

    body[0] = STATE_HEADER[0];
    body[1] = STATE_HEADER[1];

    // Fan lookup first, then the unconditional auto-mode override
    body[2] = state.fan().wire_code();
    if state.mode() == Mode::Auto {
        body[2] = AUTO_MODE_FAN_OVERRIDE;
    }

    body[3] = !body[2];
    body[4] = (state.mode().wire_code() << 4) | temperature_code(state.temperature())?;

    Ok(Packet::seal(body))
}

/// Toggle-style commands that carry no AC state
///
/// Each maps to a fixed, statically-defined 5-byte template; the checksum
/// is computed the same way as for state packets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Toggle the display LED
    Led,
    /// Toggle turbo mode
    Turbo,
    /// Toggle the swing louver
    Swing,
    /// Power the unit off
    PowerOff,
}

impl SpecialCommand {
    /// The command's fixed 5-byte template (header pair, two fixed bytes,
    /// command ID)
    #[must_use]
    pub const fn template(self) -> [u8; PACKET_LEN - 1] {
        match self {
            SpecialCommand::Led => [0xAD, 0x52, 0xAF, 0x50, 0xA5],
            SpecialCommand::Turbo => [0xAD, 0x52, 0xAF, 0x50, 0x45],
            SpecialCommand::Swing => [0x4D, 0xB2, 0xD6, 0x29, 0x07],
            SpecialCommand::PowerOff => [0x4D, 0xB2, 0xDE, 0x21, 0x07],
        }
    }
}

impl fmt::Display for SpecialCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecialCommand::Led => write!(f, "led"),
            SpecialCommand::Turbo => write!(f, "turbo"),
            SpecialCommand::Swing => write!(f, "swing"),
            SpecialCommand::PowerOff => write!(f, "off"),
        }
    }
}

/// Encode a special command into a wire packet
///
/// Copies the template's 5 bytes verbatim and seals with the checksum;
/// the AC state store is bypassed entirely.
///
/// # Examples
///
/// ```
/// use aircon_bridge::protocol::encoder::{encode_special, SpecialCommand};
///
/// let packet = encode_special(SpecialCommand::Led);
/// assert_eq!(packet.bytes(), &[0xAD, 0x52, 0xAF, 0x50, 0xA5, 0x5A]);
/// ```
#[must_use]
pub fn encode_special(command: SpecialCommand) -> Packet {
    Packet::seal(command.template())
}
