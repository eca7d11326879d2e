//! # Timing Sequence Generator
//!
//! Expands a 6-byte packet into the pulse-distance mark/space sequence the
//! IR blaster transmits.
//!
//! Bit values are pulse-distance encoded: every bit starts with a fixed
//! 560 us mark, and the length of the following space selects the value
//! (1690 us for one, 560 us for zero). Bits go out least-significant
//! first. The whole frame (header pair, 48 bits, stop mark) is sent twice
//! with a single 5200 us gap between the repeats; the second frame ends on
//! its stop mark.
//!
//! All durations are nominal design values in microseconds. Receive-side
//! tolerances are the receiver's concern; the generator never widens or
//! narrows them.

use super::encoder::{Packet, PACKET_LEN};
use crate::error::{AirconBridgeError, Result};
use heapless::Vec;

/// Header mark duration in microseconds
pub const HEADER_MARK_US: u16 = 4350;

/// Header space duration in microseconds
pub const HEADER_SPACE_US: u16 = 4400;

/// Mark duration preceding every bit, in microseconds
pub const BIT_MARK_US: u16 = 560;

/// Space duration encoding a one bit, in microseconds
pub const ONE_SPACE_US: u16 = 1690;

/// Space duration encoding a zero bit, in microseconds
pub const ZERO_SPACE_US: u16 = 560;

/// Trailing stop mark duration in microseconds
pub const STOP_MARK_US: u16 = 560;

/// Gap between the two repeated frames, in microseconds
pub const FRAME_GAP_US: u16 = 5200;

/// Frames transmitted per command
pub const FRAME_REPEATS: usize = 2;

/// Entries per frame: header pair + 48 bit pairs + stop mark
const FRAME_ENTRIES: usize = 2 + PACKET_LEN * 8 * 2 + 1;

/// Exact entry count of a full transmission: two frames plus the single
/// inter-frame gap
pub const SEQUENCE_LEN: usize = FRAME_REPEATS * FRAME_ENTRIES + (FRAME_REPEATS - 1);

/// Capacity of the transmit pulse buffer (the physical-layer bound)
pub const TIMING_BUFFER_CAPACITY: usize = 204;

/// Mark/space durations in microseconds, mark first, ready for a 38 kHz
/// blaster
pub type TimingSequence = Vec<u16, TIMING_BUFFER_CAPACITY>;

/// Expand a packet into a freshly allocated timing sequence
///
/// # Arguments
///
/// * `packet` - The sealed 6-byte packet to transmit
///
/// # Returns
///
/// * `Result<TimingSequence>` - The full two-frame sequence
///   ([`SEQUENCE_LEN`] entries)
///
/// # Examples
///
/// ```
/// use aircon_bridge::protocol::encoder::{encode_special, SpecialCommand};
/// use aircon_bridge::protocol::timing::{to_timing_sequence, SEQUENCE_LEN};
///
/// let packet = encode_special(SpecialCommand::Swing);
/// let sequence = to_timing_sequence(&packet).unwrap();
/// assert_eq!(sequence.len(), SEQUENCE_LEN);
/// ```
pub fn to_timing_sequence(packet: &Packet) -> Result<TimingSequence> {
    let mut sequence = TimingSequence::new();
    encode_into(packet, &mut sequence)?;
    Ok(sequence)
}

/// Expand a packet into a caller-provided fixed-capacity buffer
///
/// The remaining capacity is checked up front: on
/// [`AirconBridgeError::CapacityExceeded`] the buffer is untouched, never
/// partially written.
///
/// # Arguments
///
/// * `packet` - The sealed 6-byte packet to transmit
/// * `out` - Destination buffer; the sequence is appended
///
/// # Errors
///
/// Returns [`AirconBridgeError::CapacityExceeded`] if fewer than
/// [`SEQUENCE_LEN`] entries fit in the buffer's remaining capacity.
pub fn encode_into<const N: usize>(packet: &Packet, out: &mut Vec<u16, N>) -> Result<()> {
    let remaining = N - out.len();
    if remaining < SEQUENCE_LEN {
        return Err(AirconBridgeError::CapacityExceeded {
            needed: SEQUENCE_LEN,
            capacity: remaining,
        });
    }

    for repeat in 0..FRAME_REPEATS {
        if repeat > 0 {
            push(out, FRAME_GAP_US)?;
        }
        encode_frame(packet, out)?;
    }

    Ok(())
}

/// Emit one frame: header pair, 48 bits LSB-first, stop mark
fn encode_frame<const N: usize>(packet: &Packet, out: &mut Vec<u16, N>) -> Result<()> {
    push(out, HEADER_MARK_US)?;
    push(out, HEADER_SPACE_US)?;

    for &byte in packet.bytes() {
        for bit in 0..8 {
            push(out, BIT_MARK_US)?;
            if (byte >> bit) & 1 == 1 {
                push(out, ONE_SPACE_US)?;
            } else {
                push(out, ZERO_SPACE_US)?;
            }
        }
    }

    push(out, STOP_MARK_US)
}

fn push<const N: usize>(out: &mut Vec<u16, N>, duration: u16) -> Result<()> {
    out.push(duration)
        .map_err(|_| AirconBridgeError::CapacityExceeded {
            needed: SEQUENCE_LEN,
            capacity: N,
        })
}
