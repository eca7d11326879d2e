//! # Packet Checksum
//!
//! Checksum calculation for the remote's 6-byte packets.
//!
//! **Algorithm**: `(0xFD - sum(bytes 0..4)) mod 256`
//!
//! The 0xFD base is specific to this remote family and was derived
//! empirically from captured transmissions. Subtraction wraps modulo 256;
//! sums larger than 0xFD must not saturate.
//!
//! Because every packet carries its header and fan bytes as complement
//! pairs, bytes 0-3 always sum to 0x1FE and the checksum works out to the
//! complement of byte 4. The checksum is still computed over all five
//! bytes; the receiver checks the full relation.

/// Checksum subtraction base, specific to this remote family
const CHECKSUM_BASE: u16 = 0xFD;

/// Calculate the packet checksum over the first five packet bytes
///
/// # Arguments
///
/// * `data` - Byte slice to checksum (bytes 0-4 of a packet)
///
/// # Returns
///
/// * `u8` - Checksum byte (byte 5 of the packet)
///
/// # Examples
///
/// ```
/// use aircon_bridge::protocol::checksum::packet_checksum;
///
/// // Cool / 24 C / auto fan state packet body; sum = 0x200
/// let body = [0x4D, 0xB2, 0xFD, 0x02, 0x02];
/// assert_eq!(packet_checksum(&body), 0xFD);
/// ```
pub fn packet_checksum(data: &[u8]) -> u8 {
    // u16 is wide enough: 5 bytes sum to at most 0x4FB
    let sum: u16 = data.iter().map(|&b| u16::from(b)).sum();

    CHECKSUM_BASE.wrapping_sub(sum) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_empty() {
        assert_eq!(packet_checksum(&[]), 0xFD);
    }

    #[test]
    fn test_checksum_cool_24_auto() {
        // sum = 0x4D + 0xB2 + 0xFD + 0x02 + 0x02 = 0x200
        // (0xFD - 0x200) mod 256 = 0xFD
        let body = [0x4D, 0xB2, 0xFD, 0x02, 0x02];
        assert_eq!(packet_checksum(&body), 0xFD);
    }

    #[test]
    fn test_checksum_heat_30_low() {
        // sum = 0x4D + 0xB2 + 0xF9 + 0x06 + 0x3D = 0x23B
        // (0xFD - 0x23B) mod 256 = 0xC2
        let body = [0x4D, 0xB2, 0xF9, 0x06, 0x3D];
        assert_eq!(packet_checksum(&body), 0xC2);
    }

    #[test]
    fn test_checksum_led_template() {
        // sum = 0xAD + 0x52 + 0xAF + 0x50 + 0xA5 = 0x2A3
        // (0xFD - 0x2A3) mod 256 = 0x5A
        let body = [0xAD, 0x52, 0xAF, 0x50, 0xA5];
        assert_eq!(packet_checksum(&body), 0x5A);
    }

    #[test]
    fn test_checksum_wraps_not_saturates() {
        // sum = 0x200; a saturating subtraction would clamp to 0x00
        let body = [0xFF, 0xFF, 0x02, 0x00, 0x00];
        assert_eq!(packet_checksum(&body), 0xFD);
    }

    #[test]
    fn test_checksum_below_base_no_wrap() {
        // sum = 0xF0, stays below the 0xFD base
        let body = [0xF0, 0x00, 0x00, 0x00, 0x00];
        assert_eq!(packet_checksum(&body), 0x0D);
    }

    #[test]
    fn test_checksum_changes_with_data() {
        let body1 = [0x4D, 0xB2, 0xFD, 0x02, 0x02];
        let body2 = [0x4D, 0xB2, 0xFD, 0x02, 0x03];

        assert_ne!(packet_checksum(&body1), packet_checksum(&body2));
    }
}
