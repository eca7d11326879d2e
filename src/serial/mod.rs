//! # Serial Communication Module
//!
//! Handles serial communication with the IR blaster.
//!
//! This module handles:
//! - Opening the blaster's serial port at 115,200 baud (8N1)
//! - Framing a timing sequence as little-endian pulse words
//! - Async write and flush of framed transmissions
//!
//! The blaster firmware modulates each mark duration at 38 kHz and leaves
//! each space unmodulated; the sequence it receives already contains both
//! repeated frames, so the firmware plays it back verbatim.

pub mod port_trait;

use crate::error::{AirconBridgeError, Result};
use bytes::{BufMut, BytesMut};
use tokio_serial::SerialPortBuilderExt;
use tracing::{debug, info, warn};

use port_trait::{BlasterPort, TokioBlasterPort};

/// Default baud rate of the blaster's USB serial interface
pub const BLASTER_BAUD_RATE: u32 = 115_200;

/// Default blaster device paths to try (in order of preference)
const DEFAULT_DEVICE_PATHS: &[&str] = &[
    "/dev/ttyUSB0", // USB-to-serial adapters (most blaster boards)
    "/dev/ttyACM0", // USB CDC devices
];

/// IR blaster serial driver
///
/// Owns the port and frames timing sequences for transmission: a
/// little-endian u16 entry count followed by each duration as a
/// little-endian u16, microseconds.
pub struct IrBlaster<P: BlasterPort> {
    /// Serial port handle
    port: P,
    /// Device path (e.g., /dev/ttyUSB0)
    device_path: String,
}

impl<P: BlasterPort> std::fmt::Debug for IrBlaster<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IrBlaster")
            .field("device_path", &self.device_path)
            .finish_non_exhaustive()
    }
}

impl IrBlaster<TokioBlasterPort> {
    /// Open a connection to the blaster
    ///
    /// Auto-detects the device by trying common paths.
    ///
    /// # Errors
    ///
    /// Returns [`AirconBridgeError::SerialPortNotFound`] if none of the
    /// default paths can be opened.
    pub fn open() -> Result<Self> {
        Self::open_auto(BLASTER_BAUD_RATE)
    }

    /// Auto-detect the device at a specific baud rate
    pub fn open_auto(baud_rate: u32) -> Result<Self> {
        Self::open_with_paths(DEFAULT_DEVICE_PATHS, baud_rate)
    }

    /// Open a connection using explicit device paths and baud rate
    ///
    /// # Arguments
    ///
    /// * `paths` - Device paths to try (e.g., &["/dev/ttyUSB1"])
    /// * `baud_rate` - Serial speed, normally [`BLASTER_BAUD_RATE`]
    pub fn open_with_paths(paths: &[&str], baud_rate: u32) -> Result<Self> {
        for path in paths {
            debug!("Trying to open blaster port: {}", path);

            match Self::open_port(path, baud_rate) {
                Ok(stream) => {
                    info!("Opened IR blaster at {}", path);
                    return Ok(Self {
                        port: TokioBlasterPort::new(stream),
                        device_path: path.to_string(),
                    });
                }
                Err(e) => {
                    warn!("Failed to open {}: {}", path, e);
                    continue;
                }
            }
        }

        Err(AirconBridgeError::SerialPortNotFound(paths.join(", ")))
    }

    /// Open a specific serial port with the blaster's 8N1 settings
    fn open_port(path: &str, baud_rate: u32) -> Result<tokio_serial::SerialStream> {
        let stream = tokio_serial::new(path, baud_rate)
            .data_bits(tokio_serial::DataBits::Eight)
            .parity(tokio_serial::Parity::None)
            .stop_bits(tokio_serial::StopBits::One)
            .flow_control(tokio_serial::FlowControl::None)
            .open_native_async()
            .map_err(|e| AirconBridgeError::Serial(format!("Failed to open {}: {}", path, e)))?;

        Ok(stream)
    }
}

impl<P: BlasterPort> IrBlaster<P> {
    /// Wrap an already-open port (used by tests with a mock port)
    pub fn with_port(port: P, device_path: impl Into<String>) -> Self {
        Self {
            port,
            device_path: device_path.into(),
        }
    }

    /// Send a timing sequence to the blaster
    ///
    /// # Arguments
    ///
    /// * `sequence` - Mark/space durations in microseconds, both frames
    ///   included
    ///
    /// # Errors
    ///
    /// Returns [`AirconBridgeError::Serial`] if the write or flush fails.
    pub async fn send_sequence(&mut self, sequence: &[u16]) -> Result<()> {
        let frame = frame_sequence(sequence);

        self.port
            .write_all(&frame)
            .await
            .map_err(|e| AirconBridgeError::Serial(format!("Failed to write sequence: {}", e)))?;

        self.port
            .flush()
            .await
            .map_err(|e| AirconBridgeError::Serial(format!("Failed to flush port: {}", e)))?;

        debug!(
            "Sent {} pulse entries ({} bytes) to blaster",
            sequence.len(),
            frame.len()
        );
        Ok(())
    }

    /// Device path of the opened port
    pub fn device_path(&self) -> &str {
        &self.device_path
    }
}

/// Frame a timing sequence for the wire: LE u16 count, then LE u16 words
fn frame_sequence(sequence: &[u16]) -> BytesMut {
    let mut frame = BytesMut::with_capacity(2 + sequence.len() * 2);
    frame.put_u16_le(sequence.len() as u16);
    for &duration in sequence {
        frame.put_u16_le(duration);
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::port_trait::mocks::MockBlasterPort;
    use super::*;
    use std::io;
    use tokio_test::assert_ok;

    #[test]
    fn test_constants() {
        assert_eq!(BLASTER_BAUD_RATE, 115_200);
        assert_eq!(DEFAULT_DEVICE_PATHS.len(), 2);
        assert_eq!(DEFAULT_DEVICE_PATHS[0], "/dev/ttyUSB0");
        assert_eq!(DEFAULT_DEVICE_PATHS[1], "/dev/ttyACM0");
    }

    #[test]
    fn test_frame_sequence_layout() {
        let frame = frame_sequence(&[4350, 4400, 560]);

        // Count first, little-endian, then each duration
        assert_eq!(
            frame.as_ref(),
            &[
                0x03, 0x00, // 3 entries
                0xFE, 0x10, // 4350
                0x30, 0x11, // 4400
                0x30, 0x02, // 560
            ]
        );
    }

    #[test]
    fn test_frame_sequence_empty() {
        let frame = frame_sequence(&[]);
        assert_eq!(frame.as_ref(), &[0x00, 0x00]);
    }

    #[tokio::test]
    async fn test_send_sequence_writes_framed_words() {
        let mock = MockBlasterPort::new();
        let mut blaster = IrBlaster::with_port(mock.clone(), "/dev/mock0");

        assert_ok!(blaster.send_sequence(&[560, 1690]).await);

        let writes = mock.written();
        assert_eq!(writes.len(), 1, "one framed write per sequence");
        assert_eq!(writes[0], vec![0x02, 0x00, 0x30, 0x02, 0x9A, 0x06]);
    }

    #[tokio::test]
    async fn test_send_sequence_write_failure() {
        let mock = MockBlasterPort::new();
        mock.fail_writes_with(io::ErrorKind::BrokenPipe);
        let mut blaster = IrBlaster::with_port(mock, "/dev/mock0");

        let result = blaster.send_sequence(&[560]).await;

        match result.unwrap_err() {
            AirconBridgeError::Serial(msg) => {
                assert!(msg.contains("Failed to write"), "got: {}", msg)
            }
            other => panic!("expected Serial error, got: {:?}", other),
        }
    }

    #[test]
    fn test_open_with_invalid_paths_returns_error() {
        let invalid_paths = &["/dev/nonexistent0", "/dev/nonexistent1"];
        let result = IrBlaster::open_with_paths(invalid_paths, BLASTER_BAUD_RATE);

        assert!(result.is_err());
        match result.unwrap_err() {
            AirconBridgeError::SerialPortNotFound(msg) => {
                assert!(msg.contains("/dev/nonexistent0"));
                assert!(msg.contains("/dev/nonexistent1"));
            }
            other => panic!("expected SerialPortNotFound, got: {:?}", other),
        }
    }

    #[test]
    fn test_open_with_empty_paths_returns_error() {
        let empty: &[&str] = &[];
        let result = IrBlaster::open_with_paths(empty, BLASTER_BAUD_RATE);

        assert!(matches!(
            result.unwrap_err(),
            AirconBridgeError::SerialPortNotFound(_)
        ));
    }

    // Integration test - only runs if an IR blaster is connected
    #[tokio::test]
    #[ignore] // Run with: cargo test -- --ignored
    async fn test_send_with_real_hardware() {
        if let Ok(mut blaster) = IrBlaster::open() {
            let result = blaster.send_sequence(&[560, 560]).await;
            assert!(result.is_ok(), "failed to send: {:?}", result);
            println!("Sent test pulses via {}", blaster.device_path());
        } else {
            println!("No IR blaster detected (this is OK for CI)");
        }
    }
}
