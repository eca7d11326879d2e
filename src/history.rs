//! # Transmit History Module
//!
//! Optional JSONL log of every transmitted command.
//!
//! One record per transmission: UTC timestamp, the command token, the
//! packet as hex, and the pulse entry count. Useful for replaying captures
//! against the blaster and for diffing against a logic-analyzer trace when
//! the unit ignores a command.

use crate::error::Result;
use crate::protocol::encoder::Packet;
use crate::remote::command::Command;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

/// One transmitted command, as serialized to the JSONL log
#[derive(Debug, Serialize)]
pub struct TransmitRecord {
    /// UTC time the sequence was handed to the blaster
    pub timestamp: DateTime<Utc>,

    /// Command token, e.g. `t24` or `led`
    pub command: String,

    /// Packet bytes as hex, e.g. `4D B2 FD 02 02 FD`
    pub packet: String,

    /// Number of mark/space entries in the transmitted sequence
    pub pulses: usize,
}

/// Append-only JSONL transmit log
///
/// A disabled log swallows records without touching the filesystem, so
/// callers never branch on whether history is configured.
pub struct HistoryLog {
    file: Option<fs::File>,
}

impl HistoryLog {
    /// Open (or create) the log file in append mode
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns [`AirconBridgeError::Io`](crate::error::AirconBridgeError::Io)
    /// if the file or its directories cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        Ok(Self { file: Some(file) })
    }

    /// A log that records nothing
    #[must_use]
    pub fn disabled() -> Self {
        Self { file: None }
    }

    /// Whether records actually get written
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Append one record as a JSON line
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails; the
    /// bridge treats that as a warning, not a failed command.
    pub fn record(&mut self, command: &Command, packet: &Packet, pulses: usize) -> Result<()> {
        let Some(file) = self.file.as_mut() else {
            return Ok(());
        };

        let record = TransmitRecord {
            timestamp: Utc::now(),
            command: command.to_string(),
            packet: packet.to_string(),
            pulses,
        };

        let line = serde_json::to_string(&record)?;
        writeln!(file, "{}", line)?;
        file.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::encoder::{encode_special, SpecialCommand};
    use crate::remote::command::Command;

    fn led_inputs() -> (Command, Packet) {
        let command = "led".parse::<Command>().unwrap();
        (command, encode_special(SpecialCommand::Led))
    }

    #[test]
    fn test_disabled_log_records_nothing() {
        let mut log = HistoryLog::disabled();
        let (command, packet) = led_inputs();

        assert!(!log.is_enabled());
        log.record(&command, &packet, 199).unwrap();
    }

    #[test]
    fn test_record_appends_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transmit.jsonl");

        let mut log = HistoryLog::open(&path).unwrap();
        let (command, packet) = led_inputs();
        log.record(&command, &packet, 199).unwrap();
        log.record(&command, &packet, 199).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed["command"], "led");
        assert_eq!(parsed["packet"], "AD 52 AF 50 A5 5A");
        assert_eq!(parsed["pulses"], 199);
        assert!(parsed["timestamp"].is_string());
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/logs/transmit.jsonl");

        let log = HistoryLog::open(&path).unwrap();
        assert!(log.is_enabled());
        assert!(path.exists());
    }

    #[test]
    fn test_open_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transmit.jsonl");
        let (command, packet) = led_inputs();

        HistoryLog::open(&path).unwrap().record(&command, &packet, 199).unwrap();
        HistoryLog::open(&path).unwrap().record(&command, &packet, 199).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2, "second open must not truncate");
    }
}
