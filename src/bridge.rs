//! # Bridge Module
//!
//! The controller tying the pieces together: one command in, one IR
//! transmission out.
//!
//! Every command runs the same cycle to completion before the next one is
//! accepted: derive the candidate state (or special template), encode the
//! packet, commit the state, expand to the timing sequence, hand it to the
//! blaster, append the history record. Encode-then-commit ordering means a
//! rejected input (say `t16`) leaves the stored state exactly as it was.

use crate::error::Result;
use crate::history::HistoryLog;
use crate::protocol::encoder::{encode_special, encode_state, Packet};
use crate::protocol::timing::to_timing_sequence;
use crate::remote::command::Command;
use crate::remote::state::AcState;
use crate::serial::port_trait::BlasterPort;
use crate::serial::IrBlaster;
use tracing::{debug, warn};

/// Controller that owns the virtual-remote state, the blaster driver and
/// the transmit history
pub struct Bridge<P: BlasterPort> {
    state: AcState,
    blaster: IrBlaster<P>,
    history: HistoryLog,
}

impl<P: BlasterPort> Bridge<P> {
    /// Build a bridge around an opened blaster
    ///
    /// # Arguments
    ///
    /// * `initial` - Startup state (from `[remote]` in the config)
    /// * `blaster` - Opened IR blaster driver
    /// * `history` - Transmit history log (possibly disabled)
    pub fn new(initial: AcState, blaster: IrBlaster<P>, history: HistoryLog) -> Self {
        Self {
            state: initial,
            blaster,
            history,
        }
    }

    /// Current virtual-remote state
    pub fn state(&self) -> &AcState {
        &self.state
    }

    /// Handle one command: mutate state if needed, encode and transmit
    ///
    /// State commands derive a validated candidate, encode it, and only
    /// then commit; special commands bypass the state entirely and go out
    /// from their fixed templates. Failures before the commit leave the
    /// state untouched. A history-log failure is reported as a warning but
    /// does not fail the command.
    ///
    /// # Errors
    ///
    /// * [`OutOfRange`](crate::error::AirconBridgeError::OutOfRange) for an
    ///   invalid setpoint
    /// * [`CapacityExceeded`](crate::error::AirconBridgeError::CapacityExceeded)
    ///   if the timing buffer cannot hold the sequence
    /// * [`Serial`](crate::error::AirconBridgeError::Serial) if the blaster
    ///   write fails (the committed state is kept; retrying is the
    ///   caller's decision)
    pub async fn handle_command(&mut self, command: Command) -> Result<()> {
        let packet = match command {
            Command::SetTemperature(celsius) => {
                self.commit_encoded(self.state.with_temperature(celsius)?)?
            }
            Command::SetMode(mode) => self.commit_encoded(self.state.with_mode(mode))?,
            Command::SetFan(fan) => self.commit_encoded(self.state.with_fan(fan))?,
            Command::Special(special) => encode_special(special),
        };

        debug!("Encoded packet: {}", packet);

        let sequence = to_timing_sequence(&packet)?;
        self.blaster.send_sequence(&sequence).await?;

        if let Err(e) = self.history.record(&command, &packet, sequence.len()) {
            warn!("Failed to append history record: {}", e);
        }

        Ok(())
    }

    /// Encode the candidate state and commit it only on success
    fn commit_encoded(&mut self, candidate: AcState) -> Result<Packet> {
        let packet = encode_state(&candidate)?;
        self.state = candidate;
        Ok(packet)
    }
}
