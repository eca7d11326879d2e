//! # Aircon Bridge
//!
//! Drive a vendor-specific air conditioner through a serial-attached
//! infrared blaster.
//!
//! Reads command tokens from stdin (one per line), updates the virtual
//! remote, and transmits the encoded pulse sequence for every accepted
//! command.
//!
//! # Control Flow
//!
//! 1. **Initialization**
//!    - Set up logging with tracing subscriber
//!    - Load configuration (optional path as the first argument)
//!    - Open the serial connection to the IR blaster
//!    - Build the bridge with the configured startup state
//!
//! 2. **Main Loop**
//!    - Parse each stdin line as a command token (`t24`, `mc`, `led`, ...)
//!    - Handle it to completion: encode, transmit, log
//!    - Report the resulting remote state
//!    - Handle Ctrl+C (or EOF) for graceful shutdown
//!
//! # Examples
//!
//! ```bash
//! echo "t21" | cargo run --release
//! ```
//!
//! Expected output:
//! ```text
//! INFO aircon_bridge: Aircon Bridge v0.1.0 starting...
//! INFO aircon_bridge::serial: Opened IR blaster at /dev/ttyUSB0
//! INFO aircon_bridge: Listening for commands on stdin (t17-t30, mc/ma/mh, fa/fl/fm/fh, led, turbo, swing, off)
//! INFO aircon_bridge: Sent t21, remote now: mode=cool temp=21C fan=auto
//! ```

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

use aircon_bridge::bridge::Bridge;
use aircon_bridge::config::Config;
use aircon_bridge::history::HistoryLog;
use aircon_bridge::remote::command::Command;
use aircon_bridge::serial::IrBlaster;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Aircon Bridge v{} starting...", env!("CARGO_PKG_VERSION"));

    // Optional config path as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading configuration from {}", path);
            Config::load(path)?
        }
        None => Config::default(),
    };

    // Open the blaster: explicit port from the config, or auto-detect
    let blaster = if config.serial.port.is_empty() {
        IrBlaster::open_auto(config.serial.baud_rate)?
    } else {
        IrBlaster::open_with_paths(&[config.serial.port.as_str()], config.serial.baud_rate)?
    };

    let history = if config.history.enabled {
        HistoryLog::open(&config.history.log_file)?
    } else {
        HistoryLog::disabled()
    };

    let mut bridge = Bridge::new(config.initial_state()?, blaster, history);

    info!(
        "Listening for commands on stdin (t17-t30, mc/ma/mh, fa/fl/fm/fh, led, turbo, swing, off)"
    );
    info!("Press Ctrl+C to exit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    // Main control loop: one command handled to completion at a time
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!("stdin closed, shutting down...");
                    break;
                };

                let token = line.trim();
                if token.is_empty() {
                    continue;
                }

                let command = match token.parse::<Command>() {
                    Ok(command) => command,
                    Err(e) => {
                        warn!("{}", e);
                        continue;
                    }
                };

                match bridge.handle_command(command).await {
                    Ok(()) => info!("Sent {}, remote now: {}", command, bridge.state()),
                    Err(e) => error!("Failed to handle {}: {}", command, e),
                }
            }

            // Handle Ctrl+C for graceful shutdown
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down...");
                break;
            }
        }
    }

    Ok(())
}
