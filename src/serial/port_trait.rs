//! Trait seam over the blaster's serial port so the bridge can be tested
//! without hardware attached.

use async_trait::async_trait;
use std::io;

/// Byte-level I/O the IR blaster driver needs from its port
#[async_trait]
pub trait BlasterPort: Send {
    /// Write the whole buffer to the port
    async fn write_all(&mut self, data: &[u8]) -> io::Result<()>;

    /// Flush buffered output to the device
    async fn flush(&mut self) -> io::Result<()>;
}

/// Production port backed by `tokio_serial::SerialStream`
pub struct TokioBlasterPort {
    stream: tokio_serial::SerialStream,
}

impl TokioBlasterPort {
    pub fn new(stream: tokio_serial::SerialStream) -> Self {
        Self { stream }
    }
}

#[async_trait]
impl BlasterPort for TokioBlasterPort {
    async fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        use tokio::io::AsyncWriteExt;
        self.stream.write_all(data).await
    }

    async fn flush(&mut self) -> io::Result<()> {
        use tokio::io::AsyncWriteExt;
        self.stream.flush().await
    }
}
