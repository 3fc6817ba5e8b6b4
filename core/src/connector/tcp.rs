use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::trace;

use super::{ConnectError, Connector};

/// Opens a real TCP connection and closes it straight away.
#[derive(Clone, Copy, Debug, Default)]
pub struct TcpConnector;

#[async_trait]
impl Connector for TcpConnector {
    async fn connect(&self, address: &str, probe_timeout: Duration) -> Result<(), ConnectError> {
        match timeout(probe_timeout, TcpStream::connect(address)).await {
            Ok(Ok(stream)) => {
                trace!(address, peer = ?stream.peer_addr().ok(), "Handshake completed");
                drop(stream);
                Ok(())
            }
            Ok(Err(source)) => Err(ConnectError::Io {
                address: address.to_string(),
                source,
            }),
            Err(_elapsed) => Err(ConnectError::TimedOut {
                address: address.to_string(),
                after: probe_timeout,
            }),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
