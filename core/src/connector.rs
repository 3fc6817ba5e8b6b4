//! The probe **abstraction** used by every host monitor.
//!
//! Monitors only depend on the [`Connector`] trait. The production
//! implementation lives in [`tcp`], tests inject their own.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub mod tcp;

pub use tcp::TcpConnector;

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("connection to {address} timed out after {after:?}")]
    TimedOut { address: String, after: Duration },
    #[error("connection to {address} failed: {source}")]
    Io {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Attempts a single connection to `address` within `timeout`.
///
/// Implementations must not retry, the monitor owns the retry cadence.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, address: &str, timeout: Duration) -> Result<(), ConnectError>;
}
