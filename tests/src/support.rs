use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpListener;
use vigil_common::config::HostConfig;
use vigil_core::connector::{ConnectError, Connector};

/// Accepts and immediately drops connections until the test ends.
pub async fn spawn_listener() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            drop(stream);
        }
    });
    port
}

/// A port that nothing listens on.
pub async fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap().port()
}

pub fn config(port: u16, max_failures: u32, limit: Duration, interval: Duration) -> HostConfig {
    HostConfig {
        port: port.to_string(),
        max_failure_count: max_failures,
        time_limit: limit,
        check_interval: interval,
    }
}

/// Answers probes from a fixed pattern that repeats, counting every call.
pub struct PatternConnector {
    pattern: Vec<bool>,
    calls: AtomicUsize,
    addresses: Mutex<Vec<String>>,
}

impl PatternConnector {
    pub fn new(pattern: &[bool]) -> Self {
        Self {
            pattern: pattern.to_vec(),
            calls: AtomicUsize::new(0),
            addresses: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn addresses(&self) -> Vec<String> {
        self.addresses.lock().unwrap().clone()
    }
}

#[async_trait]
impl Connector for PatternConnector {
    async fn connect(&self, address: &str, timeout: Duration) -> Result<(), ConnectError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.addresses.lock().unwrap().push(address.to_string());
        if self.pattern[call % self.pattern.len()] {
            Ok(())
        } else {
            Err(ConnectError::TimedOut {
                address: address.to_string(),
                after: timeout,
            })
        }
    }
}
