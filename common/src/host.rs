use std::time::Duration;

use crate::config::HostConfig;

/// A single monitored target together with a copy of the run settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Host {
    /// Hostname or IP address as read from the input.
    pub name: String,
    pub port: String,
    pub max_failure_count: u32,
    pub time_limit: Duration,
    pub check_interval: Duration,
}

impl Host {
    pub fn new(name: impl Into<String>, cfg: &HostConfig) -> Self {
        Self {
            name: name.into(),
            port: cfg.port.clone(),
            max_failure_count: cfg.max_failure_count,
            time_limit: cfg.time_limit,
            check_interval: cfg.check_interval,
        }
    }

    /// `host:port`, with IPv6 literals wrapped in brackets.
    pub fn address(&self) -> String {
        if self.name.contains(':') && !self.name.starts_with('[') {
            format!("[{}]:{}", self.name, self.port)
        } else {
            format!("{}:{}", self.name, self.port)
        }
    }
}
