use std::time::Duration;

use thiserror::Error;
use tracing::warn;

use crate::duration::format_duration;

pub const DEFAULT_PORT: &str = "22";
pub const DEFAULT_MAX_FAILURE_COUNT: u32 = 5;
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(5 * 60);
pub const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_secs(30);

/// Settings shared by every monitored host for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    /// The tcp port to probe on every host.
    pub port: String,
    /// Failures that mark a host as down before the window ends.
    pub max_failure_count: u32,
    /// Total observation window per host.
    pub time_limit: Duration,
    /// Time between two probes of the same host.
    ///
    /// Must not exceed `time_limit`.
    pub check_interval: Duration,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.to_string(),
            max_failure_count: DEFAULT_MAX_FAILURE_COUNT,
            time_limit: DEFAULT_TIME_LIMIT,
            check_interval: DEFAULT_CHECK_INTERVAL,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the check interval ({interval}) must be less than the time limit ({limit})")]
    IntervalExceedsLimit { interval: String, limit: String },
    #[error("the check interval must be greater than zero")]
    ZeroInterval,
    #[error("the max failure count must be at least 1")]
    ZeroFailureCount,
    #[error("a port to check is required")]
    EmptyPort,
}

impl HostConfig {
    /// Checks the settings before any monitor is started.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port.trim().is_empty() {
            return Err(ConfigError::EmptyPort);
        }
        if self.max_failure_count == 0 {
            return Err(ConfigError::ZeroFailureCount);
        }
        if self.check_interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if self.check_interval > self.time_limit {
            return Err(ConfigError::IntervalExceedsLimit {
                interval: format_duration(self.check_interval),
                limit: format_duration(self.time_limit),
            });
        }
        if self.check_interval == self.time_limit {
            warn!(
                interval = %format_duration(self.check_interval),
                "Check interval equals the time limit, hosts may finish without a single probe"
            );
        }
        Ok(())
    }
}
