//! # Check Outcome
//!
//! The terminal verdict for one monitored host. A [`CheckResult`] is only
//! ever built through [`CheckResult::finalize`], which applies the
//! classification rule once the monitor stops, so every result carries
//! exactly one [`Status`].

use std::fmt;

use crate::host::Host;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// Every probe in the window succeeded.
    Up,
    /// Only failures were seen, or the failure threshold was reached.
    Down,
    /// Both successes and failures were seen without reaching the threshold.
    Flapping,
}

impl Status {
    /// Decides the status from the counters accumulated over the run.
    ///
    /// Zero probes in both directions counts as `Up`, which only happens when
    /// the window closes before the first tick.
    pub fn classify(failed: u32, passed: u32, max_failures: u32) -> Self {
        if failed == max_failures || (failed > 0 && passed == 0) {
            Status::Down
        } else if failed > 0 {
            Status::Flapping
        } else {
            Status::Up
        }
    }

    fn verdict(self) -> &'static str {
        match self {
            Status::Up => "is reporting ok",
            Status::Down => "is down",
            Status::Flapping => "is flapping",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Up => "up",
            Status::Down => "down",
            Status::Flapping => "flapping",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckResult {
    pub host: Host,
    pub failed_count: u32,
    pub passed_count: u32,
    pub status: Status,
    pub message: String,
}

impl CheckResult {
    pub fn finalize(host: Host, failed_count: u32, passed_count: u32) -> Self {
        let status = Status::classify(failed_count, passed_count, host.max_failure_count);
        let message = format!("{} {}", host.name, status.verdict());
        Self {
            host,
            failed_count,
            passed_count,
            status,
            message,
        }
    }

    /// Total number of probes that ran for this host.
    pub fn probes(&self) -> u32 {
        self.failed_count + self.passed_count
    }
}
