//! Per-host check loop.
//!
//! A [`HostMonitor`] probes its host once per check interval until either the
//! observation window closes or the failure threshold is reached, then hands
//! a single [`CheckResult`] to the result queue.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::time::{Instant, MissedTickBehavior, interval_at, sleep_until};
use tracing::{debug, trace, warn};
use vigil_common::host::Host;
use vigil_common::outcome::CheckResult;

use crate::connector::Connector;

/// Upper bound for a single connection attempt.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

pub struct HostMonitor {
    host: Host,
    connector: Arc<dyn Connector>,
}

impl HostMonitor {
    pub fn new(host: Host, connector: Arc<dyn Connector>) -> Self {
        Self { host, connector }
    }

    /// Observes the host and sends the verdict to `results`.
    pub async fn run(self, results: UnboundedSender<CheckResult>) {
        let result = self.observe().await;
        let name = result.host.name.clone();
        if results.send(result).is_err() {
            warn!(host = %name, "Result queue closed before the verdict could be delivered");
        }
    }

    /// Runs the check loop to completion and returns the verdict.
    ///
    /// The first probe fires one interval after start. When a tick and the end
    /// of the window are due at the same instant the window wins.
    pub async fn observe(self) -> CheckResult {
        let start = Instant::now();
        let window = sleep_until(start + self.host.time_limit);
        tokio::pin!(window);

        let mut ticker = interval_at(start + self.host.check_interval, self.host.check_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let address = self.host.address();
        let mut failed: u32 = 0;
        let mut passed: u32 = 0;

        loop {
            tokio::select! {
                biased;
                _ = &mut window => {
                    debug!(host = %self.host.name, failed, passed, "Observation window closed");
                    break;
                }
                _ = ticker.tick() => {
                    match self.connector.connect(&address, PROBE_TIMEOUT).await {
                        Ok(()) => {
                            passed += 1;
                            trace!(host = %self.host.name, %address, passed, "Probe succeeded");
                        }
                        Err(err) => {
                            failed += 1;
                            debug!(host = %self.host.name, error = %err, failed, "Probe failed");
                            if failed == self.host.max_failure_count {
                                debug!(
                                    host = %self.host.name,
                                    elapsed = ?start.elapsed(),
                                    "Failure threshold reached, ending early"
                                );
                                break;
                            }
                        }
                    }
                }
            }
        }

        CheckResult::finalize(self.host, failed, passed)
    }
}
