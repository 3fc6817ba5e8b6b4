//! Fan-out of host monitors.
//!
//! The [`Orchestrator`] owns the validated run settings and the shared
//! connector. It turns input lines into [`Host`]s and spawns one tokio task
//! per host, all feeding the same result queue.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, info};
use vigil_common::config::{ConfigError, HostConfig};
use vigil_common::duration::format_duration;
use vigil_common::host::Host;
use vigil_common::outcome::CheckResult;

use crate::connector::Connector;
use crate::monitor::HostMonitor;
use crate::sink::{self, SinkError};

/// Builds one [`Host`] per non-blank line, keeping input order.
pub fn build_hosts<I, S>(cfg: &HostConfig, lines: I) -> Vec<Host>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let name = line.as_ref().trim();
            (!name.is_empty()).then(|| Host::new(name, cfg))
        })
        .collect()
}

pub struct Orchestrator {
    config: HostConfig,
    connector: Arc<dyn Connector>,
}

impl Orchestrator {
    /// Fails if `config` is invalid, so no monitor ever starts on bad settings.
    pub fn new(config: HostConfig, connector: Arc<dyn Connector>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, connector })
    }

    pub fn hosts<I, S>(&self, lines: I) -> Vec<Host>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        build_hosts(&self.config, lines)
    }

    /// Spawns a monitor task per host and returns how many were launched.
    ///
    /// Takes the sender by value so the queue closes once every monitor is done.
    pub fn launch(&self, hosts: Vec<Host>, results: UnboundedSender<CheckResult>) -> usize {
        let count = hosts.len();
        info!(
            hosts = count,
            port = %self.config.port,
            time_limit = %format_duration(self.config.time_limit),
            check_interval = %format_duration(self.config.check_interval),
            max_failures = self.config.max_failure_count,
            "Launching host monitors"
        );

        for host in hosts {
            debug!(host = %host.name, address = %host.address(), "Spawning monitor");
            let monitor = HostMonitor::new(host, Arc::clone(&self.connector));
            tokio::spawn(monitor.run(results.clone()));
        }

        count
    }

    /// Monitors every host and waits for all verdicts.
    ///
    /// `on_result` is called in completion order as each host reports.
    pub async fn monitor<F>(&self, hosts: Vec<Host>, on_result: F) -> Result<Vec<CheckResult>, SinkError>
    where
        F: FnMut(&CheckResult),
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let expected = self.launch(hosts, tx);
        sink::collect_results(rx, expected, on_result).await
    }
}
