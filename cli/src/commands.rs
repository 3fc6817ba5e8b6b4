pub mod check;

use std::time::Duration;

use clap::{ArgAction, Parser};
use vigil_common::config::{DEFAULT_MAX_FAILURE_COUNT, DEFAULT_PORT, HostConfig};
use vigil_common::duration::parse_duration;

/// Hosts are read from standard input, one per line, or from the `HOSTS`
/// environment variable when nothing is piped in.
#[derive(Parser, Debug)]
#[command(name = "vigil")]
#[command(version)]
#[command(about = "Watches a TCP port on a list of hosts and reports which are up, down or flapping.")]
pub struct CommandLine {
    /// Port to check on every host
    #[arg(short = 'p', long, env = "PORT", default_value = DEFAULT_PORT)]
    pub port: String,

    /// How long to keep checking each host ('1h', '1m', '30s')
    #[arg(
        short = 't',
        long = "time-limit",
        env = "TIMELIMIT",
        default_value = "5m",
        value_parser = parse_duration
    )]
    pub time_limit: Duration,

    /// Time to wait between two checks of the same host
    #[arg(
        short = 'i',
        long = "check-interval",
        env = "CHECKINTERVAL",
        default_value = "30s",
        value_parser = parse_duration
    )]
    pub check_interval: Duration,

    /// Failed checks after which a host is reported down right away
    #[arg(
        short = 'f',
        long = "max-failures",
        env = "MAXFAILURES",
        default_value_t = DEFAULT_MAX_FAILURE_COUNT,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_failures: u32,

    /// More log output, repeat for trace level
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only print the verdict lines and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommandLine {
    /// Parses the process arguments, exiting with status 1 on bad input.
    pub fn parse_args() -> Self {
        Self::try_parse().unwrap_or_else(|err| {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        })
    }

    pub fn to_config(&self) -> HostConfig {
        HostConfig {
            port: self.port.clone(),
            max_failure_count: self.max_failures,
            time_limit: self.time_limit,
            check_interval: self.check_interval,
        }
    }
}
