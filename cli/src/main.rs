mod commands;
mod input;
mod terminal;

use std::sync::Arc;

use anyhow::Context;
use commands::{CommandLine, check};
use terminal::report::Report;
use terminal::{logging, print};
use vigil_common::host::Host;
use vigil_core::connector::TcpConnector;
use vigil_core::orchestrator::Orchestrator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose, commands.quiet);

    let orchestrator = Orchestrator::new(commands.to_config(), Arc::new(TcpConnector))
        .context("Invalid configuration")?;

    let lines: Vec<String> = input::load_host_lines()
        .context("Failed to include STDIN or to include ENV variable HOSTS")?;
    let hosts: Vec<Host> = orchestrator.hosts(&lines);

    if hosts.is_empty() {
        print::no_results(commands.quiet);
        return Ok(());
    }

    check::check(&orchestrator, hosts, commands.quiet, &mut Report::stdout()).await
}
