use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use tracing::info_span;
use vigil_common::host::Host;
use vigil_common::outcome::{CheckResult, Status};
use vigil_core::orchestrator::Orchestrator;

use crate::terminal::report::Report;
use crate::terminal::{colors, print, spinner};

/// Monitors `hosts`, writing verdicts to `report` and decorations to the log.
pub async fn check<W: Write>(
    orchestrator: &Orchestrator,
    hosts: Vec<Host>,
    quiet: bool,
    report: &mut Report<W>,
) -> anyhow::Result<()> {
    let span = info_span!("check", hosts = hosts.len());
    let _guard = span.enter();

    print::header("monitoring hosts", quiet);

    let start_time: Instant = Instant::now();
    let expected: usize = hosts.len();
    spinner::start(expected);

    let mut received: usize = 0;
    let results = orchestrator
        .monitor(hosts, |result| {
            received += 1;
            spinner::report_progress(received, expected);
            report.verdict(result);
        })
        .await;

    spinner::finish();
    let results: Vec<CheckResult> = results?;

    if !quiet {
        print_summary(&results, start_time.elapsed());
    }
    report.finish().context("Failed to write the results")?;
    Ok(())
}

fn print_summary(results: &[CheckResult], total_time: Duration) {
    let count = |status: Status| results.iter().filter(|r| r.status == status).count();

    let up: ColoredString = format!("{} up", count(Status::Up)).bold().green();
    let flapping: ColoredString = format!("{} flapping", count(Status::Flapping)).bold().yellow();
    let down: ColoredString = format!("{} down", count(Status::Down)).bold().red();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString = format!("{up}, {flapping}, {down} in {total_time}")
        .color(colors::TEXT_DEFAULT);

    print::fat_separator();
    print::centerln(&output.to_string());
}
