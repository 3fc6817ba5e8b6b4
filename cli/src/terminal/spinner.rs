use std::io::Write;
use std::sync::OnceLock;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

static SPINNER: OnceLock<ProgressBar> = OnceLock::new();

/// Hidden until [`start`] is called, so early log lines go straight to stderr.
pub fn get_spinner() -> &'static ProgressBar {
    SPINNER.get_or_init(ProgressBar::hidden)
}

pub fn start(total: usize) {
    let pb = get_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg} {elapsed:.dim}") {
        pb.set_style(style.tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]));
    }
    pb.set_draw_target(ProgressDrawTarget::stderr());
    report_progress(0, total);
    pb.enable_steady_tick(Duration::from_millis(100));
}

pub fn report_progress(received: usize, total: usize) {
    get_spinner().set_message(format!(
        "{}/{} hosts reported",
        received.to_string().green().bold(),
        total
    ));
}

pub fn finish() {
    get_spinner().finish_and_clear();
}

/// Routes log output to stderr, above the spinner while it is visible.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let pb = get_spinner();
        if pb.is_hidden() || pb.is_finished() {
            return std::io::stderr().write(buf);
        }
        let msg = String::from_utf8_lossy(buf);
        pb.println(msg.trim_end());
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stderr().flush()
    }
}
