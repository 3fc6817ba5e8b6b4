use colored::*;
use vigil_common::outcome::{CheckResult, Status};

use crate::terminal::colors;

pub fn status_color(status: Status) -> Color {
    match status {
        Status::Up => colors::STATUS_UP,
        Status::Down => colors::STATUS_DOWN,
        Status::Flapping => colors::STATUS_FLAPPING,
    }
}

/// The result message, coloured by status when `colorize` is set.
pub fn result_line(result: &CheckResult, colorize: bool) -> String {
    if !colorize {
        return result.message.clone();
    }
    result.message.color(status_color(result.status)).to_string()
}
