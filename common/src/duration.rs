//! Parsing and formatting of the short duration strings accepted on the
//! command line (`1h`, `1m`, `30s`, `1m30s`, `250ms`).

use std::fmt::Write;
use std::time::Duration;

use thiserror::Error;

/// Unit suffix to nanoseconds multiplier.
const UNITS: &[(&str, f64)] = &[
    ("ns", 1.0),
    ("µs", 1_000.0),
    ("us", 1_000.0),
    ("ms", 1_000_000.0),
    ("s", 1_000_000_000.0),
    ("m", 60_000_000_000.0),
    ("h", 3_600_000_000_000.0),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("empty duration, please pass time as '1h', '1m', '30s'")]
    Empty,
    #[error("invalid duration {0:?}, please pass time as '1h', '1m', '30s'")]
    Invalid(String),
    #[error("missing unit in duration {0:?}, please pass time as '1h', '1m', '30s'")]
    MissingUnit(String),
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },
}

/// Parses a duration made of one or more `<number><unit>` segments.
///
/// A bare `0` is accepted as zero. Fractions are allowed on any segment
/// (`1.5s`), signs are not.
pub fn parse_duration(s: &str) -> Result<Duration, DurationError> {
    let input = s.trim();
    if input.is_empty() {
        return Err(DurationError::Empty);
    }
    if input == "0" {
        return Ok(Duration::ZERO);
    }

    let mut total_nanos: f64 = 0.0;
    let mut rest = input;

    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if number_len == 0 {
            return Err(DurationError::Invalid(input.to_string()));
        }
        let (number, tail) = rest.split_at(number_len);
        let value: f64 = number
            .parse()
            .map_err(|_| DurationError::Invalid(input.to_string()))?;

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);
        if unit.is_empty() {
            return Err(DurationError::MissingUnit(input.to_string()));
        }

        let multiplier = UNITS
            .iter()
            .find(|(suffix, _)| *suffix == unit)
            .map(|(_, multiplier)| *multiplier)
            .ok_or_else(|| DurationError::UnknownUnit {
                unit: unit.to_string(),
                input: input.to_string(),
            })?;

        total_nanos += value * multiplier;
        rest = tail;
    }

    let total_nanos = total_nanos.round();
    if !total_nanos.is_finite() || total_nanos >= u64::MAX as f64 {
        return Err(DurationError::Invalid(input.to_string()));
    }

    Ok(Duration::from_nanos(total_nanos as u64))
}

/// Formats a duration for log output, e.g. `1m30s` or `250.00ms`.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs > 0 && d.subsec_nanos() == 0 {
        let mut out = String::new();
        let (hours, minutes, seconds) = (secs / 3600, secs % 3600 / 60, secs % 60);
        if hours > 0 {
            let _ = write!(out, "{hours}h");
        }
        if minutes > 0 {
            let _ = write!(out, "{minutes}m");
        }
        if seconds > 0 {
            let _ = write!(out, "{seconds}s");
        }
        return out;
    }

    let nanos = d.as_nanos();
    if nanos == 0 {
        "0s".to_string()
    } else if nanos < 1_000 {
        format!("{nanos}ns")
    } else if nanos < 1_000_000 {
        format!("{:.2}µs", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.2}ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
