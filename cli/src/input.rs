//! Host list sources: standard input first, the `HOSTS` variable otherwise.

use std::env::{self, VarError};
use std::io::{self, BufRead, IsTerminal};

use anyhow::bail;
use tracing::{debug, error};

pub const HOSTS_ENV: &str = "HOSTS";

/// Reads the host list from piped standard input, falling back to `HOSTS`.
pub fn load_host_lines() -> anyhow::Result<Vec<String>> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        let lines = read_lines(stdin.lock());
        if lines.iter().any(|line| !line.trim().is_empty()) {
            debug!(lines = lines.len(), "Read host list from standard input");
            return Ok(lines);
        }
        debug!("Standard input is empty, falling back to {HOSTS_ENV}");
    }
    env_lines(HOSTS_ENV)
}

/// Splits the value of `var` into lines.
pub fn env_lines(var: &str) -> anyhow::Result<Vec<String>> {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(read_lines(value.as_bytes())),
        Ok(_) | Err(VarError::NotPresent) => bail!("ENV variable {var} does not exist"),
        Err(VarError::NotUnicode(_)) => bail!("ENV variable {var} is not valid UTF-8"),
    }
}

/// Reads until EOF. A read error is logged and the lines read so far are kept.
pub fn read_lines<R: BufRead>(reader: R) -> Vec<String> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        match line {
            Ok(line) => lines.push(line),
            Err(err) => {
                error!("Failed to read the host list: {err}");
                break;
            }
        }
    }
    lines
}
