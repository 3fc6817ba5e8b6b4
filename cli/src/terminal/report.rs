//! The machine-readable side of the output.
//!
//! Standard output carries exactly one result message per host followed by
//! [`FINISHED_MARKER`]. Logs, headers, the summary and the spinner all go to
//! standard error.

use std::io::{self, IsTerminal, Stdout, Write};

use vigil_common::outcome::CheckResult;

use crate::terminal::{format, spinner};

pub const FINISHED_MARKER: &str = "Finished processing results";

pub struct Report<W: Write> {
    out: W,
    colorize: bool,
    error: Option<io::Error>,
}

impl Report<Stdout> {
    /// Colours verdicts only when standard output is a terminal.
    pub fn stdout() -> Self {
        let out = io::stdout();
        let colorize = out.is_terminal();
        Self::new(out, colorize)
    }
}

impl<W: Write> Report<W> {
    pub fn new(out: W, colorize: bool) -> Self {
        Self {
            out,
            colorize,
            error: None,
        }
    }

    /// Writes one verdict line. The first write error is kept for [`Report::finish`].
    pub fn verdict(&mut self, result: &CheckResult) {
        if self.error.is_some() {
            return;
        }
        let line: String = format::result_line(result, self.colorize);
        let out = &mut self.out;
        let written = spinner::get_spinner().suspend(|| {
            writeln!(out, "{line}")?;
            out.flush()
        });
        if let Err(err) = written {
            self.error = Some(err);
        }
    }

    pub fn finish(&mut self) -> io::Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        writeln!(self.out, "{FINISHED_MARKER}")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
