//! Printing of run results.
//!
//! The generated document goes to stdout untouched so it can be redirected;
//! status lines go to stderr.

use std::io::{self, Write};

use colored::Colorize;

use super::run::RunResult;
use crate::config::CONFIG_FILE_NAME;
use crate::core::{GenerateOutcome, output::FormatStatus};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Warning mark for best-effort steps that did not complete.
pub const WARNING_MARK: &str = "\u{26a0}"; // ⚠

pub fn print(result: &RunResult, verbose: bool) -> io::Result<()> {
    match result {
        RunResult::Generated(outcome) => print_generated(
            outcome,
            verbose,
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
        ),
        RunResult::Initialized => {
            let mut err = io::stderr().lock();
            writeln!(
                err,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", CONFIG_FILE_NAME).green()
            )
        }
    }
}

/// Print a generation outcome to custom writers.
pub fn print_generated<O: Write, E: Write>(
    outcome: &GenerateOutcome,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    let Some(path) = &outcome.output_path else {
        return write!(out, "{}", outcome.document);
    };

    writeln!(
        err,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Wrote {} ({} supported locales)",
            path.display(),
            outcome.supported_locales
        )
        .green()
    )?;
    match &outcome.format_status {
        FormatStatus::Failed(reason) => {
            writeln!(err, "{} formatter failed: {}", WARNING_MARK.yellow(), reason)
        }
        FormatStatus::Skipped if verbose => writeln!(err, "  formatting skipped"),
        _ => Ok(()),
    }
}
