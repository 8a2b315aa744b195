use std::process::ExitCode;

/// Exit status for the generator.
///
/// - `Success` (0): Document printed or written
/// - `Error` (1): A precondition or processing failure stopped the run
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Document printed or written.
    Success,
    /// Run stopped by a fatal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
