use std::{fs, path::Path, process::Command};

use crate::error::{GenerateError, Result};

/// Overwrite `path` with the generated document.
pub fn write_document(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GenerateError::io(parent, e))?;
    }
    fs::write(path, document).map_err(|e| GenerateError::io(path, e))?;
    tracing::info!(path = %path.display(), bytes = document.len(), "wrote generated document");
    Ok(())
}

/// Outcome of the best-effort formatter invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatStatus {
    Formatted,
    Skipped,
    Failed(String),
}

/// Run `formatter` (program plus leading arguments) on `path`.
///
/// Failures are reported back, never raised: the written document is already
/// valid source, only unformatted.
pub fn run_formatter(formatter: &[String], path: &Path) -> FormatStatus {
    let Some((program, args)) = formatter.split_first() else {
        return FormatStatus::Skipped;
    };

    let status = match Command::new(program).args(args).arg(path).output() {
        Ok(output) if output.status.success() => FormatStatus::Formatted,
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let line = stderr.trim().lines().next().unwrap_or_default().to_string();
            FormatStatus::Failed(format!("{program} exited with {}: {line}", output.status))
        }
        Err(e) => FormatStatus::Failed(format!("failed to run {program}: {e}")),
    };

    match &status {
        FormatStatus::Failed(reason) => tracing::warn!("formatter did not run cleanly: {reason}"),
        _ => tracing::debug!(program = program.as_str(), "formatted generated document"),
    }
    status
}
