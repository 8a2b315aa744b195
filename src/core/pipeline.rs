//! End-to-end generation run.
//!
//! Steps run strictly in order: preconditions, corpus indexing, supported
//! locale resolution, assembly, and finally the optional write and format.
//! Nothing touches the output path until the document is complete.

use std::path::{Path, PathBuf};

use super::{
    assemble::{Corpus, assemble},
    index::index_locale_files,
    output::{FormatStatus, run_formatter, write_document},
    preconditions::{REPOSITORY_MARKER, check_repository_root, resolve_dependency_root},
    supported::supported_locale_set,
};
use crate::{
    config::Config,
    error::{GenerateError, Result},
};

/// Relative location of the date data inside the intl package's `lib/`.
pub const DATES_DATA_DIR: &str = "src/data/dates";

pub struct GenerateRequest<'a> {
    /// Must be the repository root.
    pub cwd: &'a Path,
    pub config: &'a Config,
    /// Write to the output file instead of only returning the text.
    pub overwrite: bool,
    /// Use this intl `lib/` directory instead of consulting the lock record.
    pub intl_dir: Option<PathBuf>,
    /// Run the configured formatter after writing.
    pub format: bool,
}

#[derive(Debug)]
pub struct GenerateOutcome {
    pub document: String,
    /// Set when the document was written to disk.
    pub output_path: Option<PathBuf>,
    pub format_status: FormatStatus,
    pub supported_locales: usize,
}

pub fn generate(request: GenerateRequest<'_>) -> Result<GenerateOutcome> {
    let GenerateRequest {
        cwd,
        config,
        overwrite,
        intl_dir,
        format,
    } = request;

    check_repository_root(cwd, REPOSITORY_MARKER)?;
    let intl_root = match intl_dir {
        Some(dir) => {
            let dir = cwd.join(dir);
            if !dir.is_dir() {
                return Err(GenerateError::DirectoryNotFound { path: dir });
            }
            dir
        }
        None => resolve_dependency_root(&config.lock_file_path(cwd), &config.dependency)?,
    };

    let data_dir = intl_root.join(DATES_DATA_DIR);
    let symbols = index_locale_files(data_dir.join(Corpus::Symbols.dir_name()))?;
    let patterns = index_locale_files(data_dir.join(Corpus::Patterns.dir_name()))?;
    let supported = supported_locale_set(config.l10n_dir(cwd), &config.resource_extension)?;

    let document = assemble(&symbols, &patterns, &supported)?;

    let mut outcome = GenerateOutcome {
        document,
        output_path: None,
        format_status: FormatStatus::Skipped,
        supported_locales: supported.len(),
    };
    if overwrite {
        let path = config.output_path(cwd);
        write_document(&path, &outcome.document)?;
        if format {
            outcome.format_status = run_formatter(&config.formatter, &path);
        }
        outcome.output_path = Some(path);
    }
    Ok(outcome)
}
