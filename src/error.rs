//! Error taxonomy for the generation pipeline.
//!
//! Every variant is fatal: the pipeline has no recovery or partial-success mode.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(
        "must be run from the repository root ('{marker}' not found in {})",
        cwd.display()
    )]
    NotRepositoryRoot { marker: String, cwd: PathBuf },

    #[error("dependency record '{}' does not exist", path.display())]
    LockFileMissing { path: PathBuf },

    #[error("'{name}' dependency not found in {}", lock_file.display())]
    DependencyNotFound { name: String, lock_file: PathBuf },

    #[error("cannot resolve '{name}' to a directory: {entry}")]
    UnresolvableDependency { name: String, entry: String },

    #[error("directory '{}' does not exist", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("unsupported JSON type in {context}: {description}")]
    UnsupportedType {
        context: String,
        description: String,
    },

    #[error("string cannot be written as a raw literal without colliding with its delimiter: {value:?}")]
    DelimiterCollision { value: String },

    #[error("string starts with a blank line, which a triple-quoted literal drops: {value:?}")]
    BlankFirstLine { value: String },

    #[error("failed to parse {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// True for the errors raised before any locale data is touched.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::NotRepositoryRoot { .. }
                | Self::LockFileMissing { .. }
                | Self::DependencyNotFound { .. }
                | Self::UnresolvableDependency { .. }
        )
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;
