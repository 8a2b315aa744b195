use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use walkdir::WalkDir;

use crate::error::{GenerateError, Result};

pub const DATA_FILE_EXTENSION: &str = "json";

/// A locale data document on disk, read once when the table is assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFile {
    pub locale: String,
    pub path: PathBuf,
}

impl DataFile {
    pub fn read_json(&self) -> Result<Value> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| GenerateError::io(&self.path, e))?;
        serde_json::from_str(&content).map_err(|source| GenerateError::Json {
            path: self.path.clone(),
            source,
        })
    }
}

/// Locale code to data file, iterated in sorted locale order.
pub type LocaleFiles = BTreeMap<String, DataFile>;

/// Index the `*.json` files directly inside `dir` by file stem.
///
/// Subdirectories and other extensions are skipped silently.
pub fn index_locale_files(dir: impl AsRef<Path>) -> Result<LocaleFiles> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(GenerateError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = LocaleFiles::new();
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            GenerateError::io(path, e.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(DATA_FILE_EXTENSION) {
            continue;
        }
        let Some(locale) = path.file_stem().and_then(|s| s.to_str()) else {
            tracing::debug!(path = %path.display(), "skipping non UTF-8 file name");
            continue;
        };
        files.insert(
            locale.to_string(),
            DataFile {
                locale: locale.to_string(),
                path: path.to_path_buf(),
            },
        );
    }

    tracing::debug!(dir = %dir.display(), count = files.len(), "indexed locale data files");
    Ok(files)
}
