//! Checks performed before any locale data is read.
//!
//! The generator only runs from the repository root, and locates the intl
//! package through the framework package's dependency record. Two record
//! formats are understood:
//!
//! - `.packages`: one `name:uri` line per dependency
//! - `package_config.json`: `{"packages": [{"name", "rootUri", "packageUri"}]}`

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use url::Url;

use crate::error::{GenerateError, Result};

/// Directory whose presence marks the repository root.
pub const REPOSITORY_MARKER: &str = ".git";

/// Fail unless `cwd` contains the repository marker directory.
pub fn check_repository_root(cwd: &Path, marker: &str) -> Result<()> {
    if cwd.join(marker).is_dir() {
        Ok(())
    } else {
        Err(GenerateError::NotRepositoryRoot {
            marker: marker.to_string(),
            cwd: cwd.to_path_buf(),
        })
    }
}

/// Resolve the `lib/` directory of dependency `name` from a lock record.
pub fn resolve_dependency_root(lock_file: &Path, name: &str) -> Result<PathBuf> {
    if !lock_file.is_file() {
        return Err(GenerateError::LockFileMissing {
            path: lock_file.to_path_buf(),
        });
    }
    let content =
        fs::read_to_string(lock_file).map_err(|e| GenerateError::io(lock_file, e))?;
    let base = base_url(lock_file, name)?;

    let is_package_config = lock_file.extension().and_then(|e| e.to_str()) == Some("json");
    let url = if is_package_config {
        package_config_url(&content, lock_file, &base, name)?
    } else {
        dot_packages_url(&content, lock_file, &base, name)?
    };

    let unresolvable = || GenerateError::UnresolvableDependency {
        name: name.to_string(),
        entry: url.to_string(),
    };
    let path = url.to_file_path().map_err(|_| unresolvable())?;
    if !path.is_dir() {
        return Err(unresolvable());
    }
    tracing::debug!(dependency = name, path = %path.display(), "resolved dependency root");
    Ok(path)
}

fn dot_packages_url(content: &str, lock_file: &Path, base: &Url, name: &str) -> Result<Url> {
    let prefix = format!("{name}:");
    let entry = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .find_map(|line| line.strip_prefix(&prefix))
        .ok_or_else(|| GenerateError::DependencyNotFound {
            name: name.to_string(),
            lock_file: lock_file.to_path_buf(),
        })?;
    join_url(base, entry, name)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageConfig {
    packages: Vec<PackageEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageEntry {
    name: String,
    root_uri: String,
    #[serde(default = "default_package_uri")]
    package_uri: String,
}

fn default_package_uri() -> String {
    "lib/".to_string()
}

fn package_config_url(content: &str, lock_file: &Path, base: &Url, name: &str) -> Result<Url> {
    let config: PackageConfig =
        serde_json::from_str(content).map_err(|source| GenerateError::Json {
            path: lock_file.to_path_buf(),
            source,
        })?;
    let entry = config
        .packages
        .into_iter()
        .find(|p| p.name == name)
        .ok_or_else(|| GenerateError::DependencyNotFound {
            name: name.to_string(),
            lock_file: lock_file.to_path_buf(),
        })?;

    let mut root = entry.root_uri;
    if !root.ends_with('/') {
        root.push('/');
    }
    let root = join_url(base, &root, name)?;
    join_url(&root, &entry.package_uri, name)
}

fn join_url(base: &Url, entry: &str, name: &str) -> Result<Url> {
    base.join(entry)
        .map_err(|e| GenerateError::UnresolvableDependency {
            name: name.to_string(),
            entry: format!("{entry} ({e})"),
        })
}

/// Directory URL of the lock file, against which relative entries resolve.
fn base_url(lock_file: &Path, name: &str) -> Result<Url> {
    let dir = lock_file.parent().unwrap_or(Path::new("."));
    let dir = std::path::absolute(dir).map_err(|e| GenerateError::io(dir, e))?;
    Url::from_directory_path(&dir).map_err(|_| GenerateError::UnresolvableDependency {
        name: name.to_string(),
        entry: format!("relative to {}", dir.display()),
    })
}
