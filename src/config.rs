use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::preconditions::REPOSITORY_MARKER;

pub const CONFIG_FILE_NAME: &str = ".datagenrc.json";

/// Relative location of localization resources inside a package.
pub const L10N_DIR: &str = "lib/src/l10n";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_package")]
    pub localization_package: String,
    #[serde(default = "default_package")]
    pub framework_package: String,
    #[serde(default = "default_lock_file")]
    pub lock_file: String,
    #[serde(default = "default_dependency")]
    pub dependency: String,
    #[serde(default = "default_resource_extension")]
    pub resource_extension: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default = "default_formatter")]
    pub formatter: Vec<String>,
}

fn default_package() -> String {
    "flutter_localizations".to_string()
}

fn default_lock_file() -> String {
    ".packages".to_string()
}

fn default_dependency() -> String {
    "intl".to_string()
}

fn default_resource_extension() -> String {
    "arb".to_string()
}

fn default_output_file() -> String {
    "date_localizations.dart".to_string()
}

fn default_formatter() -> Vec<String> {
    ["dart", "format"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            localization_package: default_package(),
            framework_package: default_package(),
            lock_file: default_lock_file(),
            dependency: default_dependency(),
            resource_extension: default_resource_extension(),
            output_file: default_output_file(),
            formatter: default_formatter(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.formatter.first().is_none_or(|p| p.trim().is_empty()) {
            bail!("'formatter' must name a program, e.g. [\"dart\", \"format\"]");
        }
        if self.dependency.trim().is_empty() {
            bail!("'dependency' must not be empty");
        }
        if self.resource_extension.is_empty()
            || !self
                .resource_extension
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            bail!(
                "Invalid 'resourceExtension': \"{}\" (expected an extension without dot, e.g. \"arb\")",
                self.resource_extension
            );
        }
        for (key, value) in [
            ("localizationPackage", &self.localization_package),
            ("frameworkPackage", &self.framework_package),
            ("outputFile", &self.output_file),
        ] {
            if value.is_empty() || value.contains(['/', '\\']) {
                bail!("Invalid '{}': \"{}\" (expected a single name)", key, value);
            }
        }
        Ok(())
    }

    pub fn l10n_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join("packages")
            .join(&self.localization_package)
            .join(L10N_DIR)
    }

    pub fn lock_file_path(&self, cwd: &Path) -> PathBuf {
        cwd.join("packages")
            .join(&self.framework_package)
            .join(&self.lock_file)
    }

    pub fn output_path(&self, cwd: &Path) -> PathBuf {
        self.l10n_dir(cwd).join(&self.output_file)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(REPOSITORY_MARKER).exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
