use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod generate;
mod init;

const BIN_NAME: &str = "intl-datagen";

pub const OUTPUT_FILE: &str =
    "packages/flutter_localizations/lib/src/l10n/date_localizations.dart";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A repository root with a `.packages` record pointing at a vendored intl
    /// package, one supported locale (`en`) and one unsupported (`fr`).
    pub fn with_repository() -> Result<Self> {
        let test = Self::new()?;
        fs::create_dir_all(test.root().join(".git"))?;
        test.write_file(
            "packages/flutter_localizations/.packages",
            "# Generated by pub\nintl:../../third_party/intl/lib/\n",
        )?;
        test.write_symbols("en", r#"{"NAME": "en", "ERAS": ["BC", "AD"]}"#)?;
        test.write_symbols("fr", r#"{"NAME": "fr", "ERAS": ["av. J.-C.", "ap. J.-C."]}"#)?;
        test.write_patterns("en", r#"{"d": "d", "MMMd": "MMM d"}"#)?;
        test.write_patterns("fr", r#"{"d": "d", "MMMd": "d MMM"}"#)?;
        test.write_file(
            "packages/flutter_localizations/lib/src/l10n/material_en.arb",
            "{}",
        )?;
        test.write_file("packages/flutter_localizations/lib/src/l10n/README.md", "")?;
        Ok(test)
    }

    pub fn write_symbols(&self, locale: &str, content: &str) -> Result<()> {
        self.write_file(
            &format!("third_party/intl/lib/src/data/dates/symbols/{locale}.json"),
            content,
        )
    }

    pub fn write_patterns(&self, locale: &str, content: &str) -> Result<()> {
        self.write_file(
            &format!("third_party/intl/lib/src/data/dates/patterns/{locale}.json"),
            content,
        )
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}
