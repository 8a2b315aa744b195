//! CLI argument definitions using clap.
//!
//! Without a subcommand the generator runs: it prints the generated document,
//! or writes it into the localization package with `--overwrite`.
//!
//! ## Commands
//!
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

impl Arguments {
    pub fn verbose(&self) -> bool {
        self.generate.verbose
    }
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Write the generated file and format it instead of printing to stdout
    #[arg(short = 'w', long)]
    pub overwrite: bool,

    /// Path to the intl package's lib directory (skips the dependency record)
    #[arg(long, env = "INTL_DATAGEN_INTL_DIR")]
    pub intl_dir: Option<PathBuf>,

    /// Do not run the formatter after writing
    #[arg(long)]
    pub no_format: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .datagenrc.json configuration file
    Init,
}
