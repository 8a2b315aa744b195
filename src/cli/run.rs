use std::{env, fs, path::Path};

use anyhow::{Context, Result, bail};

use super::args::{Arguments, Command, GenerateArgs};
use crate::config::{CONFIG_FILE_NAME, default_config_json, load_config};
use crate::core::{
    GenerateOutcome, GenerateRequest, generate,
    preconditions::{REPOSITORY_MARKER, check_repository_root},
};

/// What a CLI invocation produced, for the reporter.
pub enum RunResult {
    Generated(GenerateOutcome),
    Initialized,
}

/// Dispatch to the generator or to `init`.
///
/// # Returns
/// - `Ok(RunResult)` describing what was done
/// - `Err` for any fatal precondition or processing failure
pub fn run(Arguments { command, generate: args }: Arguments) -> Result<RunResult> {
    match command {
        Some(Command::Init) => {
            init(Path::new(CONFIG_FILE_NAME))?;
            Ok(RunResult::Initialized)
        }
        None => run_generate(args).map(RunResult::Generated),
    }
}

fn run_generate(args: GenerateArgs) -> Result<GenerateOutcome> {
    let cwd = env::current_dir().context("Failed to determine the working directory")?;
    check_repository_root(&cwd, REPOSITORY_MARKER)?;
    let loaded = load_config(&cwd)?;
    if loaded.from_file {
        tracing::debug!("using {}", CONFIG_FILE_NAME);
    }

    let outcome = generate(GenerateRequest {
        cwd: &cwd,
        config: &loaded.config,
        overwrite: args.overwrite,
        intl_dir: args.intl_dir,
        format: !args.no_format,
    })?;
    Ok(outcome)
}

fn init(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(())
}
