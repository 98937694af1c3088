use std::{env, fs};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::args::InitCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::SUCCESS_MARK;
use crate::config::{CONFIG_FILE_NAME, Config};

/// Write `.catalogrc.json` in the current directory, seeded from the flags.
///
/// An existing config is never replaced.
pub fn init(cmd: InitCommand) -> Result<ExitStatus> {
    let config_path = env::current_dir()
        .context("Failed to determine current directory")?
        .join(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
        return Ok(ExitStatus::Failure);
    }

    let mut config = Config::default();
    if let Some(root) = cmd.translations_root {
        config.translations_root = root;
    }
    if let Some(base) = cmd.base_locale {
        config.base_locale = base.to_string();
    }
    config.locales = cmd.locales.iter().map(ToString::to_string).collect();
    config.validate()?;

    fs::write(&config_path, config.to_json()?)
        .with_context(|| format!("Failed to write file: {}", config_path.display()))?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );

    Ok(ExitStatus::Success)
}
