use std::env;

use anyhow::{Context, Result};

use super::super::exit_status::ExitStatus;
use super::super::report::print_locales;
use crate::catalog::{Locale, SUPPORTED_LOCALES, locale::DEFAULT_BASE_LOCALE};
use crate::config::load_config;

pub fn locales() -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    // Only used to tag the base row, so a broken config is not fatal here.
    let configured = load_config(&cwd)
        .ok()
        .and_then(|loaded| loaded.config.base_locale().ok());
    let base = match configured {
        Some(locale) => locale,
        None => Locale::new(DEFAULT_BASE_LOCALE)?,
    };

    print_locales(SUPPORTED_LOCALES, &base);
    Ok(ExitStatus::Success)
}
