use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use super::super::args::CommonArgs;
use crate::{
    catalog::{Locale, Namespace},
    config::{CONFIG_FILE_NAME, Config, load_config},
    writer::CatalogWriter,
};

/// Settings resolved from the config file and command-line overrides.
pub struct CommandContext {
    pub config: Config,
    pub translations_root: PathBuf,
    pub base_locale: Locale,
    pub namespaces: Vec<Namespace>,
    pub verbose: bool,
}

impl CommandContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine current directory")?;
        Self::from_dir(&cwd, args)
    }

    /// Resolve settings as if the command ran in `dir`.
    ///
    /// A relative `translationsRoot` from the config file is relative to the
    /// file's directory; a `--translations-root` flag is used as given.
    pub fn from_dir(dir: &Path, args: &CommonArgs) -> Result<Self> {
        let loaded = load_config(dir)?;

        if args.verbose {
            match &loaded.path {
                Some(path) => eprintln!("Note: Using configuration from {}", path.display()),
                None => eprintln!(
                    "Note: No {} found, using default configuration",
                    CONFIG_FILE_NAME
                ),
            }
        }

        let config = loaded.config;
        let translations_root = match &args.translations_root {
            Some(root) => root.clone(),
            None => {
                let configured = PathBuf::from(&config.translations_root);
                match loaded.path.as_deref().and_then(Path::parent) {
                    Some(config_dir) if configured.is_relative() && config_dir != dir => {
                        config_dir.join(configured)
                    }
                    _ => configured,
                }
            }
        };

        let base_locale = match &args.base_locale {
            Some(locale) => locale.clone(),
            None => config.base_locale()?,
        };
        let namespaces = config.namespaces()?;

        Ok(Self {
            config,
            translations_root,
            base_locale,
            namespaces,
            verbose: args.verbose,
        })
    }

    pub fn writer(&self) -> CatalogWriter {
        CatalogWriter::new(&self.translations_root)
    }
}
