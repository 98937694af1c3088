use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::catalog::{DEFAULT_NAMESPACES, Locale, Namespace, locale::DEFAULT_BASE_LOCALE};

pub const CONFIG_FILE_NAME: &str = ".catalogrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_translations_root", alias = "translationsDir")]
    pub translations_root: String,
    #[serde(default = "default_base_locale")]
    pub base_locale: String,
    #[serde(default = "default_namespaces")]
    pub namespaces: Vec<String>,
    /// Target locales for `scaffold`. Empty means every supported locale.
    #[serde(default)]
    pub locales: Vec<String>,
}

fn default_translations_root() -> String {
    "./translations".to_string()
}

fn default_base_locale() -> String {
    DEFAULT_BASE_LOCALE.to_string()
}

fn default_namespaces() -> Vec<String> {
    DEFAULT_NAMESPACES.iter().map(|ns| ns.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translations_root: default_translations_root(),
            base_locale: default_base_locale(),
            namespaces: default_namespaces(),
            locales: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for an invalid base locale, invalid or repeated
    /// namespaces, or invalid target locales.
    pub fn validate(&self) -> Result<()> {
        Locale::new(self.base_locale.as_str())
            .with_context(|| format!("Invalid 'baseLocale': \"{}\"", self.base_locale))?;

        let mut seen = HashSet::new();
        for name in &self.namespaces {
            Namespace::new(name.as_str())
                .with_context(|| format!("Invalid namespace in 'namespaces': \"{}\"", name))?;
            if !seen.insert(name) {
                bail!("Duplicate namespace in 'namespaces': \"{}\"", name);
            }
        }

        for code in &self.locales {
            Locale::new(code.as_str())
                .with_context(|| format!("Invalid locale in 'locales': \"{}\"", code))?;
        }

        Ok(())
    }

    pub fn base_locale(&self) -> Result<Locale> {
        Locale::new(self.base_locale.as_str())
    }

    pub fn namespaces(&self) -> Result<Vec<Namespace>> {
        self.namespaces
            .iter()
            .map(|name| Namespace::new(name.as_str()))
            .collect()
    }

    pub fn locales(&self) -> Result<Vec<Locale>> {
        self.locales
            .iter()
            .map(|code| Locale::new(code.as_str()))
            .collect()
    }

    /// Pretty JSON as written by `init`, with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self).context("Failed to generate config.")?;
        json.push('\n');
        Ok(json)
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
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
    /// Where the config was read from; `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
