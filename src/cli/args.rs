//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `write`: write one locale's catalog, one JSON file per namespace
//! - `write-all`: write a multi-locale bundle
//! - `scaffold`: create placeholder files copied from the base locale
//! - `check`: compare locales against the base locale
//! - `locales`: list supported UI locales
//! - `init`: create a `.catalogrc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::catalog::Locale;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by commands that touch the translations tree.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Translations directory (overrides config file)
    #[arg(long, env = "CATALOG_TRANSLATIONS_ROOT")]
    pub translations_root: Option<PathBuf>,

    /// Base locale that other locales are derived from (overrides config file)
    #[arg(long)]
    pub base_locale: Option<Locale>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct WriteCommand {
    /// Locale code the catalog belongs to, e.g. `sv`
    pub locale: Locale,

    /// JSON file mapping namespace names to translation objects
    #[arg(short, long)]
    pub source: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct WriteAllCommand {
    /// JSON file mapping locale codes to catalogs
    #[arg(short, long)]
    pub source: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ScaffoldCommand {
    /// Target locales (default: `locales` from config, or every supported locale)
    pub locales: Vec<Locale>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Locales to check (default: every locale directory except the base)
    pub locales: Vec<Locale>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Translations directory to record in the config
    #[arg(long)]
    pub translations_root: Option<String>,

    /// Base locale to record in the config
    #[arg(long)]
    pub base_locale: Option<Locale>,

    /// Comma-separated scaffold targets to record in the config
    #[arg(long, value_delimiter = ',')]
    pub locales: Vec<Locale>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a locale's catalog as one JSON file per namespace
    Write(WriteCommand),
    /// Write catalogs for several locales from one bundle file
    WriteAll(WriteAllCommand),
    /// Create placeholder namespace files copied from the base locale
    Scaffold(ScaffoldCommand),
    /// Check locales for missing keys, placeholder drift and untranslated values
    Check(CheckCommand),
    /// List supported UI locales
    Locales,
    /// Initialize a new .catalogrc.json configuration file
    Init(InitCommand),
}
