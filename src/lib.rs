//! Catalog - authoring tool for per-namespace i18n translation catalogs
//!
//! A catalog is every namespace of one locale. The writer materializes it as
//! `<translations>/<locale>/<namespace>.json`, one pretty-printed, key-order
//! preserving file per namespace, which an i18next-style loader consumes.
//!
//! ## Module Structure
//!
//! - `catalog`: locale, namespace and translation tree types
//! - `writer`: the catalog writer
//! - `source`: loading catalog sources and existing namespace files
//! - `scaffold`: placeholder files for untranslated locales
//! - `check`: consistency checks against the base locale
//! - `issues`: issue types reported by checks
//! - `config`: configuration file loading and parsing
//! - `cli`: command-line interface layer
//! - `utils`: shared utility functions

pub mod catalog;
pub mod check;
pub mod cli;
pub mod config;
pub mod issues;
pub mod scaffold;
pub mod source;
pub mod utils;
pub mod writer;
