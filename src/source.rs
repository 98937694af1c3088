//! Loading catalog sources and existing namespace files.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;
use walkdir::WalkDir;

use crate::catalog::{Catalog, CatalogBundle, Locale, Namespace, TranslationTree};

fn load_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}: {}", what, path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}: {}", what, path.display()))
}

/// Load a single-locale source: `{ "<namespace>": { ...tree } }`.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    load_json(path, "catalog source")
}

/// Load a multi-locale source: `{ "<locale>": { "<namespace>": { ...tree } } }`.
pub fn load_bundle(path: &Path) -> Result<CatalogBundle> {
    load_json(path, "catalog source")
}

/// Load one namespace file as produced by the writer.
pub fn load_namespace_file(path: &Path) -> Result<TranslationTree> {
    load_json(path, "namespace file")
}

/// A namespace file that exists but could not be loaded.
#[derive(Debug, Clone)]
pub struct FileError {
    pub namespace: Namespace,
    pub path: PathBuf,
    pub message: String,
}

/// Namespace files found on disk for one locale.
#[derive(Debug, Default)]
pub struct LocaleFiles {
    pub catalog: Catalog,
    /// Namespaces with no file under the locale directory.
    pub missing: Vec<Namespace>,
    /// Files that exist but failed to read or decode.
    pub errors: Vec<FileError>,
}

/// Read every listed namespace of `locale` from `<root>/<locale>/`.
///
/// Unlike the loaders above this never bails: absent files and broken files
/// are collected so callers can report all of them at once.
pub fn read_locale_catalog(root: &Path, locale: &Locale, namespaces: &[Namespace]) -> LocaleFiles {
    let dir = root.join(locale.as_str());
    let mut files = LocaleFiles::default();

    let mut seen = HashSet::new();
    for namespace in namespaces {
        if !seen.insert(namespace) {
            continue;
        }
        let path = dir.join(namespace.file_name());
        if !path.is_file() {
            files.missing.push(namespace.clone());
            continue;
        }
        match load_namespace_file(&path) {
            Ok(tree) => files.catalog.push(namespace.clone(), tree),
            Err(err) => files.errors.push(FileError {
                namespace: namespace.clone(),
                path,
                message: format!("{:#}", err),
            }),
        }
    }

    files
}

/// Locale directories directly under `root`, sorted by code.
///
/// Directories whose names are not valid locale identifiers are skipped.
pub fn discover_locales(root: &Path) -> Result<Vec<Locale>> {
    if !root.is_dir() {
        bail!("Translations directory not found: {}", root.display());
    }

    let mut locales = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry
            .with_context(|| format!("Failed to read directory: {}", root.display()))?;
        if !entry.file_type().is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str()
            && let Ok(locale) = Locale::new(name)
        {
            locales.push(locale);
        }
    }
    locales.sort();
    Ok(locales)
}
