//! Catalog writer: materializes catalogs as one JSON file per namespace.
//!
//! Layout is `<root>/<locale>/<namespace>.json`. Files are pretty-printed
//! with 2-space indentation, keep key order, keep non-ASCII text verbatim
//! and end with a trailing newline. Existing files are replaced wholesale.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;

use crate::catalog::{Catalog, CatalogBundle, Locale, Namespace, TranslationTree};

/// Completion record for one written namespace file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub locale: Locale,
    pub namespace: Namespace,
    pub path: PathBuf,
    pub bytes: usize,
}

impl WrittenFile {
    /// Short display form, e.g. `sv/common.json`.
    pub fn label(&self) -> String {
        format!("{}/{}", self.locale, self.namespace.file_name())
    }
}

/// Everything written for one locale of a bundle.
#[derive(Debug)]
pub struct LocaleWrite {
    pub locale: Locale,
    /// Files that landed on disk, including those written before a failure.
    pub files: Vec<WrittenFile>,
    /// Why the locale stopped early, if it did.
    pub error: Option<anyhow::Error>,
}

#[derive(Debug, Clone)]
pub struct CatalogWriter {
    root: PathBuf,
}

impl CatalogWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding every namespace file of `locale`.
    pub fn locale_dir(&self, locale: &Locale) -> PathBuf {
        self.root.join(locale.as_str())
    }

    pub fn namespace_path(&self, locale: &Locale, namespace: &Namespace) -> PathBuf {
        self.locale_dir(locale).join(namespace.file_name())
    }

    /// Write every namespace of `catalog` for `locale`, in catalog order.
    ///
    /// `on_written` is called after each file lands on disk. The first
    /// failure stops the run; files written before it are left in place.
    pub fn write_catalog<F>(
        &self,
        locale: &Locale,
        catalog: &Catalog,
        mut on_written: F,
    ) -> Result<Vec<WrittenFile>>
    where
        F: FnMut(&WrittenFile),
    {
        let mut written = Vec::with_capacity(catalog.len());
        for (namespace, tree) in catalog.iter() {
            let file = self.write_namespace(locale, namespace, tree)?;
            on_written(&file);
            written.push(file);
        }
        Ok(written)
    }

    /// Write a single namespace file, creating the locale directory if needed.
    pub fn write_namespace(
        &self,
        locale: &Locale,
        namespace: &Namespace,
        tree: &TranslationTree,
    ) -> Result<WrittenFile> {
        ensure_single_component(locale.as_str())?;
        ensure_single_component(namespace.as_str())?;

        let dir = self.locale_dir(locale);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

        let content = render(tree)?;
        let path = dir.join(namespace.file_name());
        fs::write(&path, &content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        Ok(WrittenFile {
            locale: locale.clone(),
            namespace: namespace.clone(),
            path,
            bytes: content.len(),
        })
    }

    /// Write every locale of `bundle`.
    ///
    /// Locales share nothing, so they are written in parallel. Within a
    /// locale namespaces are still written in order, and a failure stops only
    /// that locale. Results come back in bundle order, so every file that was
    /// written can be reported even when another locale failed.
    pub fn write_bundle(&self, bundle: &CatalogBundle) -> Vec<LocaleWrite> {
        let locales: Vec<(&Locale, &Catalog)> = bundle.iter().collect();
        locales
            .par_iter()
            .map(|(locale, catalog)| {
                let mut files = Vec::with_capacity(catalog.len());
                let error = self
                    .write_catalog(locale, catalog, |file| files.push(file.clone()))
                    .err()
                    .map(|err| err.context(format!("Failed to write catalog for locale {}", locale)));
                LocaleWrite {
                    locale: (*locale).clone(),
                    files,
                    error,
                }
            })
            .collect()
    }
}

/// Serialize a tree the way it is stored on disk.
pub fn render(tree: &TranslationTree) -> Result<String> {
    let mut content = serde_json::to_string_pretty(tree).context("Failed to serialize JSON")?;
    content.push('\n');
    Ok(content)
}

fn ensure_single_component(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => bail!("Refusing to build a path from \"{}\"", name),
    }
}
