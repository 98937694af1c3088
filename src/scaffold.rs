//! Placeholder catalogs for locales that have not been translated yet.
//!
//! Each missing namespace file is seeded with the base locale's content plus
//! a leading `_note` entry. Files that already exist are never touched.

use std::path::PathBuf;

use anyhow::Result;

use crate::catalog::{Catalog, Locale, Namespace};
use crate::writer::{CatalogWriter, WrittenFile};

/// Top-level key marking a scaffolded file.
pub const NOTE_KEY: &str = "_note";

/// Top-level key some older placeholder files carry next to [`NOTE_KEY`].
pub const TODO_KEY: &str = "_TODO";

pub fn placeholder_note(locale: &Locale) -> String {
    format!(
        "This is a placeholder file. Please replace with {} translations.",
        locale
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub locale: Locale,
    pub namespace: Namespace,
    pub path: PathBuf,
}

/// Outcome of scaffolding one locale.
#[derive(Debug, Clone)]
pub struct LocaleScaffold {
    pub locale: Locale,
    pub created: Vec<WrittenFile>,
    pub skipped: Vec<SkippedFile>,
}

#[derive(Debug, Clone, Default)]
pub struct ScaffoldSummary {
    pub locales: Vec<LocaleScaffold>,
}

impl ScaffoldSummary {
    pub fn created_count(&self) -> usize {
        self.locales.iter().map(|l| l.created.len()).sum()
    }

    pub fn skipped_count(&self) -> usize {
        self.locales.iter().map(|l| l.skipped.len()).sum()
    }
}

/// Seed every target locale with placeholder copies of `base_catalog`.
///
/// `base_locale` is skipped if it appears among `targets`.
pub fn scaffold(
    writer: &CatalogWriter,
    base_locale: &Locale,
    base_catalog: &Catalog,
    targets: &[Locale],
) -> Result<ScaffoldSummary> {
    let mut summary = ScaffoldSummary::default();

    for locale in targets {
        if locale == base_locale {
            continue;
        }

        let note = placeholder_note(locale);
        let mut result = LocaleScaffold {
            locale: locale.clone(),
            created: Vec::new(),
            skipped: Vec::new(),
        };

        for (namespace, tree) in base_catalog.iter() {
            let path = writer.namespace_path(locale, namespace);
            if path.exists() {
                result.skipped.push(SkippedFile {
                    locale: locale.clone(),
                    namespace: namespace.clone(),
                    path,
                });
                continue;
            }
            let placeholder = tree.with_leading_text(NOTE_KEY, note.as_str());
            result
                .created
                .push(writer.write_namespace(locale, namespace, &placeholder)?);
        }

        summary.locales.push(result);
    }

    Ok(summary)
}
