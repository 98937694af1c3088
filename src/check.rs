//! Consistency checks of locale catalogs against the base locale.
//!
//! Rules:
//! - `missing-file`, `missing-key`: base content absent from the locale
//! - `orphan-key`: locale keys the base does not have
//! - `placeholder-mismatch`: `{{token}}` names differ from the base value
//! - `untranslated`: value identical to the base value
//! - `scaffold-note`: the file still carries a placeholder marker
//! - `parse-error`: the file could not be decoded
//!
//! Plural variants such as `wordCount_other` are plain keys here.

use std::collections::{BTreeSet, HashMap, HashSet};

use anyhow::{Result, bail};

use crate::catalog::{Catalog, Locale, Namespace, TranslationTree};
use crate::issues::{Issue, Rule};
use crate::scaffold::{NOTE_KEY, TODO_KEY};
use crate::source::{LocaleFiles, read_locale_catalog};
use crate::utils::{contains_alphabetic, placeholder_names};
use crate::writer::CatalogWriter;

/// Result of checking a set of locales.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub issues: Vec<Issue>,
    pub locales_checked: usize,
    pub files_checked: usize,
}

/// Load the base catalog and check every target locale against it.
///
/// The base locale itself is never checked. A base namespace file that fails
/// to parse aborts the run, since nothing can be compared against it.
pub fn check_locales(
    writer: &CatalogWriter,
    base: &Locale,
    namespaces: &[Namespace],
    targets: &[Locale],
) -> Result<CheckReport> {
    let base_files = read_locale_catalog(writer.root(), base, namespaces);
    if let Some(err) = base_files.errors.first() {
        bail!("{}", err.message);
    }
    if base_files.catalog.is_empty() {
        bail!(
            "No namespace files found for base locale {} in {}",
            base,
            writer.locale_dir(base).display()
        );
    }

    let mut report = CheckReport::default();
    for locale in targets.iter().filter(|l| *l != base) {
        let files = read_locale_catalog(writer.root(), locale, namespaces);
        report.files_checked += files.catalog.len() + files.errors.len();
        report.locales_checked += 1;
        report
            .issues
            .extend(check_locale(writer, base, &base_files.catalog, locale, &files));
    }
    report.issues.sort();
    Ok(report)
}

/// Compare one locale's files with the base catalog.
pub fn check_locale(
    writer: &CatalogWriter,
    base: &Locale,
    base_catalog: &Catalog,
    locale: &Locale,
    files: &LocaleFiles,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (namespace, base_tree) in base_catalog.iter() {
        let path = writer.namespace_path(locale, namespace);
        let issue = |rule: Rule, key: Option<String>, message: String| Issue {
            rule,
            locale: locale.clone(),
            namespace: namespace.clone(),
            key,
            path: path.clone(),
            message,
        };

        if let Some(err) = files.errors.iter().find(|e| &e.namespace == namespace) {
            issues.push(issue(Rule::ParseError, None, err.message.clone()));
            continue;
        }
        let Some(tree) = files.catalog.get(namespace) else {
            if files.missing.contains(namespace) {
                issues.push(issue(
                    Rule::MissingFile,
                    None,
                    format!("namespace file {} is missing", namespace.file_name()),
                ));
            }
            continue;
        };

        let is_scaffold = has_scaffold_marker(tree);
        if is_scaffold {
            issues.push(issue(
                Rule::ScaffoldNote,
                None,
                "file is still a placeholder copy of the base locale".to_string(),
            ));
        }

        let base_leaves = base_tree.leaves();
        let locale_leaves = tree.leaves();
        let leaves: HashMap<&[&str], &str> = locale_leaves
            .iter()
            .filter(|(path, _)| !is_marker_path(path))
            .map(|(path, value)| (path.as_slice(), *value))
            .collect();

        for (path, base_value) in &base_leaves {
            let key = path.join(".");
            let Some(value) = leaves.get(path.as_slice()) else {
                issues.push(issue(
                    Rule::MissingKey,
                    Some(key.clone()),
                    format!("missing key \"{}\"", key),
                ));
                continue;
            };

            let expected = placeholder_names(base_value);
            let found = placeholder_names(value);
            if expected != found {
                issues.push(issue(
                    Rule::PlaceholderMismatch,
                    Some(key.clone()),
                    format!(
                        "placeholders of \"{}\" differ from {}: expected {}, found {}",
                        key,
                        base,
                        format_tokens(&expected),
                        format_tokens(&found)
                    ),
                ));
            } else if !is_scaffold && value == base_value && contains_alphabetic(base_value) {
                issues.push(issue(
                    Rule::Untranslated,
                    Some(key.clone()),
                    format!("\"{}\" is identical to {}: \"{}\"", key, base, base_value),
                ));
            }
        }

        let base_paths: HashSet<&[&str]> = base_leaves.iter().map(|(p, _)| p.as_slice()).collect();
        for (path, _) in &locale_leaves {
            if is_marker_path(path) || base_paths.contains(path.as_slice()) {
                continue;
            }
            let key = path.join(".");
            issues.push(issue(
                Rule::OrphanKey,
                Some(key.clone()),
                format!("key \"{}\" does not exist in {}", key, base),
            ));
        }
    }

    issues
}

/// Only top-level `_note` / `_TODO` entries are scaffold markers.
fn is_marker_path(path: &[&str]) -> bool {
    matches!(path, [key] if *key == NOTE_KEY || *key == TODO_KEY)
}

fn has_scaffold_marker(tree: &TranslationTree) -> bool {
    tree.get(NOTE_KEY).is_some() || tree.get(TODO_KEY).is_some()
}

fn format_tokens(tokens: &BTreeSet<&str>) -> String {
    if tokens.is_empty() {
        return "none".to_string();
    }
    tokens
        .iter()
        .map(|t| format!("{{{{{}}}}}", t))
        .collect::<Vec<_>>()
        .join(", ")
}
