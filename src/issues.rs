//! Issue types produced by catalog checks.
//!
//! Each issue is self-contained: it carries the locale, namespace and key it
//! refers to, so the reporter needs nothing else to print it.

use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

use crate::catalog::{Locale, Namespace};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    ParseError,
    MissingFile,
    MissingKey,
    PlaceholderMismatch,
    OrphanKey,
    Untranslated,
    ScaffoldNote,
}

impl Rule {
    pub fn severity(self) -> Severity {
        match self {
            Rule::ParseError | Rule::MissingFile | Rule::MissingKey | Rule::PlaceholderMismatch => {
                Severity::Error
            }
            Rule::OrphanKey | Rule::Untranslated | Rule::ScaffoldNote => Severity::Warning,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::ParseError => write!(f, "parse-error"),
            Rule::MissingFile => write!(f, "missing-file"),
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::OrphanKey => write!(f, "orphan-key"),
            Rule::Untranslated => write!(f, "untranslated"),
            Rule::ScaffoldNote => write!(f, "scaffold-note"),
        }
    }
}

// ============================================================
// Issue
// ============================================================

/// One finding about a locale's namespace file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub rule: Rule,
    pub locale: Locale,
    pub namespace: Namespace,
    /// Dotted key path, when the issue is about a single key.
    pub key: Option<String>,
    /// File the issue points at.
    pub path: PathBuf,
    pub message: String,
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.rule.severity()
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.locale
            .cmp(&other.locale)
            .then_with(|| self.namespace.cmp(&other.namespace))
            .then_with(|| self.severity().cmp(&other.severity()))
            .then_with(|| self.rule.cmp(&other.rule))
            .then_with(|| self.key.cmp(&other.key))
            .then_with(|| self.message.cmp(&other.message))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
