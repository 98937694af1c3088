//! Common utility functions shared across the codebase.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([^{}\s]+)\s*\}\}").unwrap());

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use catalog::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Klar"));
/// assert!(contains_alphabetic("日本語"));
/// assert!(!contains_alphabetic("{{current}}/{{total}}"));
/// assert!(!contains_alphabetic("#"));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    let stripped = PLACEHOLDER_REGEX.replace_all(text, "");
    stripped.chars().any(|c| c.is_alphabetic())
}

/// Names of the `{{placeholder}}` tokens in a translation string.
///
/// The tokens are opaque; only their names are collected.
///
/// ```
/// use catalog::utils::placeholder_names;
///
/// let names = placeholder_names("Poäng: {{score}}/{{ total }}");
/// assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["score", "total"]);
/// ```
pub fn placeholder_names(text: &str) -> BTreeSet<&str> {
    PLACEHOLDER_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}
