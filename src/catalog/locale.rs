//! Locale identifiers and the table of supported UI languages.

use std::fmt;
use std::str::FromStr;

use anyhow::{Error, Result, bail};
use serde::{Deserialize, Serialize};

/// Longest accepted locale identifier (BCP 47 recommends supporting 35 chars).
const MAX_LOCALE_LEN: usize = 35;

/// A validated locale identifier such as `sv` or `zh-Hant`.
///
/// Only ASCII letters, digits, `-` and `_` are accepted and the first
/// character must be a letter, so the value is always safe to use as a
/// single path component.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        validate_locale(&code)?;
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Metadata for this locale if it is one of the supported UI languages.
    pub fn info(&self) -> Option<&'static LocaleInfo> {
        lookup(&self.0)
    }
}

fn validate_locale(code: &str) -> Result<()> {
    let Some(first) = code.chars().next() else {
        bail!("Locale identifier must not be empty");
    };
    if code.len() > MAX_LOCALE_LEN {
        bail!(
            "Locale identifier is longer than {} characters: \"{}\"",
            MAX_LOCALE_LEN,
            code
        );
    }
    if !first.is_ascii_alphabetic() {
        bail!("Locale identifier must start with a letter: \"{}\"", code);
    }
    if let Some(bad) = code
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        bail!(
            "Locale identifier contains unsafe character {:?}: \"{}\"",
            bad,
            code
        );
    }
    Ok(())
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A UI language the application ships translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub rtl: bool,
}

const fn ltr(code: &'static str, name: &'static str, native_name: &'static str) -> LocaleInfo {
    LocaleInfo {
        code,
        name,
        native_name,
        rtl: false,
    }
}

const fn rtl(code: &'static str, name: &'static str, native_name: &'static str) -> LocaleInfo {
    LocaleInfo {
        code,
        name,
        native_name,
        rtl: true,
    }
}

pub const DEFAULT_BASE_LOCALE: &str = "en";

pub const SUPPORTED_LOCALES: &[LocaleInfo] = &[
    ltr("en", "English", "English"),
    ltr("es", "Spanish", "Español"),
    ltr("fr", "French", "Français"),
    ltr("de", "German", "Deutsch"),
    ltr("it", "Italian", "Italiano"),
    ltr("pt", "Portuguese", "Português"),
    ltr("ru", "Russian", "Русский"),
    ltr("ja", "Japanese", "日本語"),
    ltr("ko", "Korean", "한국어"),
    ltr("zh", "Chinese (Simplified)", "简体字"),
    ltr("zh-Hant", "Chinese (Traditional)", "繁體字"),
    rtl("ar", "Arabic", "عربى"),
    rtl("he", "Hebrew", "עִברִית"),
    ltr("hi", "Hindi", "हिंदी"),
    ltr("th", "Thai", "ภาษาไทย"),
    ltr("tr", "Turkish", "Türkçe"),
    ltr("pl", "Polish", "Polski"),
    ltr("uk", "Ukrainian", "Українська"),
    ltr("nl", "Dutch", "Nederlands"),
    ltr("sv", "Swedish", "Svenska"),
    ltr("no", "Norwegian", "Norsk"),
    ltr("da", "Danish", "Dansk"),
    ltr("fi", "Finnish", "Suomi"),
    ltr("cs", "Czech", "Čeština"),
    ltr("hr", "Croatian", "Hrvatski"),
    ltr("id", "Indonesian", "Indonesia"),
    ltr("ms", "Malay", "Melayu"),
    ltr("ro", "Romanian", "Română"),
    ltr("sk", "Slovak", "Slovenčina"),
    ltr("sl", "Slovenian", "Slovenščina"),
    ltr("sr", "Serbian", "Српски"),
    ltr("lv", "Latvian", "Latviešu"),
    ltr("lt", "Lithuanian", "Lietuvių"),
    ltr("et", "Estonian", "Eesti keel"),
    ltr("hu", "Hungarian", "Magyar"),
    ltr("ca", "Catalan", "Català"),
    ltr("ceb", "Cebuano", "Cebuano"),
    ltr("tl", "Tagalog", "Tagalog"),
    ltr("vi", "Vietnamese", "Tiếng Việt"),
    ltr("uz", "Uzbek", "O'zbek"),
    ltr("el", "Greek", "Ελληνικά"),
    ltr("bg", "Bulgarian", "Български"),
    ltr("kk", "Kazakh", "Қазақ"),
    ltr("gu", "Gujarati", "ગુજરાતી"),
];

/// Find a supported locale by its exact code.
pub fn lookup(code: &str) -> Option<&'static LocaleInfo> {
    SUPPORTED_LOCALES.iter().find(|info| info.code == code)
}
