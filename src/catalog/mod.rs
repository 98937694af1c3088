//! In-memory catalog model.
//!
//! - [`Locale`]: validated locale identifier, safe as a directory name
//! - [`Namespace`]: validated namespace name, one file per namespace
//! - [`TranslationTree`]: nested, ordered key → string mapping
//! - [`Catalog`]: every namespace of one locale
//! - [`CatalogBundle`]: catalogs for several locales

pub mod locale;
mod tree;

use std::fmt;
use std::str::FromStr;

use anyhow::{Error, Result, bail};
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

pub use locale::{Locale, LocaleInfo, SUPPORTED_LOCALES};
pub use tree::{TranslationNode, TranslationTree};

/// Namespaces the application loads for every locale.
pub const DEFAULT_NAMESPACES: &[&str] = &["common", "settings", "games", "profile", "create", "auth"];

/// A validated namespace name such as `common` or `settings`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Namespace(String);

impl Namespace {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let Some(first) = name.chars().next() else {
            bail!("Namespace name must not be empty");
        };
        if !first.is_ascii_alphabetic() {
            bail!("Namespace name must start with a letter: \"{}\"", name);
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            bail!(
                "Namespace name contains unsafe character {:?}: \"{}\"",
                bad,
                name
            );
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name the namespace is stored under, e.g. `common.json`.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl FromStr for Namespace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Namespace {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Namespace> for String {
    fn from(namespace: Namespace) -> Self {
        namespace.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// All namespaces of one locale, in the order they were provided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    namespaces: Vec<(Namespace, TranslationTree)>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, namespace: Namespace, tree: TranslationTree) -> Result<()> {
        if self.get(&namespace).is_some() {
            bail!("duplicate namespace \"{}\"", namespace);
        }
        self.namespaces.push((namespace, tree));
        Ok(())
    }

    /// Append without the duplicate check; callers guarantee uniqueness.
    pub(crate) fn push(&mut self, namespace: Namespace, tree: TranslationTree) {
        debug_assert!(self.get(&namespace).is_none(), "duplicate namespace {namespace}");
        self.namespaces.push((namespace, tree));
    }

    pub fn get(&self, namespace: &Namespace) -> Option<&TranslationTree> {
        self.namespaces
            .iter()
            .find(|(ns, _)| ns == namespace)
            .map(|(_, tree)| tree)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Namespace, &TranslationTree)> {
        self.namespaces.iter().map(|(ns, tree)| (ns, tree))
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

/// Catalogs for several locales, in the order they were provided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogBundle {
    locales: Vec<(Locale, Catalog)>,
}

impl CatalogBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, locale: Locale, catalog: Catalog) -> Result<()> {
        if self.get(&locale).is_some() {
            bail!("duplicate locale \"{}\"", locale);
        }
        self.locales.push((locale, catalog));
        Ok(())
    }

    pub fn get(&self, locale: &Locale) -> Option<&Catalog> {
        self.locales
            .iter()
            .find(|(l, _)| l == locale)
            .map(|(_, catalog)| catalog)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Locale, &Catalog)> {
        self.locales.iter().map(|(l, catalog)| (l, catalog))
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

/// Drain a JSON object into ordered entries, failing on a repeated key.
pub(crate) fn collect_unique<'de, A, K, V>(mut map: A) -> Result<Vec<(K, V)>, A::Error>
where
    A: MapAccess<'de>,
    K: Deserialize<'de> + PartialEq + fmt::Display,
    V: Deserialize<'de>,
{
    let mut entries: Vec<(K, V)> = Vec::with_capacity(map.size_hint().unwrap_or(0));
    while let Some(key) = map.next_key::<K>()? {
        if entries.iter().any(|(existing, _)| *existing == key) {
            return Err(de::Error::custom(format_args!("duplicate key \"{}\"", key)));
        }
        let value = map.next_value::<V>()?;
        entries.push((key, value));
    }
    Ok(entries)
}

fn serialize_entries<S, K, V>(serializer: S, entries: &[(K, V)]) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    K: Serialize,
    V: Serialize,
{
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (key, value) in entries {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_entries(serializer, &self.namespaces)
    }
}

impl Serialize for CatalogBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_entries(serializer, &self.locales)
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = Catalog;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping namespace names to translation objects")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        Ok(Catalog {
            namespaces: collect_unique(map)?,
        })
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

struct BundleVisitor;

impl<'de> Visitor<'de> for BundleVisitor {
    type Value = CatalogBundle;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping locale codes to catalogs")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        Ok(CatalogBundle {
            locales: collect_unique(map)?,
        })
    }
}

impl<'de> Deserialize<'de> for CatalogBundle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(BundleVisitor)
    }
}
