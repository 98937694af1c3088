//! Translation trees: ordered, nested key → string mappings.

use std::fmt;

use anyhow::{Result, bail};
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::collect_unique;

/// A value inside a translation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationNode {
    /// A translation string. `{{placeholder}}` tokens are kept as-is.
    Text(String),
    /// A nested group of keys.
    Tree(TranslationTree),
}

impl TranslationNode {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TranslationNode::Text(text) => Some(text),
            TranslationNode::Tree(_) => None,
        }
    }

    pub fn as_tree(&self) -> Option<&TranslationTree> {
        match self {
            TranslationNode::Text(_) => None,
            TranslationNode::Tree(tree) => Some(tree),
        }
    }
}

impl From<&str> for TranslationNode {
    fn from(text: &str) -> Self {
        TranslationNode::Text(text.to_string())
    }
}

impl From<String> for TranslationNode {
    fn from(text: String) -> Self {
        TranslationNode::Text(text)
    }
}

impl From<TranslationTree> for TranslationNode {
    fn from(tree: TranslationTree) -> Self {
        TranslationNode::Tree(tree)
    }
}

/// Ordered mapping from keys to [`TranslationNode`]s.
///
/// Insertion order is preserved through serialization, and keys are unique
/// at every level. Decoding rejects duplicate keys and any leaf that is not
/// a string, so a tree that exists is always well-formed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTree {
    entries: Vec<(String, TranslationNode)>,
}

impl TranslationTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Fails if `key` is already present at this level.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        node: impl Into<TranslationNode>,
    ) -> Result<()> {
        let key = key.into();
        if self.get(&key).is_some() {
            bail!("duplicate key \"{}\"", key);
        }
        self.entries.push((key, node.into()));
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&TranslationNode> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TranslationNode)> {
        self.entries.iter().map(|(k, node)| (k.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All leaf strings as `(key path, value)`, depth-first in insertion
    /// order.
    ///
    /// Paths are kept as segments: a key containing `.` such as `"a.b"` is a
    /// different leaf than `b` nested under `a`.
    pub fn leaves(&self) -> Vec<(Vec<&str>, &str)> {
        let mut out = Vec::new();
        collect_leaves(self, &mut Vec::new(), &mut out);
        out
    }

    /// Copy of this tree with a text entry placed first.
    ///
    /// An existing entry under the same key is dropped.
    pub fn with_leading_text(&self, key: &str, text: impl Into<String>) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push((key.to_string(), TranslationNode::Text(text.into())));
        entries.extend(self.entries.iter().filter(|(k, _)| k != key).cloned());
        Self { entries }
    }
}

fn collect_leaves<'a>(
    tree: &'a TranslationTree,
    path: &mut Vec<&'a str>,
    out: &mut Vec<(Vec<&'a str>, &'a str)>,
) {
    for (key, node) in tree.iter() {
        path.push(key);
        match node {
            TranslationNode::Text(text) => out.push((path.clone(), text.as_str())),
            TranslationNode::Tree(child) => collect_leaves(child, path, out),
        }
        path.pop();
    }
}

impl Serialize for TranslationNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TranslationNode::Text(text) => serializer.serialize_str(text),
            TranslationNode::Tree(tree) => tree.serialize(serializer),
        }
    }
}

impl Serialize for TranslationTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, node) in &self.entries {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = TranslationNode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a translation string or nested translation object")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(TranslationNode::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(TranslationNode::Text(v))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        Ok(TranslationNode::Tree(TranslationTree {
            entries: collect_unique(map)?,
        }))
    }
}

impl<'de> Deserialize<'de> for TranslationNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct TreeVisitor;

impl<'de> Visitor<'de> for TreeVisitor {
    type Value = TranslationTree;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a translation object")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        Ok(TranslationTree {
            entries: collect_unique(map)?,
        })
    }
}

impl<'de> Deserialize<'de> for TranslationTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TreeVisitor)
    }
}
