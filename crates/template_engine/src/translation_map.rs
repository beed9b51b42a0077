//! Flat source-string to target-string translation map

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An exact-match translation dictionary.
///
/// Keys are matched verbatim: no trimming, no case folding, no fuzzy
/// lookup. Registering the same source string twice keeps the later entry.
/// Identical source strings used in different blocks share one target
/// string; when two contexts genuinely need different renderings the
/// authoring copy itself has to differ.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationMap {
    entries: HashMap<String, String>,
}

impl TranslationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a translation. Later registrations win on duplicate keys.
    pub fn insert(&mut self, source: impl Into<String>, target: impl Into<String>) {
        self.entries.insert(source.into(), target.into());
    }

    /// Look up the exact source string
    pub fn lookup(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    pub fn contains(&self, source: &str) -> bool {
        self.entries.contains_key(source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a map from source/target pairs
    pub fn from_pairs<S, T>(pairs: impl IntoIterator<Item = (S, T)>) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        let mut map = Self::new();
        for (source, target) in pairs {
            map.insert(source, target);
        }
        map
    }

    /// Fold another map into this one; the other map's entries win
    pub fn extend(&mut self, other: TranslationMap) {
        self.entries.extend(other.entries);
    }
}

impl<S: Into<String>, T: Into<String>> FromIterator<(S, T)> for TranslationMap {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
