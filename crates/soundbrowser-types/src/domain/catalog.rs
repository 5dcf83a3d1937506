use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::util::{contains_ignore_case, starts_with_ignore_case};

/// A single catalog key (e.g. `BLOCK_ANVIL_LAND`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogEntry(String);

impl CatalogEntry {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CatalogEntry {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CatalogEntry {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Ordered set of unique catalog keys.
///
/// Loaded once and never mutated afterwards; share it behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, keeping the first occurrence of duplicate keys.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let entries = keys
            .into_iter()
            .map(Into::into)
            .filter(|key| seen.insert(key.clone()))
            .map(CatalogEntry)
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key() == key)
    }

    /// Entries whose key contains `filter`, ignoring case, in catalog order.
    pub fn filtered<'a, 'f>(
        &'a self,
        filter: &'f str,
    ) -> impl Iterator<Item = &'a CatalogEntry> + use<'a, 'f> {
        self.entries
            .iter()
            .filter(move |e| contains_ignore_case(e.key(), filter))
    }

    /// Keys starting with `partial`, ignoring case, in catalog order.
    pub fn suggest(&self, partial: &str) -> Vec<&str> {
        self.entries
            .iter()
            .map(CatalogEntry::key)
            .filter(|key| starts_with_ignore_case(key, partial))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let catalog = Catalog::from_keys(["B", "A", "B", "C"]);
        let keys: Vec<_> = catalog.entries().iter().map(CatalogEntry::key).collect();
        assert_eq!(keys, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_ordered() {
        let catalog = Catalog::from_keys(["AMBIENT_CAVE", "BLOCK_ANVIL", "BLOCK_BELL_USE"]);
        let keys: Vec<_> = catalog.filtered("block").map(CatalogEntry::key).collect();
        assert_eq!(keys, vec!["BLOCK_ANVIL", "BLOCK_BELL_USE"]);
    }

    #[test]
    fn test_suggest_is_prefix_based() {
        let catalog = Catalog::from_keys(["AMBIENT_CAVE", "BLOCK_ANVIL", "ENTITY_BLOCK"]);
        assert_eq!(catalog.suggest("bl"), vec!["BLOCK_ANVIL"]);
        assert_eq!(catalog.suggest("").len(), 3);
    }
}
