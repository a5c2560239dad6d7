use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One `annotation` element as found in a CLDR annotation document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    /// The `cp` attribute: one or more code points forming a single cluster.
    pub codepoints: String,
    /// Descriptor keywords, split on `|` and trimmed.
    pub descriptors: Vec<String>,
}

impl AnnotationRecord {
    /// Build a record from the raw pipe-delimited text payload.
    ///
    /// Pieces that are empty after trimming are dropped.
    pub fn from_text(codepoints: impl Into<String>, text: &str) -> Self {
        let descriptors = text
            .split('|')
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            codepoints: codepoints.into(),
            descriptors,
        }
    }
}

/// A single emoji and its keywords, as handed to the output writers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiEntry {
    pub key: String,
    pub keywords: Vec<String>,
}

impl EmojiEntry {
    pub fn new(key: impl Into<String>, keywords: Vec<String>) -> Self {
        Self {
            key: key.into(),
            keywords,
        }
    }
}

/// Finalized emoji table: unique keys, each with a sorted keyword list.
///
/// Iteration is in raw key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl EmojiTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert keywords under `key`, replacing any previous entry.
    ///
    /// Keywords are sorted and deduplicated on the way in.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        mut keywords: Vec<String>,
    ) -> Option<Vec<String>> {
        keywords.sort();
        keywords.dedup();
        self.entries.insert(key.into(), keywords)
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.entries.remove(key)
    }

    /// Freeze the table into entries, in raw key order.
    pub fn into_entries(self) -> Vec<EmojiEntry> {
        self.entries
            .into_iter()
            .map(|(key, keywords)| EmojiEntry { key, keywords })
            .collect()
    }
}

impl FromIterator<(String, Vec<String>)> for EmojiTable {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let mut table = EmojiTable::new();
        for (key, keywords) in iter {
            table.insert(key, keywords);
        }
        table
    }
}
