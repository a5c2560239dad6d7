use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use crate::models::{AnnotationRecord, EmojiTable};

/// Keyword sets keyed by code point sequence, accumulated across documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSets {
    sets: BTreeMap<String, BTreeSet<String>>,
}

impl KeywordSets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.sets.get(key)
    }

    /// Union the record's descriptors into the set for its key.
    ///
    /// A record without descriptors creates no entry.
    pub fn add(&mut self, record: AnnotationRecord) {
        if record.descriptors.is_empty() {
            debug!(key = %record.codepoints, "skipping annotation without descriptors");
            return;
        }
        self.sets
            .entry(record.codepoints)
            .or_default()
            .extend(record.descriptors);
    }

    /// Convert every keyword set into a sorted keyword list.
    pub fn finalize(self) -> EmojiTable {
        self.sets
            .into_iter()
            .map(|(key, keywords)| (key, keywords.into_iter().collect()))
            .collect()
    }
}

impl Extend<AnnotationRecord> for KeywordSets {
    fn extend<I: IntoIterator<Item = AnnotationRecord>>(&mut self, iter: I) {
        for record in iter {
            self.add(record);
        }
    }
}

/// Merge records sharing the same key into one deduplicated keyword set.
pub fn aggregate(records: impl IntoIterator<Item = AnnotationRecord>) -> KeywordSets {
    let mut sets = KeywordSets::new();
    sets.extend(records);
    info!(emoji = sets.len(), "aggregated annotations");
    sets
}
