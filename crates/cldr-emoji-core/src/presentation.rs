//! Text-to-emoji presentation rewriting.
//!
//! Unicode's `emoji-variation-sequences.txt` lists, for every character that
//! can render either way, the sequence that forces emoji style:
//!
//! ```text
//! 260E FE0F ; emoji style; # (1.1) BLACK TELEPHONE
//! ```
//!
//! CLDR sometimes keys such characters by the bare code point. Rewriting the
//! key to the explicit sequence (`☎` → `☎️`) makes consumers pick the emoji
//! glyph.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::models::EmojiTable;

static EMOJI_STYLE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<base>[0-9A-F]+)\s(?P<selector>[0-9A-F]+)\s+;\s+emoji style;",
        r"\s+#\s+\([.0-9]+\)\s+(?P<name>[A-Z0-9 \-]+)$",
    ))
    .expect("emoji style pattern is valid")
});

/// Rewrite of a bare code point into its emoji presentation sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationRule {
    pub old_key: String,
    pub new_key: String,
    /// Character name from the data file.
    pub description: String,
}

impl VariationRule {
    /// Parse one line of the variation sequence table.
    ///
    /// Returns `None` for anything that is not an emoji-style rule: comments,
    /// text-style rules, blank lines and hex fields that are not scalar values.
    pub fn parse_line(line: &str) -> Option<Self> {
        let caps = EMOJI_STYLE_LINE.captures(line.trim())?;
        let base = scalar_from_hex(&caps["base"])?;
        let selector = scalar_from_hex(&caps["selector"])?;

        Some(Self {
            old_key: base.to_string(),
            new_key: format!("{base}{selector}"),
            description: caps["name"].trim().to_string(),
        })
    }
}

fn scalar_from_hex(hex: &str) -> Option<char> {
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

/// Extract every emoji-style rule, in file line order.
pub fn parse_variation_sequences(text: &str) -> Vec<VariationRule> {
    let rules: Vec<_> = text.lines().filter_map(VariationRule::parse_line).collect();
    debug!(rules = rules.len(), "parsed emoji presentation sequences");
    rules
}

impl EmojiTable {
    /// Move entries keyed by a rule's bare code point under its emoji
    /// presentation sequence.
    ///
    /// Rules apply in order. When the new key already has an entry, the moved
    /// keywords replace it, so the last matching rule wins.
    pub fn normalize_presentation(mut self, rules: &[VariationRule]) -> Self {
        let mut rewritten = 0usize;
        for rule in rules {
            let Some(keywords) = self.remove(&rule.old_key) else {
                continue;
            };
            if self.contains_key(&rule.new_key) {
                warn!(
                    old = %rule.old_key,
                    new = %rule.new_key,
                    "presentation sequence replaces an existing entry"
                );
            }
            debug!(
                old = %rule.old_key,
                new = %rule.new_key,
                name = %rule.description,
                "rewrote key"
            );
            self.insert(rule.new_key.clone(), keywords);
            rewritten += 1;
        }
        info!(rewritten, rules = rules.len(), "applied presentation sequences");
        self
    }
}
