use std::cmp::Ordering;

use cldr_emoji_core::models::EmojiEntry;
use tracing::debug;

use crate::collator::Collation;

/// The Fitzpatrick modifiers U+1F3FB (light) through U+1F3FF (dark).
pub const SKIN_TONE_MODIFIERS: [char; 5] =
    ['\u{1F3FB}', '\u{1F3FC}', '\u{1F3FD}', '\u{1F3FE}', '\u{1F3FF}'];

/// True when `key` is exactly one skin-tone modifier.
pub fn is_skin_tone_modifier(key: &str) -> bool {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => SKIN_TONE_MODIFIERS.contains(&c),
        _ => false,
    }
}

/// Compare two keys under `collation`, moving bare skin-tone modifiers after
/// everything else.
///
/// CLDR emoji rules make the modifiers primary-ignorable, which on its own
/// would sort them to the very front.
pub fn compare_keys(collation: &dyn Collation, a: &str, b: &str) -> Ordering {
    match (is_skin_tone_modifier(a), is_skin_tone_modifier(b)) {
        (true, true) => a.cmp(b),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => collation.compare(a, b),
    }
}

/// Sort entries for output. Without a collation, keys sort by code point.
///
/// The sort is stable: entries comparing equal keep their input order.
pub fn order_entries(
    mut entries: Vec<EmojiEntry>,
    collation: Option<&dyn Collation>,
) -> Vec<EmojiEntry> {
    match collation {
        Some(collation) => entries.sort_by(|a, b| compare_keys(collation, &a.key, &b.key)),
        None => entries.sort_by(|a, b| a.key.cmp(&b.key)),
    }
    debug!(entries = entries.len(), collated = collation.is_some(), "ordered entries");
    entries
}
