//! Approximate root order for characters no rule places.
//!
//! Characters fall into the root's major groups by general category and sort
//! by code point inside a group.

use std::sync::LazyLock;

use regex::RegexSet;

/// Major groups of the root order, in sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum RootGroup {
    Whitespace,
    Punctuation,
    Symbol,
    Currency,
    Digit,
    Other,
}

/// Tried in order, so currency wins over the wider symbol class.
const CATEGORIES: [(&str, RootGroup); 5] = [
    (r"^[\p{Z}\p{Cc}]$", RootGroup::Whitespace),
    (r"^\p{P}$", RootGroup::Punctuation),
    (r"^\p{Sc}$", RootGroup::Currency),
    (r"^\p{S}$", RootGroup::Symbol),
    (r"^\p{N}$", RootGroup::Digit),
];

static CATEGORY_SET: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new(CATEGORIES.iter().map(|(pattern, _)| *pattern))
        .expect("category patterns are valid")
});

/// In a reset target, marks the start of the next character's group.
const GROUP_START: char = '\u{FDD1}';

fn group_of(c: char) -> RootGroup {
    let mut buf = [0u8; 4];
    CATEGORY_SET
        .matches(c.encode_utf8(&mut buf))
        .iter()
        .next()
        .map_or(RootGroup::Other, |i| CATEGORIES[i].1)
}

/// Root position of `text`: the group of its first character in the top
/// byte, the code point plus one below it. `\u{FDD1}X` maps to the start of
/// `X`'s group.
pub(crate) fn root_key(text: &str) -> u32 {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(GROUP_START), Some(c)) => group_bits(c),
        (Some(c), _) => group_bits(c) | (u32::from(c) + 1),
        (None, _) => 0,
    }
}

fn group_bits(c: char) -> u32 {
    (group_of(c) as u32) << 24
}
