use std::cmp::Ordering;

use tracing::info;

use crate::document::RuleSet;
use crate::error::CollationError;
use crate::rules::parse_rules;
use crate::tailoring::Tailoring;

/// A three-way string comparison defining a collation order.
pub trait Collation {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

impl<F> Collation for F
where
    F: Fn(&str, &str) -> Ordering,
{
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}

/// Per-level weight sequences of a string. Ordering of keys is the
/// collation order of their strings, compared up to the tertiary level.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    primary: Vec<(u32, u32)>,
    secondary: Vec<u32>,
    tertiary: Vec<u32>,
}

/// Collation interpreting an ICU-style rule string on top of a code point
/// root order.
#[derive(Debug)]
pub struct TailoredCollation {
    tailoring: Tailoring,
}

impl TailoredCollation {
    pub fn from_rules(rules: &RuleSet) -> Result<Self, CollationError> {
        let parsed = parse_rules(rules.as_str())?;
        let tailoring = Tailoring::build(&parsed);
        info!(rules = parsed.len(), tailored = tailoring.len(), "built emoji collation");
        Ok(Self { tailoring })
    }

    pub fn sort_key(&self, text: &str) -> SortKey {
        let mut key = SortKey {
            primary: Vec::new(),
            secondary: Vec::new(),
            tertiary: Vec::new(),
        };

        for weights in self.tailoring.elements(text) {
            if !weights.is_primary_ignorable() {
                key.primary.push(weights.primary);
            }
            if !weights.is_primary_ignorable() || weights.secondary != 0 {
                key.secondary.push(weights.secondary);
            }
            key.tertiary.push(weights.tertiary);
        }

        key
    }
}

impl Collation for TailoredCollation {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self.sort_key(a).cmp(&self.sort_key(b))
    }
}
