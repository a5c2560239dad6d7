//! Ordering-rule documents.
//!
//! CLDR ships emoji ordering as an ICU rule string inside a `<collation>`
//! element:
//!
//! ```xml
//! <collation type="emoji">
//!     <cr><![CDATA[
//!         # START AUTOGENERATED EMOJI ORDER
//!         &[last primary ignorable]<<*🏻🏼🏽🏾🏿
//!         &[before 1]\uFDD1€
//!         <*😀😃😄😁
//!     ]]></cr>
//! </collation>
//! ```

use roxmltree::{Document, ParsingOptions};
use tracing::debug;

use crate::error::CollationError;

/// An assembled collation rule string, comments removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet(String);

impl RuleSet {
    pub fn new(rules: impl Into<String>) -> Self {
        Self(rules.into())
    }

    /// Join the lines of a `cr` block into one rule string.
    ///
    /// Lines whose first non-blank character is `#` are dropped, the rest are
    /// trimmed and joined with single spaces.
    pub fn from_cr_text(text: &str) -> Self {
        let rules = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join(" ");
        Self(rules)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Extract the rule set from an ordering document.
///
/// The first `collation` element with a `cr` child is used. A document that
/// does not parse, has no such element, or whose rules are all comments is
/// rejected.
pub fn load_ordering_rules(document: &str, xml: &str) -> Result<RuleSet, CollationError> {
    let invalid = |reason: String| CollationError::InvalidOrderingData {
        document: document.to_string(),
        reason,
    };

    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options).map_err(|e| invalid(e.to_string()))?;

    let cr = doc
        .descendants()
        .filter(|n| n.has_tag_name("collation"))
        .find_map(|collation| collation.children().find(|n| n.has_tag_name("cr")))
        .ok_or_else(|| invalid("no <collation><cr> rule container".to_string()))?;

    let rules = RuleSet::from_cr_text(cr.text().unwrap_or_default());
    if rules.is_empty() {
        return Err(invalid("rule container holds no rules".to_string()));
    }

    debug!(document, chars = rules.as_str().chars().count(), "loaded ordering rules");
    Ok(rules)
}
