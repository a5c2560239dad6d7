//! Block-style YAML mapping of key to keyword sequence.
//!
//! ```yaml
//! 😀:
//!   - face
//!   - grin
//! ```
//!
//! Compact output puts the sequence dash in column 0; pretty output indents
//! it by two.

use std::borrow::Cow;
use std::io::Write;

use cldr_emoji_core::models::EmojiEntry;

use crate::error::ExportError;

const RESERVED: &[&str] = &["true", "false", "yes", "no", "on", "off", "y", "n", "null", "~"];

pub fn write_yaml<W: Write>(
    entries: &[EmojiEntry],
    pretty: bool,
    mut out: W,
) -> Result<(), ExportError> {
    if entries.is_empty() {
        writeln!(out, "{{}}")?;
        return Ok(());
    }

    let dash = if pretty { "  - " } else { "- " };
    for entry in entries {
        let key = scalar(&entry.key);
        if entry.keywords.is_empty() {
            writeln!(out, "{key}: []")?;
            continue;
        }
        writeln!(out, "{key}:")?;
        for keyword in &entry.keywords {
            writeln!(out, "{dash}{}", scalar(keyword))?;
        }
    }
    Ok(())
}

/// Render `s` as a plain scalar when YAML would read it back unchanged,
/// quoted otherwise.
pub fn scalar(s: &str) -> Cow<'_, str> {
    if s.chars().any(|c| c.is_control() || is_yaml_break(c)) {
        // JSON strings are valid double-quoted YAML scalars, but JSON leaves
        // the separators and BOM raw.
        let quoted = serde_json::Value::String(s.to_string())
            .to_string()
            .replace('\u{2028}', "\\L")
            .replace('\u{2029}', "\\P")
            .replace('\u{FEFF}', "\\uFEFF");
        return Cow::Owned(quoted);
    }
    if needs_quotes(s) {
        return Cow::Owned(format!("'{}'", s.replace('\'', "''")));
    }
    Cow::Borrowed(s)
}

/// Line and paragraph separators, which YAML 1.1 reads as line breaks, and
/// the byte order mark.
fn is_yaml_break(c: char) -> bool {
    matches!(c, '\u{2028}' | '\u{2029}' | '\u{FEFF}')
}

fn needs_quotes(s: &str) -> bool {
    let Some(first) = s.chars().next() else {
        return true;
    };

    "-?:,[]{}#&*!|>'\"%@`".contains(first)
        || first.is_whitespace()
        || s.ends_with(char::is_whitespace)
        || s.ends_with(':')
        || s.contains(": ")
        || s.contains(" #")
        || RESERVED.iter().any(|word| word.eq_ignore_ascii_case(s))
        || looks_numeric(s)
}

fn looks_numeric(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    s.parse::<f64>().is_ok()
        || lower.starts_with("0x")
        || lower.starts_with("0o")
        || matches!(lower.trim_start_matches(['+', '-']), ".inf" | ".nan")
}
