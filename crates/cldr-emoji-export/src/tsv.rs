use std::io::Write;

use cldr_emoji_core::models::EmojiEntry;

use crate::error::ExportError;

/// One line per entry: the key, a tab, then keywords joined with `", "`.
pub fn write_tsv<W: Write>(entries: &[EmojiEntry], mut out: W) -> Result<(), ExportError> {
    for entry in entries {
        writeln!(out, "{}\t{}", entry.key, entry.keywords.join(", "))?;
    }
    Ok(())
}
