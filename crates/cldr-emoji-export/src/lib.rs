//! cldr-emoji-export
//!
//! TSV, JSON and YAML writers for ordered emoji entries. Writers emit entries
//! in the order given and never re-sort.

pub mod error;
pub mod format;
pub mod json;
pub mod tsv;
pub mod yaml;

use std::io::Write;

use cldr_emoji_core::models::EmojiEntry;
use tracing::debug;

use crate::error::ExportError;
use crate::format::OutputFormat;

/// Render `entries` in `format` to `out`.
pub fn write_entries<W: Write>(
    format: OutputFormat,
    entries: &[EmojiEntry],
    pretty: bool,
    out: W,
) -> Result<(), ExportError> {
    debug!(%format, pretty, entries = entries.len(), "writing entries");
    match format {
        OutputFormat::Tsv => tsv::write_tsv(entries, out),
        OutputFormat::Json => json::write_json(entries, pretty, out),
        OutputFormat::Yaml => yaml::write_yaml(entries, pretty, out),
    }
}
