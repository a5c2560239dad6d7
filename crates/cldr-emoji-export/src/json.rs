use std::io::Write;

use cldr_emoji_core::models::EmojiEntry;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;

use crate::error::ExportError;

/// Serializes entries as one JSON object, keys in slice order.
struct EntryMap<'a>(&'a [EmojiEntry]);

impl Serialize for EntryMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(&entry.key, &entry.keywords)?;
        }
        map.end()
    }
}

/// Write `{"key": ["kw", …], …}`. Pretty output indents by four spaces.
pub fn write_json<W: Write>(
    entries: &[EmojiEntry],
    pretty: bool,
    mut out: W,
) -> Result<(), ExportError> {
    if pretty {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        EntryMap(entries).serialize(&mut serializer)?;
    } else {
        serde_json::to_writer(&mut out, &EntryMap(entries))?;
    }
    out.write_all(b"\n")?;
    Ok(())
}
