//! One conversion run: read every input, then load, aggregate, normalize,
//! order and write.

use std::fs;
use std::io::Write;
use std::path::Path;

use cldr_emoji_collation::collator::{Collation, TailoredCollation};
use cldr_emoji_collation::document::load_ordering_rules;
use cldr_emoji_collation::order::order_entries;
use cldr_emoji_core::aggregate::aggregate;
use cldr_emoji_core::annotations::load_all;
use cldr_emoji_core::error::AnnotationError;
use cldr_emoji_core::presentation::parse_variation_sequences;
use cldr_emoji_export::write_entries;
use eyre::WrapErr;
use tracing::info;

use crate::config::RunConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written { entries: usize },
    /// A document had no annotations; nothing was written.
    NoAnnotations { document: String },
}

impl Outcome {
    /// Whether the process should exit with a failure status.
    pub fn is_failure(&self, fail_if_empty: bool) -> bool {
        fail_if_empty && matches!(self, Outcome::NoAnnotations { .. })
    }
}

/// File contents keyed by the name used in errors and logs.
struct Inputs {
    documents: Vec<(String, String)>,
    sequences: Option<String>,
    ordering: Option<(String, String)>,
}

fn read(path: &Path) -> eyre::Result<(String, String)> {
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    Ok((path.display().to_string(), contents))
}

fn read_inputs(config: &RunConfig) -> eyre::Result<Inputs> {
    let documents = config
        .xml_files
        .iter()
        .map(|path| read(path))
        .collect::<eyre::Result<Vec<_>>>()?;
    let sequences = match &config.presentation_sequences {
        Some(path) => Some(read(path)?.1),
        None => None,
    };
    let ordering = match &config.ordering {
        Some(path) => Some(read(path)?),
        None => None,
    };

    Ok(Inputs {
        documents,
        sequences,
        ordering,
    })
}

/// Convert the configured documents and write the result to `out`.
///
/// A document without annotations is reported as
/// [`Outcome::NoAnnotations`] rather than an error; whether that fails the
/// process is the caller's decision.
pub fn run<W: Write>(config: &RunConfig, out: W) -> eyre::Result<Outcome> {
    let inputs = read_inputs(config)?;

    let documents = inputs
        .documents
        .iter()
        .map(|(name, xml)| (name.as_str(), xml.as_str()));
    let records = match load_all(documents) {
        Ok(records) => records,
        Err(AnnotationError::EmptyAnnotations { document }) => {
            return Ok(Outcome::NoAnnotations { document });
        }
        Err(e) => return Err(e.into()),
    };

    let mut table = aggregate(records).finalize();
    if let Some(text) = &inputs.sequences {
        table = table.normalize_presentation(&parse_variation_sequences(text));
    }

    let collation = match &inputs.ordering {
        Some((name, xml)) => Some(TailoredCollation::from_rules(&load_ordering_rules(name, xml)?)?),
        None => None,
    };
    let entries = order_entries(
        table.into_entries(),
        collation.as_ref().map(|c| c as &dyn Collation),
    );

    write_entries(config.format, &entries, config.pretty, out)?;
    info!(entries = entries.len(), format = %config.format, "wrote emoji annotations");
    Ok(Outcome::Written {
        entries: entries.len(),
    })
}
