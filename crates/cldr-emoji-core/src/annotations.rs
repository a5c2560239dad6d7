//! Extraction of annotation records from CLDR annotation documents.
//!
//! Documents are expected to look like
//! `<ldml><annotations><annotation cp="😀">grinning | face</annotation>…`.
//! Both plain and `type="tts"` annotations are returned; merging them is the
//! aggregator's job.

use roxmltree::{Document, Node, ParsingOptions};
use tracing::debug;

use crate::error::AnnotationError;
use crate::models::AnnotationRecord;

/// Parse one annotation document and return its records in document order.
///
/// `document` identifies the source (usually its path) in errors and logs.
pub fn load_annotations(
    document: &str,
    xml: &str,
) -> Result<Vec<AnnotationRecord>, AnnotationError> {
    // CLDR files carry a DOCTYPE pointing at ldml.dtd.
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options).map_err(|source| AnnotationError::Xml {
        document: document.to_string(),
        source,
    })?;

    let root = doc.root_element();
    let annotations: Vec<Node> = if root.has_tag_name("ldml") {
        root.children()
            .filter(|n| n.has_tag_name("annotations"))
            .flat_map(|container| container.children().filter(|n| n.has_tag_name("annotation")))
            .collect()
    } else {
        Vec::new()
    };

    if annotations.is_empty() {
        return Err(AnnotationError::EmptyAnnotations {
            document: document.to_string(),
        });
    }

    let records = annotations
        .into_iter()
        .map(|node| record_from_node(document, &doc, node))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(document, records = records.len(), "loaded annotations");
    Ok(records)
}

/// Load every document in order. The first failing document aborts the load.
pub fn load_all<'a, I>(documents: I) -> Result<Vec<AnnotationRecord>, AnnotationError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut records = Vec::new();
    for (document, xml) in documents {
        records.extend(load_annotations(document, xml)?);
    }
    Ok(records)
}

fn record_from_node(
    document: &str,
    doc: &Document,
    node: Node,
) -> Result<AnnotationRecord, AnnotationError> {
    let malformed = |reason: &str| AnnotationError::MalformedAnnotation {
        document: document.to_string(),
        line: doc.text_pos_at(node.range().start).row,
        reason: reason.to_string(),
    };

    let codepoints = node
        .attribute("cp")
        .filter(|cp| !cp.is_empty())
        .ok_or_else(|| malformed("missing `cp` attribute"))?;

    let record = AnnotationRecord::from_text(codepoints, node.text().unwrap_or_default());
    if record.descriptors.is_empty() {
        return Err(malformed("no descriptor text"));
    }
    Ok(record)
}
