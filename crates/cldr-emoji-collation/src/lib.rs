//! cldr-emoji-collation
//!
//! Emoji ordering: loads ICU-style collation rules from CLDR ordering data,
//! interprets them into a tailored collation and sorts entries with the
//! skin-tone modifier tie-break applied on top.

pub mod collator;
pub mod document;
pub mod error;
pub mod order;
mod root;
pub mod rules;
mod tailoring;
