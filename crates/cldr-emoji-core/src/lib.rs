//! cldr-emoji-core
//!
//! Annotation loading, keyword aggregation and presentation normalization.
//! No collation or output formatting here: this is the shared vocabulary of
//! the converter pipeline.

pub mod aggregate;
pub mod annotations;
pub mod error;
pub mod models;
pub mod presentation;
