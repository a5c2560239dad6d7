//! cldr-emoji-cli
//!
//! Command-line front end: argument parsing, configuration, file reading and
//! the run itself. The `cldr-emoji` binary is a thin wrapper around
//! [`pipeline::run`].

pub mod args;
pub mod config;
pub mod pipeline;
