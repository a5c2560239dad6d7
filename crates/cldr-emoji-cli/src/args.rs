use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use cldr_emoji_export::format::OutputFormat;

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum FormatArg {
    Tsv,
    Json,
    Yaml,
}

impl FormatArg {
    pub fn as_format(self) -> OutputFormat {
        match self {
            FormatArg::Tsv => OutputFormat::Tsv,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

/// Convert Unicode CLDR annotation XML documents (emoji and their
/// descriptors) into tsv, json or yaml, sorted at all levels.
#[derive(Debug, Clone, Parser)]
#[command(name = "cldr-emoji", version)]
pub struct Cli {
    /// Format to output
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<FormatArg>,

    /// Pretty print (the default)
    #[arg(long, short = 'p', overrides_with = "compact")]
    pub pretty: bool,

    /// Disable pretty printing
    #[arg(long, overrides_with = "pretty")]
    pub compact: bool,

    /// Fail with exit status 1 if a document contains no annotations
    #[arg(long = "failifempty")]
    pub fail_if_empty: bool,

    /// `emoji-variation-sequences.txt` from the Unicode data matching the CLDR
    /// release. Rewrites text-presentation keys to their emoji presentation
    /// (☎ becomes ☎️).
    #[arg(long = "presentation-sequences", value_name = "FILE")]
    pub presentation_sequences: Option<PathBuf>,

    /// CLDR collation document holding the emoji ordering rules
    #[arg(long, value_name = "FILE")]
    pub ordering: Option<PathBuf>,

    /// JSON configuration file; command-line flags take precedence
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// CLDR annotation XML files
    #[arg(required = true, value_name = "XMLFILES")]
    pub xml_files: Vec<PathBuf>,
}

impl Cli {
    /// `Some` only when pretty printing was chosen on the command line.
    pub fn pretty_flag(&self) -> Option<bool> {
        match (self.pretty, self.compact) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }
}
