use std::path::{Path, PathBuf};

use cldr_emoji_export::format::OutputFormat;
use serde::{Deserialize, Serialize};

use crate::args::Cli;

/// Current config version. Bump this when changing the file's shape.
const CURRENT_VERSION: u32 = 1;

/// Settings read from a `--config` JSON file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Schema version. Missing or 0 = pre-versioned config, same shape as v1.
    pub config_version: u32,
    pub format: Option<OutputFormat>,
    pub pretty: Option<bool>,
    pub fail_if_empty: Option<bool>,
    pub presentation_sequences: Option<PathBuf>,
    pub ordering: Option<PathBuf>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub format: OutputFormat,
    pub pretty: bool,
    pub fail_if_empty: bool,
    pub presentation_sequences: Option<PathBuf>,
    pub ordering: Option<PathBuf>,
    pub xml_files: Vec<PathBuf>,
}

pub fn load_config(path: &Path) -> eyre::Result<FileConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> eyre::Result<FileConfig> {
    // Check the version on the raw value so newer files fail with a clear
    // message instead of a field error.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);
    if version > u64::from(CURRENT_VERSION) {
        return Err(eyre::eyre!(
            "config_version {version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    let config: FileConfig = serde_json::from_value(json)?;
    Ok(config)
}

impl RunConfig {
    /// Merge command-line flags over the config file, if one was given.
    pub fn from_cli(cli: Cli) -> eyre::Result<Self> {
        let file = match &cli.config {
            Some(path) => load_config(path)?,
            None => FileConfig::default(),
        };
        Self::resolve(cli, file)
    }

    pub fn resolve(cli: Cli, file: FileConfig) -> eyre::Result<Self> {
        let format = cli
            .format
            .map(|f| f.as_format())
            .or(file.format)
            .ok_or_else(|| {
                eyre::eyre!("no output format; pass --format or set `format` in the config file")
            })?;

        let config = RunConfig {
            format,
            pretty: cli.pretty_flag().or(file.pretty).unwrap_or(true),
            fail_if_empty: cli.fail_if_empty || file.fail_if_empty.unwrap_or(false),
            presentation_sequences: cli.presentation_sequences.or(file.presentation_sequences),
            ordering: cli.ordering.or(file.ordering),
            xml_files: cli.xml_files,
        };
        tracing::debug!(config = ?config, "resolved run configuration");
        Ok(config)
    }
}
