use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use cldr_emoji_cli::args::Cli;
use cldr_emoji_cli::config::RunConfig;
use cldr_emoji_cli::pipeline::{self, Outcome};

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    // stdout carries the converted data, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = RunConfig::from_cli(Cli::parse())?;

    let mut out = BufWriter::new(io::stdout().lock());
    let outcome = pipeline::run(&config, &mut out)?;
    match &outcome {
        Outcome::Written { .. } => out.flush()?,
        Outcome::NoAnnotations { document } => {
            tracing::warn!("File {document} included no annotations. Exiting.");
        }
    }

    if outcome.is_failure(config.fail_if_empty) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
