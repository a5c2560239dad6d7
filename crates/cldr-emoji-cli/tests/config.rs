use std::path::PathBuf;

use clap::Parser;
use cldr_emoji_cli::args::Cli;
use cldr_emoji_cli::config::{parse_config, FileConfig, RunConfig};
use cldr_emoji_export::format::OutputFormat;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("cldr-emoji").chain(args.iter().copied())).unwrap()
}

#[test]
fn flags_resolve_with_defaults() {
    let args = cli(&["-f", "yaml", "en.xml", "de.xml"]);
    let config = RunConfig::resolve(args, FileConfig::default()).unwrap();

    assert_eq!(config.format, OutputFormat::Yaml);
    assert!(config.pretty);
    assert!(!config.fail_if_empty);
    assert_eq!(config.xml_files, vec![PathBuf::from("en.xml"), PathBuf::from("de.xml")]);
}

#[test]
fn compact_turns_pretty_off() {
    let args = cli(&["--format", "json", "--compact", "en.xml"]);
    let config = RunConfig::resolve(args, FileConfig::default()).unwrap();
    assert!(!config.pretty);
}

#[test]
fn xml_files_are_required() {
    assert!(Cli::try_parse_from(["cldr-emoji", "--format", "tsv"]).is_err());
}

#[test]
fn unknown_format_is_rejected() {
    assert!(Cli::try_parse_from(["cldr-emoji", "--format", "xml", "en.xml"]).is_err());
}

#[test]
fn format_is_required_from_somewhere() {
    assert!(RunConfig::resolve(cli(&["en.xml"]), FileConfig::default()).is_err());
}

#[test]
fn config_file_fills_missing_flags() {
    let file = parse_config(
        r#"{
            "config_version": 1,
            "format": "tsv",
            "pretty": false,
            "fail_if_empty": true,
            "ordering": "root.xml"
        }"#,
    )
    .unwrap();

    let config = RunConfig::resolve(cli(&["en.xml"]), file).unwrap();
    assert_eq!(config.format, OutputFormat::Tsv);
    assert!(!config.pretty);
    assert!(config.fail_if_empty);
    assert_eq!(config.ordering, Some(PathBuf::from("root.xml")));
    assert_eq!(config.presentation_sequences, None);
}

#[test]
fn flags_override_config_file() {
    let file =
        parse_config(r#"{"format": "tsv", "pretty": false, "ordering": "root.xml"}"#).unwrap();

    let config = RunConfig::resolve(
        cli(&["-f", "json", "--pretty", "--ordering", "emoji.xml", "en.xml"]),
        file,
    )
    .unwrap();
    assert_eq!(config.format, OutputFormat::Json);
    assert!(config.pretty);
    assert_eq!(config.ordering, Some(PathBuf::from("emoji.xml")));
}

#[test]
fn newer_config_version_is_rejected() {
    let err = parse_config(r#"{"config_version": 7}"#).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}
