use std::fs;
use std::path::PathBuf;

use cldr_emoji_cli::config::RunConfig;
use cldr_emoji_cli::pipeline::{run, Outcome};
use cldr_emoji_export::format::OutputFormat;
use tempfile::TempDir;

const EN: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<!DOCTYPE ldml SYSTEM "../../common/dtd/ldml.dtd">
<ldml>
    <annotations>
        <annotation cp="😀">grinning | happy</annotation>
        <annotation cp="🏿">dark skin tone | type 6</annotation>
        <annotation cp="☎">phone | telephone</annotation>
        <annotation cp="😃">face | smile</annotation>
        <annotation cp="🏻">light skin tone | type 1–2</annotation>
    </annotations>
</ldml>
"#;

const EN_EXTRA: &str = r#"<ldml>
    <annotations>
        <annotation cp="😀">happy | joy</annotation>
    </annotations>
</ldml>
"#;

const SEQUENCES: &str = "\
260E FE0E ; text style;  # (1.1) BLACK TELEPHONE
260E FE0F ; emoji style; # (1.1) BLACK TELEPHONE
";

const ORDERING: &str = r#"<ldml>
    <collations>
        <collation type="emoji">
            <cr><![CDATA[
                # emoji order
                &[last primary ignorable]<<*🏻🏼🏽🏾🏿
                &[before 1]\uFDD1€
                <*😃😀
                <\u260E\uFE0F
            ]]></cr>
        </collation>
    </collations>
</ldml>
"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }
}

fn config(format: OutputFormat, xml_files: Vec<PathBuf>) -> RunConfig {
    RunConfig {
        format,
        pretty: true,
        fail_if_empty: false,
        presentation_sequences: None,
        ordering: None,
        xml_files,
    }
}

fn convert(config: &RunConfig) -> (Outcome, String) {
    let mut out = Vec::new();
    let outcome = run(config, &mut out).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

#[test]
fn documents_merge_into_one_entry() {
    let fx = Fixture::new();
    let config = config(
        OutputFormat::Tsv,
        vec![fx.file("en.xml", EN), fx.file("en_extra.xml", EN_EXTRA)],
    );

    let (outcome, output) = convert(&config);
    assert_eq!(outcome, Outcome::Written { entries: 5 });
    assert!(output.contains("😀\tgrinning, happy, joy\n"));
}

#[test]
fn without_rules_output_is_in_code_point_order() {
    let fx = Fixture::new();
    let config = config(OutputFormat::Tsv, vec![fx.file("en.xml", EN)]);

    let (_, output) = convert(&config);
    let keys: Vec<_> = output.lines().map(|l| l.split('\t').next().unwrap()).collect();
    assert_eq!(keys, vec!["☎", "🏻", "🏿", "😀", "😃"]);
}

#[test]
fn full_pipeline_normalizes_and_collates() {
    let fx = Fixture::new();
    let mut config = config(OutputFormat::Tsv, vec![fx.file("en.xml", EN)]);
    config.presentation_sequences = Some(fx.file("emoji-variation-sequences.txt", SEQUENCES));
    config.ordering = Some(fx.file("root.xml", ORDERING));

    let (_, output) = convert(&config);
    assert_eq!(
        output,
        "😃\tface, smile\n\
         😀\tgrinning, happy\n\
         ☎\u{FE0F}\tphone, telephone\n\
         🏻\tlight skin tone, type 1–2\n\
         🏿\tdark skin tone, type 6\n"
    );
}

#[test]
fn runs_are_deterministic() {
    let fx = Fixture::new();
    let inputs = vec![fx.file("en.xml", EN), fx.file("extra.xml", EN_EXTRA)];
    let mut config = config(OutputFormat::Json, inputs);
    config.ordering = Some(fx.file("root.xml", ORDERING));

    assert_eq!(convert(&config).1, convert(&config).1);
}

#[test]
fn empty_document_stops_before_output() {
    let fx = Fixture::new();
    let empty = fx.file("empty.xml", "<ldml><identity/></ldml>");
    let mut config = config(OutputFormat::Json, vec![fx.file("en.xml", EN), empty.clone()]);
    config.fail_if_empty = true;

    let (outcome, output) = convert(&config);
    assert_eq!(
        outcome,
        Outcome::NoAnnotations {
            document: empty.display().to_string()
        }
    );
    assert!(output.is_empty());
    assert!(outcome.is_failure(true));
    assert!(!outcome.is_failure(false));
}

#[test]
fn written_outcome_never_fails() {
    assert!(!Outcome::Written { entries: 0 }.is_failure(true));
}

#[test]
fn invalid_ordering_document_aborts_the_run() {
    let fx = Fixture::new();
    let mut config = config(OutputFormat::Tsv, vec![fx.file("en.xml", EN)]);
    config.ordering = Some(fx.file("root.xml", "<ldml><collations/></ldml>"));

    let mut out = Vec::new();
    let err = run(&config, &mut out).unwrap_err();
    assert!(err.to_string().contains("not usable ordering data"));
    assert!(out.is_empty());
}

#[test]
fn missing_input_file_names_the_path() {
    let fx = Fixture::new();
    let missing = fx.dir.path().join("missing.xml");
    let config = config(OutputFormat::Tsv, vec![missing.clone()]);

    let err = run(&config, Vec::new()).unwrap_err();
    assert!(err.to_string().contains(&missing.display().to_string()));
}
