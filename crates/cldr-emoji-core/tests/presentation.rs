use cldr_emoji_core::models::EmojiTable;
use cldr_emoji_core::presentation::{parse_variation_sequences, VariationRule};

const SEQUENCES: &str = "\
# emoji-variation-sequences.txt
# Date: 2023-02-01

0023 FE0E  ; text style;  # (1.1) NUMBER SIGN
0023 FE0F  ; emoji style; # (1.1) NUMBER SIGN
260E FE0E  ; text style;  # (1.1) BLACK TELEPHONE
260E FE0F  ; emoji style; # (1.1) BLACK TELEPHONE
2194 FE0F  ; emoji style; # (1.1) LEFT RIGHT ARROW
1F321 FE0F ; emoji style; # (7.0) THERMOMETER
D800 FE0F  ; emoji style; # (1.1) NOT A SCALAR
";

fn table(entries: &[(&str, &[&str])]) -> EmojiTable {
    entries
        .iter()
        .map(|(key, keywords)| {
            (
                key.to_string(),
                keywords.iter().map(|k| k.to_string()).collect(),
            )
        })
        .collect()
}

#[test]
fn only_emoji_style_lines_are_rules() {
    let rules = parse_variation_sequences(SEQUENCES);

    let olds: Vec<_> = rules.iter().map(|r| r.old_key.as_str()).collect();
    assert_eq!(olds, vec!["#", "☎", "↔", "🌡"]);
    assert_eq!(rules[1].new_key, "☎\u{FE0F}");
    assert_eq!(rules[1].description, "BLACK TELEPHONE");
}

#[test]
fn line_with_lowercase_description_is_ignored() {
    assert_eq!(
        VariationRule::parse_line("260E FE0F ; emoji style; # (1.1) black telephone"),
        None
    );
}

#[test]
fn telephone_gets_emoji_presentation() {
    let rules = parse_variation_sequences(SEQUENCES);

    let normalized = table(&[("☎", &["telephone"])]).normalize_presentation(&rules);
    assert_eq!(normalized.get("☎\u{FE0F}").unwrap(), ["telephone"]);
    assert!(!normalized.contains_key("☎"));
}

#[test]
fn no_matching_rule_leaves_table_unchanged() {
    let rules = parse_variation_sequences(SEQUENCES);
    let before = table(&[("😀", &["grinning"]), ("🙂", &["happy", "slightly smiling"])]);

    let after = before.clone().normalize_presentation(&rules);
    assert_eq!(before, after);
}

#[test]
fn no_rules_is_a_pass_through() {
    let before = table(&[("☎", &["telephone"])]);
    assert_eq!(before.clone().normalize_presentation(&[]), before);
}

#[test]
fn last_rule_wins_on_collision() {
    let rules = vec![
        VariationRule {
            old_key: "a".to_string(),
            new_key: "c".to_string(),
            description: "FIRST".to_string(),
        },
        VariationRule {
            old_key: "b".to_string(),
            new_key: "c".to_string(),
            description: "SECOND".to_string(),
        },
    ];

    let normalized = table(&[("a", &["from a"]), ("b", &["from b"]), ("c", &["original"])])
        .normalize_presentation(&rules);
    assert_eq!(normalized.len(), 1);
    assert_eq!(normalized.get("c").unwrap(), ["from b"]);
}
