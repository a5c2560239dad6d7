use cldr_emoji_core::aggregate::{aggregate, KeywordSets};
use cldr_emoji_core::models::AnnotationRecord;

#[test]
fn descriptor_text_is_split_and_trimmed() {
    let record = AnnotationRecord::from_text("🙂", "  happy |slightly smiling  ");
    assert_eq!(record.descriptors, vec!["happy", "slightly smiling"]);
}

#[test]
fn empty_pieces_are_dropped() {
    let record = AnnotationRecord::from_text("🙂", "happy || | smile |");
    assert_eq!(record.descriptors, vec!["happy", "smile"]);
}

#[test]
fn keywords_are_sorted_after_finalize() {
    let record = AnnotationRecord::from_text("🙂", "slightly smiling | happy");
    let table = aggregate([record]).finalize();
    assert_eq!(table.get("🙂").unwrap(), ["happy", "slightly smiling"]);
}

#[test]
fn records_with_same_key_merge() {
    let table = aggregate([
        AnnotationRecord::from_text("😀", "grinning | happy"),
        AnnotationRecord::from_text("😀", "happy | joy"),
    ])
    .finalize();

    assert_eq!(table.len(), 1);
    assert_eq!(table.get("😀").unwrap(), ["grinning", "happy", "joy"]);
}

#[test]
fn aggregation_is_idempotent() {
    let record = AnnotationRecord::from_text("😀", "grinning | happy | happy");

    let once = aggregate([record.clone()]);
    let twice = aggregate([record.clone(), record]);
    assert_eq!(once, twice);
    assert_eq!(once.get("😀").unwrap().len(), 2);
}

#[test]
fn record_without_descriptors_creates_no_entry() {
    let mut sets = KeywordSets::new();
    sets.add(AnnotationRecord {
        codepoints: "😶".to_string(),
        descriptors: Vec::new(),
    });

    assert!(sets.is_empty());
}

#[test]
fn finalized_entries_are_in_raw_key_order() {
    let entries = aggregate([
        AnnotationRecord::from_text("😀", "grinning"),
        AnnotationRecord::from_text("☎", "telephone"),
        AnnotationRecord::from_text("#", "number sign"),
    ])
    .finalize()
    .into_entries();

    let keys: Vec<_> = entries.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["#", "☎", "😀"]);
}
