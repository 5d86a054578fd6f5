//! Form validation tests

use crate::core::types::WordEntry;
use crate::core::validator::{
    parse_tags, validate_category_name, validate_word, ValidationError, WordDraft,
};

#[test]
fn test_parse_tags_trims_and_drops_empty() {
    assert_eq!(parse_tags("矢印, 記号 ,,  "), vec!["矢印", "記号"]);
    assert!(parse_tags("").is_empty());
}

#[test]
fn test_parse_tags_preserves_order_and_duplicates() {
    assert_eq!(parse_tags("b,a,b"), vec!["b", "a", "b"]);
}

#[test]
fn test_validate_word_requires_reading_and_surface() {
    let draft = WordDraft {
        reading: "\t".to_string(),
        surface: "x".to_string(),
        ..WordDraft::default()
    };

    assert_eq!(validate_word(&draft), Err(ValidationError::MissingRequiredField));
}

#[test]
fn test_validate_word_keeps_custom_part_of_speech() {
    let draft = WordDraft {
        reading: "かお".to_string(),
        surface: "(^_^)".to_string(),
        part_of_speech: "顔文字".to_string(),
        ..WordDraft::default()
    };

    let word = validate_word(&draft).unwrap();
    assert_eq!(word.part_of_speech_label(), "顔文字");
    assert_eq!(word.tags, Some(Vec::new()));
}

#[test]
fn test_category_name_validation() {
    let existing = ["記号", "人名"];

    assert_eq!(validate_category_name(" 矢印 ", existing), Ok("矢印".to_string()));
    assert_eq!(
        validate_category_name("人名 ", existing),
        Err(ValidationError::DuplicateCategory("人名".to_string()))
    );
    assert_eq!(validate_category_name("", existing), Err(ValidationError::EmptyCategoryName));
}

#[test]
fn test_draft_from_entry_joins_tags() {
    let entry = WordEntry {
        reading: "みぎや".to_string(),
        surface: "→".to_string(),
        tags: Some(vec!["a".to_string(), "b".to_string()]),
        ..WordEntry::default()
    };

    let draft = WordDraft::from_entry(&entry, "記号");

    assert_eq!(draft.tags, "a, b");
    assert_eq!(draft.part_of_speech, "名詞");
    assert_eq!(draft.category, "記号");
    assert_eq!(parse_tags(&draft.tags), vec!["a", "b"]);
}
