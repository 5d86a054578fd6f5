// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Document store tests
//!
//! Tests category creation, word upsert (create / in-place / move) and
//! deletion, including the no-partial-mutation guarantee on errors.

use crate::core::tests::sample_store;
use crate::core::{DocumentStore, UpsertOutcome, ValidationError, WordDraft, WordId};

fn draft(category: &str, reading: &str, surface: &str) -> WordDraft {
    WordDraft {
        reading: reading.to_string(),
        surface: surface.to_string(),
        part_of_speech: "名詞".to_string(),
        category: category.to_string(),
        ..WordDraft::default()
    }
}

fn word_ids(store: &DocumentStore, category: &str) -> Vec<WordId> {
    store
        .dictionary()
        .categories
        .get(category)
        .unwrap()
        .words
        .iter()
        .map(|word| word.id)
        .collect()
}

// ============================================================================
// Import
// ============================================================================

#[test]
fn test_failed_import_keeps_previous_document() {
    let mut store = sample_store();
    let before = store.dictionary().clone();

    let result = store.import_json("{ not json");

    assert!(result.is_err(), "Malformed JSON should be rejected");
    assert_eq!(store.dictionary(), &before);
}

#[test]
fn test_import_replaces_document_and_drops_stale_active_category() {
    let mut store = sample_store();
    store.select_category("記号").unwrap();

    store
        .import_json(r#"{ "カテゴリ": { "新規": { "単語リスト": [] } } }"#)
        .unwrap();

    assert_eq!(store.dictionary().categories.len(), 1);
    assert_eq!(store.active_category(), None);
}

#[test]
fn test_import_keeps_active_category_when_present() {
    let mut store = sample_store();
    store.select_category("人名").unwrap();

    store
        .import_json(r#"{ "カテゴリ": { "人名": { "単語リスト": [] } } }"#)
        .unwrap();

    assert_eq!(store.active_category(), Some("人名"));
}

#[test]
fn test_export_json_stamps_date() {
    let mut store = sample_store();
    let json = store.export_json("2031-12-24").unwrap();

    assert!(json.contains("\"更新日\": \"2031-12-24\""));
    assert_eq!(store.dictionary().info.updated_date, "2031-12-24");
}

// ============================================================================
// Categories
// ============================================================================

#[test]
fn test_add_category_becomes_active() {
    let mut store = DocumentStore::new();

    let name = store.add_category("  矢印 ", " arrows ").unwrap();

    assert_eq!(name, "矢印");
    assert_eq!(store.active_category(), Some("矢印"));

    let category = store.dictionary().categories.get("矢印").unwrap();
    assert!(category.is_enabled());
    assert!(category.words.is_empty());
    assert_eq!(category.description_text(), "arrows");
}

#[test]
fn test_duplicate_category_rejected() {
    let mut store = sample_store();
    let count = store.dictionary().categories.len();

    let result = store.add_category("記号", "again");

    assert_eq!(result, Err(ValidationError::DuplicateCategory("記号".to_string())));
    assert_eq!(store.dictionary().categories.len(), count);
}

#[test]
fn test_empty_category_name_rejected() {
    let mut store = DocumentStore::new();

    assert_eq!(store.add_category("   ", ""), Err(ValidationError::EmptyCategoryName));
    assert!(store.dictionary().categories.is_empty());
}

#[test]
fn test_toggle_unknown_category_fails() {
    let mut store = sample_store();

    assert!(store.set_category_enabled("存在しない", false).is_err());
    assert!(store.select_category("存在しない").is_err());
}

// ============================================================================
// Words
// ============================================================================

#[test]
fn test_add_word_appends_and_activates_category() {
    let mut store = sample_store();

    let outcome = store.upsert_word(&draft("人名", "すずき", "鈴木"), None).unwrap();

    let ids = word_ids(&store, "人名");
    assert_eq!(ids.len(), 2);
    assert_eq!(outcome, UpsertOutcome::Created(ids[1]));
    assert_eq!(store.active_category(), Some("人名"));
}

#[test]
fn test_add_word_parses_tags_and_defaults() {
    let mut store = sample_store();
    let mut input = draft("人名", " すずき ", " 鈴木 ");
    input.part_of_speech = String::new();
    input.tags = "a, b ,, a".to_string();
    input.description = "  説明  ".to_string();

    let id = store.upsert_word(&input, None).unwrap().id();
    let (_, word) = store.word(id).unwrap();

    assert_eq!(word.reading, "すずき");
    assert_eq!(word.surface, "鈴木");
    assert_eq!(word.part_of_speech.as_deref(), Some("名詞"));
    assert_eq!(word.description.as_deref(), Some("説明"));
    assert_eq!(word.tag_list(), &["a", "b", "a"]);
}

#[test]
fn test_blank_reading_or_surface_rejected() {
    let mut store = sample_store();
    let before = word_ids(&store, "人名").len();

    let blank_reading = store.upsert_word(&draft("人名", "   ", "鈴木"), None);
    let blank_surface = store.upsert_word(&draft("人名", "すずき", ""), None);

    assert_eq!(blank_reading, Err(ValidationError::MissingRequiredField));
    assert_eq!(blank_surface, Err(ValidationError::MissingRequiredField));
    assert_eq!(word_ids(&store, "人名").len(), before);
}

#[test]
fn test_add_word_without_categories_fails() {
    let mut store = DocumentStore::new();

    let result = store.upsert_word(&draft("x", "a", "b"), None);
    assert_eq!(result, Err(ValidationError::NoCategories));
}

#[test]
fn test_add_word_to_unknown_category_fails() {
    let mut store = sample_store();

    let result = store.upsert_word(&draft("存在しない", "a", "b"), None);
    assert_eq!(result, Err(ValidationError::UnknownCategory("存在しない".to_string())));
}

#[test]
fn test_edit_in_same_category_keeps_position_and_id() {
    let mut store = sample_store();
    let ids = word_ids(&store, "記号");

    let outcome = store
        .upsert_word(&draft("記号", "みぎ", "⇒"), Some(ids[0]))
        .unwrap();

    assert_eq!(outcome, UpsertOutcome::Updated(ids[0]));
    assert_eq!(word_ids(&store, "記号"), ids);

    let (category, word) = store.word(ids[0]).unwrap();
    assert_eq!(category, "記号");
    assert_eq!(word.surface, "⇒");
}

#[test]
fn test_edit_into_other_category_moves_to_end() {
    let mut store = sample_store();
    store.select_category("記号").unwrap();
    let moved = word_ids(&store, "記号")[0];

    let outcome = store
        .upsert_word(&draft("定型文", "みぎや", "→"), Some(moved))
        .unwrap();

    assert_eq!(outcome, UpsertOutcome::Moved(moved));
    assert!(!word_ids(&store, "記号").contains(&moved));
    assert_eq!(word_ids(&store, "定型文").last(), Some(&moved));
    assert_eq!(store.active_category(), Some("定型文"));
}

#[test]
fn test_edit_unknown_word_fails() {
    let mut store = sample_store();

    let result = store.upsert_word(&draft("記号", "a", "b"), Some(WordId::new()));
    assert!(matches!(result, Err(ValidationError::WordNotFound(_))));
}

#[test]
fn test_delete_word_by_id() {
    let mut store = sample_store();
    let ids = word_ids(&store, "定型文");

    let removed = store.delete_word(ids[1]).unwrap();

    assert_eq!(removed.reading, "よろ");
    assert_eq!(word_ids(&store, "定型文"), vec![ids[0]]);
    assert!(store.delete_word(ids[1]).is_err(), "Second delete should fail");
}
