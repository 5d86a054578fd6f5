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

//! Document model tests
//!
//! Tests JSON loading defaults, lossless saving and category ordering.

use crate::core::tests::{sample_store, SAMPLE_JSON};
use crate::core::{
    Dictionary, DocumentStore, WordEntry, DEFAULT_DICTIONARY_NAME, DEFAULT_PART_OF_SPEECH,
};

#[test]
fn test_sample_loads_in_document_order() {
    let store = sample_store();
    let names: Vec<&str> = store.dictionary().categories.names().collect();

    assert_eq!(names, vec!["記号", "人名", "定型文", "無効"]);
    assert_eq!(store.dictionary().info.name, "テスト辞書");
}

#[test]
fn test_enabled_defaults_to_true() {
    let store = sample_store();
    let categories = &store.dictionary().categories;

    // 人名 has no 有効 key at all
    assert!(categories.get("人名").unwrap().is_enabled());
    assert!(!categories.get("無効").unwrap().is_enabled());
}

#[test]
fn test_only_literal_false_disables() {
    let json = r#"{ "カテゴリ": { "a": { "有効": null }, "b": { "有効": 0 }, "c": { "有効": false } } }"#;
    let dictionary: Dictionary = serde_json::from_str(json).unwrap();

    assert!(dictionary.categories.get("a").unwrap().is_enabled());
    assert!(dictionary.categories.get("b").unwrap().is_enabled());
    assert!(!dictionary.categories.get("c").unwrap().is_enabled());
}

#[test]
fn test_missing_keys_default() {
    let dictionary: Dictionary = serde_json::from_str("{}").unwrap();

    assert!(dictionary.categories.is_empty());
    assert_eq!(dictionary.info.name, DEFAULT_DICTIONARY_NAME);

    let word: WordEntry = serde_json::from_str(r#"{ "単語": "→" }"#).unwrap();
    assert_eq!(word.reading, "");
    assert_eq!(word.part_of_speech_label(), DEFAULT_PART_OF_SPEECH);
    assert!(word.tag_list().is_empty());
}

#[test]
fn test_round_trip_is_lossless_except_date() {
    let mut store = sample_store();
    let original = store.dictionary().clone();

    let json = store.export_json("2030-05-06").unwrap();

    let mut reloaded = DocumentStore::new();
    reloaded.import_json(&json).unwrap();

    let mut expected = original;
    expected.info.updated_date = "2030-05-06".to_string();
    assert_eq!(reloaded.dictionary(), &expected);
}

#[test]
fn test_unknown_keys_survive_save() {
    let mut store = sample_store();
    let json = store.export_json("2030-01-01").unwrap();

    assert!(json.contains("読み_Windows"), "Extra word keys should be written back");
    // Optional keys that were absent stay absent
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let second = &value["カテゴリ"]["記号"]["単語リスト"][1];
    assert!(second.get("説明").is_none());
    assert!(second.get("タグ").is_none());
}

#[test]
fn test_round_trip_keeps_category_order() {
    let mut store = sample_store();
    let json = store.export_json("2030-01-01").unwrap();

    let first = json.find("\"記号\"").unwrap();
    let last = json.find("\"無効\"").unwrap();
    assert!(first < last);
}

#[test]
fn test_duplicate_category_key_keeps_first_position() {
    let json = r#"{ "カテゴリ": { "a": { "説明": "1" }, "b": {}, "a": { "説明": "2" } } }"#;
    let dictionary: Dictionary = serde_json::from_str(json).unwrap();

    let names: Vec<&str> = dictionary.categories.names().collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(dictionary.categories.get("a").unwrap().description_text(), "2");
}

#[test]
fn test_word_ids_are_unique_and_ignored_by_equality() {
    let store = sample_store();
    let words = &store.dictionary().categories.get("記号").unwrap().words;

    assert_ne!(words[0].id, words[1].id);

    let mut copy = words[0].clone();
    copy.id = Default::default();
    assert_eq!(copy, words[0]);
}

#[test]
fn test_sample_constant_is_valid_json() {
    assert!(serde_json::from_str::<serde_json::Value>(SAMPLE_JSON).is_ok());
}

#[test]
fn test_category_without_keys_saves_unchanged() {
    let mut store = DocumentStore::new();
    store.import_json(r#"{ "カテゴリ": { "a": {} } }"#).unwrap();

    let json = store.export_json("2030-01-01").unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["カテゴリ"]["a"], serde_json::json!({}));
}

#[test]
fn test_raw_enabled_value_survives_save() {
    let mut store = DocumentStore::new();
    store
        .import_json(r#"{ "カテゴリ": { "a": { "有効": 0 }, "b": { "有効": null }, "c": { "有効": "no" } } }"#)
        .unwrap();

    let json = store.export_json("2030-01-01").unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["カテゴリ"]["a"]["有効"], serde_json::json!(0));
    assert_eq!(value["カテゴリ"]["b"], serde_json::json!({ "有効": null }));
    assert_eq!(value["カテゴリ"]["c"]["有効"], serde_json::json!("no"));
    assert!(store.dictionary().categories.get("c").unwrap().is_enabled());
}

#[test]
fn test_null_word_list_reads_as_empty() {
    let dictionary: Dictionary =
        serde_json::from_str(r#"{ "カテゴリ": { "a": { "単語リスト": null } } }"#).unwrap();

    assert!(dictionary.categories.get("a").unwrap().words.is_empty());
}

#[test]
fn test_toggling_writes_boolean_enabled() {
    let mut store = DocumentStore::new();
    store.import_json(r#"{ "カテゴリ": { "a": {} } }"#).unwrap();

    store.set_category_enabled("a", false).unwrap();
    let json = store.export_json("2030-01-01").unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["カテゴリ"]["a"], serde_json::json!({ "有効": false }));
}
