//! Export selection and format tests
//!
//! Tests the row selection policy shared by every format and the
//! file-level output of each format on the shared sample document.

use crate::core::tests::sample_store;
use crate::core::{DocumentStore, ValidationError};
use crate::export::{
    batch_file_stem, collect_rows, export, in_document_order, parse_category_list, ExportFormat, WindowsProfile,
};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|name| name.to_string()).collect()
}

fn text(store: &DocumentStore, format: ExportFormat, selection: &[String]) -> String {
    let output = export(store.dictionary(), format, Some(selection), None, WindowsProfile::Editor).unwrap();
    String::from_utf8(output.bytes).unwrap()
}

// ============================================================================
// Selection policy
// ============================================================================

#[test]
fn test_explicit_selection_skips_disabled_and_unknown() {
    let store = sample_store();
    let selection = names(&["無効", "記号", "存在しない"]);

    let chosen = collect_rows(store.dictionary(), Some(selection.as_slice()), None).unwrap();

    assert_eq!(chosen.rows.len(), 2);
    assert!(chosen.rows.iter().all(|row| row.category == Some("記号")));
    // Every selected name is reported, even the ones that contributed nothing
    assert_eq!(chosen.categories.len(), 3);
}

#[test]
fn test_explicit_selection_follows_selection_order() {
    let store = sample_store();
    let selection = names(&["定型文", "記号"]);

    let chosen = collect_rows(store.dictionary(), Some(selection.as_slice()), None).unwrap();
    let surfaces: Vec<&str> = chosen.rows.iter().map(|row| row.word.surface.as_str()).collect();

    assert_eq!(surfaces, vec!["お世話になっております", "よろしくお願いいたします", "→", "←"]);
}

#[test]
fn test_empty_selection_rejected() {
    let store = sample_store();

    let result = collect_rows(store.dictionary(), Some(&[][..]), Some("記号"));
    assert_eq!(result.err(), Some(ValidationError::EmptySelection));
}

#[test]
fn test_active_category_fallback_is_verbatim() {
    let mut store = sample_store();
    store.select_category("無効").unwrap();

    let chosen = collect_rows(store.dictionary(), None, store.active_category()).unwrap();

    // Disabled categories are still exported when they are the active one
    assert_eq!(chosen.rows.len(), 1);
    assert_eq!(chosen.rows[0].category, None);
    assert_eq!(chosen.categories, vec!["無効"]);
}

#[test]
fn test_all_enabled_fallback() {
    let store = sample_store();

    let chosen = collect_rows(store.dictionary(), None, None).unwrap();

    assert_eq!(chosen.rows.len(), 5);
    assert_eq!(chosen.categories, vec!["記号", "人名", "定型文"]);
    assert!(chosen.rows.iter().all(|row| row.category.is_some()));
}

#[test]
fn test_nothing_to_export() {
    let mut store = sample_store();
    store.add_category("空", "").unwrap();

    let selection = names(&["空", "無効"]);
    let result = collect_rows(store.dictionary(), Some(selection.as_slice()), None);
    assert_eq!(result.err(), Some(ValidationError::NothingToExport));

    let empty = DocumentStore::new();
    let result = collect_rows(empty.dictionary(), None, None);
    assert_eq!(result.err(), Some(ValidationError::NothingToExport));
}

// ============================================================================
// Formats
// ============================================================================

#[test]
fn test_csv_export_annotates_categories() {
    let store = sample_store();

    let csv = text(&store, ExportFormat::Csv, &names(&["記号"]));
    let lines: Vec<&str> = csv.split('\n').collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], r#""みぎや","→","記号","右矢印","矢印","記号""#);
    assert_eq!(lines[2], r#""ひだりや","←","記号","","","記号""#);
}

#[test]
fn test_csv_quotes_inner_quotes() {
    let mut store = DocumentStore::new();
    store
        .import_json(r#"{ "カテゴリ": { "c": { "単語リスト": [ { "読み": "か\"い", "単語": "買い", "タグ": ["a", "b"] } ] } } }"#)
        .unwrap();

    let csv = text(&store, ExportFormat::Csv, &names(&["c"]));

    assert!(csv.contains(r#""か""い""#));
    assert!(csv.contains(r#""a;b""#));
}

#[test]
fn test_windows_export_banner_lists_categories() {
    let store = sample_store();

    let output = text(&store, ExportFormat::Windows, &names(&["記号", "人名"]));

    assert!(output.starts_with("!Microsoft IME Dictionary Tool\n!Version=10.0\n"));
    assert!(output.contains("!Categories: 記号, 人名\n\n"));
    assert!(output.ends_with("やまだ\t山田\t人名\t"));
}

#[test]
fn test_windows_export_with_nothing_selected_fails() {
    let store = sample_store();

    let result = export(store.dictionary(), ExportFormat::Windows, Some(&[][..]), None, WindowsProfile::Editor);
    assert_eq!(result, Err(ValidationError::EmptySelection));
}

#[test]
fn test_export_output_metadata() {
    let store = sample_store();
    let selection = names(&["記号", "定型文"]);

    for format in ExportFormat::ALL {
        let output = export(store.dictionary(), format, Some(selection.as_slice()), None, WindowsProfile::Editor).unwrap();

        assert_eq!(output.file_name, format.file_name());
        assert_eq!(output.mime_type, format.mime_type());
        assert_eq!(output.categories, 2);
        assert_eq!(output.rows, 4);
    }
}

#[test]
fn test_native_windows_profile() {
    let store = sample_store();
    let selection = names(&["記号"]);

    let output = export(store.dictionary(), ExportFormat::Windows, Some(selection.as_slice()), None, WindowsProfile::Native).unwrap();

    assert_eq!(&output.bytes[..2], &[0xFF, 0xFE]);
    assert_eq!(output.mime_type, "text/plain;charset=utf-16le");

    let units: Vec<u16> = output.bytes[2..]
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let decoded = String::from_utf16(&units).unwrap();
    assert!(decoded.contains("みぎや\t→\t短縮よみ\t右矢印"));
}

#[test]
fn test_export_leaves_document_untouched() {
    let store = sample_store();
    let before = store.dictionary().clone();

    let _ = export(store.dictionary(), ExportFormat::Csv, None, None, WindowsProfile::Editor).unwrap();

    assert_eq!(store.dictionary(), &before);
}

// ============================================================================
// Batch file names
// ============================================================================

#[test]
fn test_batch_stem_without_filter_is_unchanged() {
    assert_eq!(batch_file_stem("dictionary", &[]).unwrap(), "dictionary");
}

#[test]
fn test_batch_stem_truncates_and_sanitises_suffix() {
    let long = names(&["abcdefghijklmnop", "qrstuvwxyz012345"]);
    let stem = batch_file_stem("d", &long).unwrap();
    assert_eq!(stem.chars().count(), "d_".len() + 30);

    let unsafe_names = names(&["a b", "c:d"]);
    assert_eq!(batch_file_stem("d", &unsafe_names).unwrap(), "d_a_b_c_d");
}

// ============================================================================
// Category filters
// ============================================================================

#[test]
fn test_category_list_drops_blanks_and_repeats() {
    assert_eq!(parse_category_list(" 記号, ,人名,記号 "), vec!["記号", "人名"]);
    assert!(parse_category_list(" , ").is_empty());
}

#[test]
fn test_filter_in_document_order_exports_each_row_once() {
    let store = sample_store();
    let filter = in_document_order(store.dictionary(), &parse_category_list("定型文,記号,記号"));

    assert_eq!(filter, vec!["記号", "定型文"]);

    let chosen = collect_rows(store.dictionary(), Some(filter.as_slice()), None).unwrap();
    let categories: Vec<&str> = chosen.rows.iter().filter_map(|row| row.category).collect();
    assert_eq!(categories, vec!["記号", "記号", "定型文", "定型文"]);

    let windows = text(&store, ExportFormat::Windows, &filter);
    assert_eq!(windows.matches("みぎや").count(), 1);
    assert!(windows.contains("記号, 定型文"));
}

#[test]
fn test_filter_keeps_unknown_names_last() {
    let store = sample_store();

    let filter = in_document_order(store.dictionary(), &names(&["存在しない", "人名"]));

    assert_eq!(filter, vec!["人名", "存在しない"]);
}
