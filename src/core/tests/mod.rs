//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Document model tests (JSON round trip, defaults, extras)
//! - Document store tests (categories, word upsert/delete)
//! - Form validation tests
//! - View model tests (statistics, filtering, export choices)

#[cfg(test)]
mod store_tests;
#[cfg(test)]
mod types_tests;
#[cfg(test)]
mod validator_tests;

/// Sample document shared by the core tests
///
/// Four categories: 記号 (2 words), 人名 (1), 定型文 (2) and a disabled
/// 無効 category (1 word).
pub(crate) const SAMPLE_JSON: &str = r#"{
  "辞書情報": {
    "名前": "テスト辞書",
    "説明": "テスト用",
    "更新日": "2024-01-01"
  },
  "カテゴリ": {
    "記号": {
      "説明": "記号・マーク",
      "有効": true,
      "単語リスト": [
        { "読み": "みぎや", "単語": "→", "品詞": "記号", "説明": "右矢印", "タグ": ["矢印"] },
        { "読み": "ひだりや", "単語": "←", "品詞": "記号" }
      ]
    },
    "人名": {
      "説明": "",
      "単語リスト": [
        { "読み": "やまだ", "単語": "山田", "品詞": "人名", "読み_Windows": "やまだ" }
      ]
    },
    "定型文": {
      "説明": "挨拶",
      "有効": true,
      "単語リスト": [
        { "読み": "おせ", "単語": "お世話になっております", "説明": "Business Greeting" },
        { "読み": "よろ", "単語": "よろしくお願いいたします" }
      ]
    },
    "無効": {
      "説明": "使わない",
      "有効": false,
      "単語リスト": [
        { "読み": "むこう", "単語": "無効" }
      ]
    }
  }
}"#;

pub(crate) fn sample_store() -> crate::core::DocumentStore {
    let mut store = crate::core::DocumentStore::new();
    store.import_json(SAMPLE_JSON).unwrap();
    store
}
