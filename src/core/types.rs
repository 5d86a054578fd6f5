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

//! src/core/types.rs
//!
//! Core type definitions for dictionary management
//!
//! This module defines the document model shared by every front-end:
//! - `Dictionary`: Root document (info block + ordered categories)
//! - `DictionaryInfo`: Name, description and last update date
//! - `Category`: Description, enabled flag and word list
//! - `WordEntry`: A single reading → surface mapping with metadata
//! - `WordId`: Runtime identity of a word entry (never serialised)
//!
//! The JSON keys are the Japanese ones used by existing dictionary files,
//! so documents written by other tools load unchanged. Keys this model does
//! not know about are kept in `extra` maps and written back on save.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

/// Part of speech used when an entry does not specify one ("noun")
pub const DEFAULT_PART_OF_SPEECH: &str = "名詞";

/// Parts of speech offered by the word form
///
/// Free text is still accepted; these are only the suggestions.
pub const PART_OF_SPEECH_OPTIONS: [&str; 11] = [
    "名詞", "動詞", "形容詞", "副詞", "固有名詞", "人名", "地名", "記号", "短縮よみ", "顔文字", "サ変名詞",
];

/// Name given to freshly created dictionaries ("new dictionary")
pub const DEFAULT_DICTIONARY_NAME: &str = "新しい辞書";

/// Runtime identifier of a word entry
///
/// Assigned when an entry is loaded or created and kept across edits,
/// including moves between categories. Edit and delete operations resolve
/// entries by this id rather than by their position in a (possibly
/// filtered) list.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct WordId(Uuid);

impl WordId {
    /// Generates a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dictionary metadata block (`辞書情報`)
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DictionaryInfo {
    /// Display name of the dictionary
    #[serde(rename = "名前", default)]
    pub name: String,

    /// Free-form description
    #[serde(rename = "説明", default)]
    pub description: String,

    /// Last save date as `YYYY-MM-DD`
    #[serde(rename = "更新日", default)]
    pub updated_date: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for DictionaryInfo {
    fn default() -> Self {
        Self {
            name: DEFAULT_DICTIONARY_NAME.to_string(),
            description: String::new(),
            updated_date: today(),
            extra: Map::new(),
        }
    }
}

/// A single dictionary entry
///
/// `reading` is what the user types, `surface` is what the IME offers as
/// the conversion result. Optional fields stay `None` when the source file
/// omitted them so that a load/save cycle does not invent keys.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct WordEntry {
    #[serde(skip)]
    pub id: WordId,

    /// Kana reading (`読み`)
    #[serde(rename = "読み", default)]
    pub reading: String,

    /// Converted word (`単語`)
    #[serde(rename = "単語", default)]
    pub surface: String,

    /// Part of speech label (`品詞`)
    #[serde(rename = "品詞", default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,

    /// Optional comment (`説明`)
    #[serde(rename = "説明", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional tags (`タグ`)
    #[serde(rename = "タグ", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WordEntry {
    /// Part of speech, falling back to the noun label
    pub fn part_of_speech_label(&self) -> &str {
        match self.part_of_speech.as_deref() {
            Some(pos) if !pos.is_empty() => pos,
            _ => DEFAULT_PART_OF_SPEECH,
        }
    }

    /// Description or the empty string
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Tags as a slice (empty when absent)
    pub fn tag_list(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }
}

// Identity is runtime-only; two entries are equal when their content is.
impl PartialEq for WordEntry {
    fn eq(&self, other: &Self) -> bool {
        self.reading == other.reading
            && self.surface == other.surface
            && self.part_of_speech == other.part_of_speech
            && self.description == other.description
            && self.tags == other.tags
            && self.extra == other.extra
    }
}

/// A named group of entries (`カテゴリ` value)
///
/// Keys absent from the source file stay absent on save, and a
/// non-boolean `有効` value is written back as it was read.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(from = "RawCategory", into = "RawCategory")]
pub struct Category {
    /// Optional comment (`説明`)
    pub description: Option<String>,

    /// Raw `有効` value; see `is_enabled()`
    enabled: Option<Value>,

    pub words: Vec<WordEntry>,

    /// Whether `単語リスト` was present (or has been filled since)
    words_listed: bool,

    pub extra: Map<String, Value>,
}

impl Category {
    /// Creates an empty, enabled category
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            enabled: Some(Value::Bool(true)),
            words: Vec::new(),
            words_listed: true,
            extra: Map::new(),
        }
    }

    /// Description or the empty string
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Only the literal `false` disables a category
    ///
    /// Disabled categories stay in the document but are skipped by
    /// active-word counts and default exports.
    pub fn is_enabled(&self) -> bool {
        !matches!(self.enabled, Some(Value::Bool(false)))
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = Some(Value::Bool(enabled));
    }
}

/// Wire shape of a category
#[derive(Deserialize, Serialize)]
struct RawCategory {
    #[serde(rename = "説明", default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(rename = "有効", default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    enabled: Option<Value>,

    #[serde(rename = "単語リスト", default, deserialize_with = "nullable_list", skip_serializing_if = "Option::is_none")]
    words: Option<Vec<WordEntry>>,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<RawCategory> for Category {
    fn from(raw: RawCategory) -> Self {
        Self {
            description: raw.description,
            enabled: raw.enabled,
            words_listed: raw.words.is_some(),
            words: raw.words.unwrap_or_default(),
            extra: raw.extra,
        }
    }
}

impl From<Category> for RawCategory {
    fn from(category: Category) -> Self {
        let listed = category.words_listed || !category.words.is_empty();
        Self {
            description: category.description,
            enabled: category.enabled,
            words: listed.then_some(category.words),
            extra: category.extra,
        }
    }
}

/// Keeps a present key even when its value is `null`
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// A `null` word list reads as an empty one
fn nullable_list<'de, D>(deserializer: D) -> Result<Option<Vec<WordEntry>>, D::Error>
where
    D: Deserializer<'de>,
{
    let words: Option<Vec<WordEntry>> = Option::deserialize(deserializer)?;
    Ok(Some(words.unwrap_or_default()))
}

/// Categories keyed by name, in document order
///
/// Serialised as a JSON object. A repeated key keeps its first position
/// and takes the last value, matching how JSON objects are usually read.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Categories(Vec<(String, Category)>);

impl Categories {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.0.iter().find(|(key, _)| key == name).map(|(_, c)| c)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.0.iter_mut().find(|(key, _)| key == name).map(|(_, c)| c)
    }

    /// Inserts or replaces a category, keeping the position of an existing key
    pub fn insert(&mut self, name: impl Into<String>, category: Category) {
        let name = name.into();
        match self.get_mut(&name) {
            Some(slot) => *slot = category,
            None => self.0.push((name, category)),
        }
    }

    /// Category names in document order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.0.iter().map(|(name, c)| (name.as_str(), c))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Category)> {
        self.0.iter_mut().map(|(name, c)| (name.as_str(), c))
    }
}

impl Serialize for Categories {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, category) in &self.0 {
            map.serialize_entry(name, category)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Categories {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CategoriesVisitor;

        impl<'de> Visitor<'de> for CategoriesVisitor {
            type Value = Categories;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category names to categories")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Categories, A::Error> {
                let mut categories = Categories::new();
                while let Some((name, category)) = access.next_entry::<String, Category>()? {
                    categories.insert(name, category);
                }
                Ok(categories)
            }
        }

        deserializer.deserialize_map(CategoriesVisitor)
    }
}

/// Root dictionary document
///
/// # Example
/// ```
/// use ime_dict_editor::core::Dictionary;
///
/// let json = r#"{ "辞書情報": { "名前": "記号" }, "カテゴリ": { "矢印": { "単語リスト": [] } } }"#;
/// let dictionary: Dictionary = serde_json::from_str(json).unwrap();
/// assert_eq!(dictionary.info.name, "記号");
/// assert!(dictionary.categories.get("矢印").unwrap().is_enabled());
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Dictionary {
    #[serde(rename = "辞書情報", default)]
    pub info: DictionaryInfo,

    #[serde(rename = "カテゴリ", default)]
    pub categories: Categories,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Dictionary {
    /// Finds the category holding the given entry and its index there
    pub fn locate(&self, id: WordId) -> Option<(&str, usize)> {
        self.categories.iter().find_map(|(name, category)| {
            category
                .words
                .iter()
                .position(|word| word.id == id)
                .map(|index| (name, index))
        })
    }

    /// Looks up an entry by id
    pub fn word(&self, id: WordId) -> Option<&WordEntry> {
        self.categories
            .iter()
            .flat_map(|(_, category)| category.words.iter())
            .find(|word| word.id == id)
    }
}

/// Current UTC date in `YYYY-MM-DD` form
pub fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}
