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

//! View models
//!
//! `render()` turns store state plus explicit view state into plain data
//! that any front-end can draw. It is recomputed in full after every
//! mutation; nothing here holds widgets or talks to GTK.

use std::collections::BTreeSet;

use crate::core::stats::DictionaryStats;
use crate::core::store::DocumentStore;
use crate::core::types::{Dictionary, WordEntry, WordId};

/// Transient UI state that is not part of the document
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    /// Word list filter text
    pub search: String,
    /// Export checkboxes the user cleared; everything else is checked
    unchecked_exports: BTreeSet<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks or clears one export checkbox
    pub fn set_export_checked(&mut self, category: &str, checked: bool) {
        if checked {
            self.unchecked_exports.remove(category);
        } else {
            self.unchecked_exports.insert(category.to_string());
        }
    }

    pub fn is_export_checked(&self, category: &str) -> bool {
        !self.unchecked_exports.contains(category)
    }

    pub fn select_all_exports(&mut self) {
        self.unchecked_exports.clear();
    }

    pub fn deselect_all_exports(&mut self, dictionary: &Dictionary) {
        self.unchecked_exports = dictionary.categories.names().map(str::to_string).collect();
    }

    /// Checked category names in document order
    pub fn selected_exports(&self, dictionary: &Dictionary) -> Vec<String> {
        dictionary
            .categories
            .names()
            .filter(|name| self.is_export_checked(name))
            .map(str::to_string)
            .collect()
    }
}

/// One entry of the category list
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryRow {
    pub name: String,
    pub description: String,
    pub word_count: usize,
    pub enabled: bool,
    pub active: bool,
}

/// One entry of the word list
#[derive(Clone, Debug, PartialEq)]
pub struct WordRow {
    pub id: WordId,
    pub reading: String,
    pub surface: String,
    pub part_of_speech: String,
    pub description: String,
    /// Tags joined with `", "`
    pub tags: String,
}

impl From<&WordEntry> for WordRow {
    fn from(word: &WordEntry) -> Self {
        Self {
            id: word.id,
            reading: word.reading.clone(),
            surface: word.surface.clone(),
            part_of_speech: word.part_of_speech_label().to_string(),
            description: word.description_text().to_string(),
            tags: word.tag_list().join(", "),
        }
    }
}

/// Word list contents
#[derive(Clone, Debug, PartialEq)]
pub enum WordListView {
    /// No active category
    NoCategorySelected,
    /// The filter matched nothing (or the category is empty)
    NoMatches,
    Words(Vec<WordRow>),
}

/// One export checkbox
#[derive(Clone, Debug, PartialEq)]
pub struct ExportChoice {
    pub name: String,
    pub word_count: usize,
    pub description: String,
    pub checked: bool,
}

/// Everything a front-end needs to draw one frame
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedView {
    pub stats: DictionaryStats,
    pub categories: Vec<CategoryRow>,
    pub words: WordListView,
    pub export_choices: Vec<ExportChoice>,
}

/// Renders the full view from the store and view state
pub fn render(store: &DocumentStore, state: &ViewState) -> RenderedView {
    let dictionary = store.dictionary();

    RenderedView {
        stats: DictionaryStats::compute(dictionary),
        categories: category_rows(store),
        words: word_list(store, &state.search),
        export_choices: export_choices(dictionary, state),
    }
}

/// Category list rows in document order
pub fn category_rows(store: &DocumentStore) -> Vec<CategoryRow> {
    let active = store.active_category();

    store
        .dictionary()
        .categories
        .iter()
        .map(|(name, category)| CategoryRow {
            name: name.to_string(),
            description: category.description_text().to_string(),
            word_count: category.words.len(),
            enabled: category.is_enabled(),
            active: active == Some(name),
        })
        .collect()
}

/// Words of the active category matching `search`
pub fn word_list(store: &DocumentStore, search: &str) -> WordListView {
    let Some(category) = store
        .active_category()
        .and_then(|name| store.dictionary().categories.get(name))
    else {
        return WordListView::NoCategorySelected;
    };

    let rows: Vec<WordRow> = category
        .words
        .iter()
        .filter(|word| matches_search(word, search))
        .map(WordRow::from)
        .collect();

    if rows.is_empty() {
        WordListView::NoMatches
    } else {
        WordListView::Words(rows)
    }
}

/// Case-insensitive substring match on reading, surface or description
pub fn matches_search(word: &WordEntry, search: &str) -> bool {
    let term = search.to_lowercase();

    word.reading.to_lowercase().contains(&term)
        || word.surface.to_lowercase().contains(&term)
        || word
            .description
            .as_deref()
            .is_some_and(|description| description.to_lowercase().contains(&term))
}

fn export_choices(dictionary: &Dictionary, state: &ViewState) -> Vec<ExportChoice> {
    dictionary
        .categories
        .iter()
        .map(|(name, category)| ExportChoice {
            name: name.to_string(),
            word_count: category.words.len(),
            description: category.description_text().to_string(),
            checked: state.is_export_checked(name),
        })
        .collect()
}
