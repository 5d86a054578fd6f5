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

//! Input validation for user-submitted forms
//!
//! Validation is deliberately shallow: required fields must be non-empty
//! after trimming, category names must be unique, and exports must select
//! something. Everything else is accepted as typed.

use thiserror::Error;

use crate::core::types::{WordEntry, WordId, DEFAULT_PART_OF_SPEECH};

/// Validation errors
///
/// Every variant aborts the operation that produced it without touching
/// the document.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Reading or surface was blank
    #[error("Reading and word are required")]
    MissingRequiredField,

    /// Category name was blank
    #[error("Category name is required")]
    EmptyCategoryName,

    /// Category name already exists
    #[error("A category named '{0}' already exists")]
    DuplicateCategory(String),

    /// Category name does not exist
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    /// A word was submitted before any category exists
    #[error("Create a category first")]
    NoCategories,

    /// Word id does not resolve to an entry
    #[error("Word {0} not found")]
    WordNotFound(WordId),

    /// Export requested with no category checked
    #[error("Select at least one category to export")]
    EmptySelection,

    /// Export selection resolved to zero rows
    #[error("There is no data to export")]
    NothingToExport,
}

/// Raw word form input, before validation
///
/// Mirrors the add/edit form: free text fields plus the destination
/// category. `tags` is the comma-separated string as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WordDraft {
    pub reading: String,
    pub surface: String,
    pub part_of_speech: String,
    pub description: String,
    pub tags: String,
    pub category: String,
}

impl WordDraft {
    /// Pre-fills a draft from an existing entry (edit form)
    pub fn from_entry(entry: &WordEntry, category: &str) -> Self {
        Self {
            reading: entry.reading.clone(),
            surface: entry.surface.clone(),
            part_of_speech: entry.part_of_speech_label().to_string(),
            description: entry.description_text().to_string(),
            tags: entry.tag_list().join(", "),
            category: category.to_string(),
        }
    }
}

/// Splits comma-separated tag input
///
/// Pieces are trimmed and empty pieces dropped. Order and duplicates are
/// preserved.
///
/// # Example
/// ```
/// use ime_dict_editor::core::validator::parse_tags;
///
/// assert_eq!(parse_tags(" a, b ,, a "), vec!["a", "b", "a"]);
/// assert!(parse_tags("   ").is_empty());
/// ```
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validates a draft and builds the entry it describes
///
/// The returned entry carries a fresh id; callers updating an existing
/// entry copy the original id over.
///
/// # Errors
///
/// Returns `ValidationError::MissingRequiredField` if the reading or the
/// surface is empty after trimming.
pub fn validate_word(draft: &WordDraft) -> Result<WordEntry, ValidationError> {
    let reading = draft.reading.trim();
    let surface = draft.surface.trim();

    if reading.is_empty() || surface.is_empty() {
        return Err(ValidationError::MissingRequiredField);
    }

    let part_of_speech = match draft.part_of_speech.trim() {
        "" => DEFAULT_PART_OF_SPEECH.to_string(),
        pos => pos.to_string(),
    };

    Ok(WordEntry {
        reading: reading.to_string(),
        surface: surface.to_string(),
        part_of_speech: Some(part_of_speech),
        description: Some(draft.description.trim().to_string()),
        tags: Some(parse_tags(&draft.tags)),
        ..WordEntry::default()
    })
}

/// Validates a new category name against existing names
///
/// Returns the trimmed name on success.
pub fn validate_category_name<'a, I>(name: &str, existing: I) -> Result<String, ValidationError>
where
    I: IntoIterator<Item = &'a str>,
{
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::EmptyCategoryName);
    }

    if existing.into_iter().any(|existing| existing == name) {
        return Err(ValidationError::DuplicateCategory(name.to_string()));
    }

    Ok(name.to_string())
}
