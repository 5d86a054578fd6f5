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

//! In-memory document store
//!
//! Owns the current `Dictionary` and the active-category pointer. All
//! mutations are synchronous and either fully apply or leave the document
//! untouched.

use tracing::{debug, info};

use crate::core::types::{Category, Dictionary, WordEntry, WordId};
use crate::core::validator::{validate_category_name, validate_word, ValidationError, WordDraft};

/// Result of a successful word upsert
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UpsertOutcome {
    /// A new entry was appended
    Created(WordId),
    /// An entry was replaced in place
    Updated(WordId),
    /// An entry was moved to the end of another category
    Moved(WordId),
}

impl UpsertOutcome {
    pub fn id(&self) -> WordId {
        match *self {
            Self::Created(id) | Self::Updated(id) | Self::Moved(id) => id,
        }
    }
}

/// Document store holding the dictionary and the active category
#[derive(Debug, Default)]
pub struct DocumentStore {
    dictionary: Dictionary,
    active_category: Option<String>,
}

impl DocumentStore {
    /// Creates a store with an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store around an existing dictionary
    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            active_category: None,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn active_category(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    /// Replaces the whole dictionary with a parsed JSON document
    ///
    /// The active category survives only if the new document has it.
    ///
    /// # Errors
    ///
    /// Returns the parse error and leaves the current document intact if
    /// `json` is not a valid dictionary.
    pub fn import_json(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let dictionary: Dictionary = serde_json::from_str(json)?;

        if let Some(active) = &self.active_category {
            if !dictionary.categories.contains(active) {
                self.active_category = None;
            }
        }

        info!(
            categories = dictionary.categories.len(),
            "Imported dictionary '{}'", dictionary.info.name
        );
        self.dictionary = dictionary;
        Ok(())
    }

    /// Stamps the update date and serialises the document
    ///
    /// # Arguments
    ///
    /// * `today` - Date to record, as `YYYY-MM-DD`
    pub fn export_json(&mut self, today: &str) -> Result<String, serde_json::Error> {
        let json = self.stamped_json(today)?;
        self.set_updated_date(today);
        Ok(json)
    }

    /// Serialises the document as it would be saved on `today`
    ///
    /// The in-memory date is left alone; call `set_updated_date()` once the
    /// write has succeeded.
    pub fn stamped_json(&self, today: &str) -> Result<String, serde_json::Error> {
        let mut stamped = self.dictionary.clone();
        stamped.info.updated_date = today.to_string();
        serde_json::to_string_pretty(&stamped)
    }

    pub fn set_updated_date(&mut self, today: &str) {
        self.dictionary.info.updated_date = today.to_string();
    }

    /// Adds an empty, enabled category and makes it active
    ///
    /// # Errors
    ///
    /// * `EmptyCategoryName` - name is blank after trimming
    /// * `DuplicateCategory` - name already exists
    pub fn add_category(&mut self, name: &str, description: &str) -> Result<String, ValidationError> {
        let name = validate_category_name(name, self.dictionary.categories.names())?;

        self.dictionary
            .categories
            .insert(name.clone(), Category::new(description.trim()));
        self.active_category = Some(name.clone());

        debug!("Added category '{}'", name);
        Ok(name)
    }

    /// Enables or disables a category
    pub fn set_category_enabled(&mut self, name: &str, enabled: bool) -> Result<(), ValidationError> {
        let category = self
            .dictionary
            .categories
            .get_mut(name)
            .ok_or_else(|| ValidationError::UnknownCategory(name.to_string()))?;

        category.set_enabled(enabled);
        debug!("Category '{}' enabled = {}", name, enabled);
        Ok(())
    }

    /// Makes a category active
    pub fn select_category(&mut self, name: &str) -> Result<(), ValidationError> {
        if !self.dictionary.categories.contains(name) {
            return Err(ValidationError::UnknownCategory(name.to_string()));
        }
        self.active_category = Some(name.to_string());
        Ok(())
    }

    /// Creates or updates a word from form input
    ///
    /// * `editing == None` appends a new entry to `draft.category`.
    /// * `editing == Some(id)` in the same category replaces the entry in
    ///   place, keeping its position.
    /// * `editing == Some(id)` in another category removes the entry from
    ///   its owner and appends it to `draft.category`.
    ///
    /// Creates and moves make the destination the active category. The
    /// entry keeps its id across updates.
    ///
    /// # Errors
    ///
    /// * `NoCategories` - the dictionary has no categories yet
    /// * `UnknownCategory` - the destination does not exist
    /// * `MissingRequiredField` - reading or surface is blank
    /// * `WordNotFound` - `editing` does not resolve to an entry
    pub fn upsert_word(
        &mut self,
        draft: &WordDraft,
        editing: Option<WordId>,
    ) -> Result<UpsertOutcome, ValidationError> {
        if self.dictionary.categories.is_empty() {
            return Err(ValidationError::NoCategories);
        }

        let destination = draft.category.as_str();
        if !self.dictionary.categories.contains(destination) {
            return Err(ValidationError::UnknownCategory(destination.to_string()));
        }

        let mut entry = validate_word(draft)?;

        let Some(id) = editing else {
            let id = entry.id;
            self.words_mut(destination)?.push(entry);
            self.active_category = Some(destination.to_string());
            debug!("Created word {} in '{}'", id, destination);
            return Ok(UpsertOutcome::Created(id));
        };

        let (owner, index) = self
            .dictionary
            .locate(id)
            .map(|(owner, index)| (owner.to_string(), index))
            .ok_or(ValidationError::WordNotFound(id))?;

        entry.id = id;

        if owner == destination {
            self.words_mut(&owner)?[index] = entry;
            debug!("Updated word {} in '{}'", id, owner);
            Ok(UpsertOutcome::Updated(id))
        } else {
            self.words_mut(&owner)?.remove(index);
            self.words_mut(destination)?.push(entry);
            self.active_category = Some(destination.to_string());
            debug!("Moved word {} from '{}' to '{}'", id, owner, destination);
            Ok(UpsertOutcome::Moved(id))
        }
    }

    /// Removes an entry from its category
    pub fn delete_word(&mut self, id: WordId) -> Result<WordEntry, ValidationError> {
        let (owner, index) = self
            .dictionary
            .locate(id)
            .map(|(owner, index)| (owner.to_string(), index))
            .ok_or(ValidationError::WordNotFound(id))?;

        let removed = self.words_mut(&owner)?.remove(index);
        debug!("Deleted word {} from '{}'", id, owner);
        Ok(removed)
    }

    /// Looks up an entry and the name of its category
    pub fn word(&self, id: WordId) -> Option<(&str, &WordEntry)> {
        let (owner, index) = self.dictionary.locate(id)?;
        let category = self.dictionary.categories.get(owner)?;
        category.words.get(index).map(|word| (owner, word))
    }

    fn words_mut(&mut self, category: &str) -> Result<&mut Vec<WordEntry>, ValidationError> {
        self.dictionary
            .categories
            .get_mut(category)
            .map(|category| &mut category.words)
            .ok_or_else(|| ValidationError::UnknownCategory(category.to_string()))
    }
}
