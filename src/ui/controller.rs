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

//! MVC Controller - Mediates between the document (DocumentStore, file) and
//! the front-ends (CLI commands, GTK4 components)
//!
//! # Responsibilities
//!
//! - Open, reload and save the dictionary file (with backups)
//! - Forward edits to the DocumentStore and track unsaved changes
//! - Hold view state (search text, export checkboxes)
//! - Produce rendered views and export files
//!
//! # Architecture
//!
//! The Controller owns the model but doesn't know about GTK4 widgets. State
//! lives in `RefCell`s so GTK closures can share one `Rc<Controller>`.
//! No borrow is held across a call back into user code.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::{
    render, today, Dictionary, DictionaryStats, DocumentStore, RenderedView, UpsertOutcome,
    ValidationError, ViewState, WordDraft, WordEntry, WordId,
};
use crate::error::EditorError;
use crate::export::{self, ExportFormat, ExportOutput, WindowsProfile, JSON_FILE_NAME, JSON_MIME_TYPE};
use crate::file::{write_atomic, DictionaryFile, FileError};

/// Asks the user to confirm a destructive action
///
/// Implemented by the GUI (modal dialog), the CLI (`y/N` prompt) and by any
/// `Fn(&str) -> bool` closure.
pub trait ConfirmGate {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> ConfirmGate for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Result of a delete request
#[derive(Clone, Debug, PartialEq)]
pub enum DeleteOutcome {
    Deleted(WordEntry),
    /// The user said no; nothing changed
    Declined,
}

/// MVC Controller coordinating the document and the views
#[derive(Debug, Default)]
pub struct Controller {
    store: RefCell<DocumentStore>,
    view_state: RefCell<ViewState>,
    /// Backing file, if the document was opened or saved
    file: RefCell<Option<DictionaryFile>>,
    /// Unsaved changes since the last open/save
    modified: Cell<bool>,
}

impl Controller {
    /// Creates a Controller with an empty, unsaved document
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a Controller for an existing dictionary file
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ime_dict_editor::ui::Controller;
    /// use std::path::PathBuf;
    ///
    /// let controller = Controller::open_file(PathBuf::from("dictionary.json"))?;
    /// println!("{} words", controller.stats().total_words);
    /// # Ok::<(), ime_dict_editor::error::EditorError>(())
    /// ```
    pub fn open_file(path: PathBuf) -> Result<Self, EditorError> {
        let controller = Self::new();
        controller.open(path)?;
        Ok(controller)
    }

    // ========================================================================
    // File operations
    // ========================================================================

    /// Loads a dictionary file, replacing the current document
    ///
    /// On any error the current document and file stay as they were.
    pub fn open(&self, path: PathBuf) -> Result<DictionaryStats, EditorError> {
        let file = DictionaryFile::new(path)?;
        let json = file.read()?;

        self.store.borrow_mut().import_json(&json)?;

        info!(path = %file.path().display(), "Opened dictionary");
        *self.file.borrow_mut() = Some(file);
        self.modified.set(false);

        Ok(self.stats())
    }

    /// Re-reads the backing file, discarding unsaved changes
    pub fn reload(&self) -> Result<DictionaryStats, EditorError> {
        let path = self.file_path().ok_or(FileError::NoFileOpen)?;
        self.open(path)
    }

    /// Replaces the document with `json` (file stays attached)
    ///
    /// # Errors
    ///
    /// `EditorError::Parse` leaves the previous document intact.
    pub fn import_json(&self, json: &str) -> Result<DictionaryStats, EditorError> {
        self.store.borrow_mut().import_json(json)?;
        self.modified.set(true);
        Ok(self.stats())
    }

    /// Saves to the backing file through a backup transaction
    ///
    /// # Errors
    ///
    /// `FileError::NoFileOpen` when the document was never opened or saved.
    pub fn save(&self) -> Result<PathBuf, EditorError> {
        let file = self.file.borrow().clone().ok_or(FileError::NoFileOpen)?;
        let date = today();
        let json = self.store.borrow().stamped_json(&date)?;

        file.begin_transaction()?.commit(&json)?;
        self.store.borrow_mut().set_updated_date(&date);
        self.modified.set(false);

        Ok(file.path().to_path_buf())
    }

    /// Saves to `path` and makes it the backing file
    ///
    /// An existing file at `path` is backed up before being replaced.
    pub fn save_as(&self, path: PathBuf) -> Result<PathBuf, EditorError> {
        let date = today();
        let json = self.store.borrow().stamped_json(&date)?;

        let file = if path.exists() {
            let file = DictionaryFile::new(path)?;
            file.begin_transaction()?.commit(&json)?;
            file
        } else {
            DictionaryFile::create(path, &json)?
        };

        let saved = file.path().to_path_buf();
        self.store.borrow_mut().set_updated_date(&date);
        *self.file.borrow_mut() = Some(file);
        self.modified.set(false);

        info!(path = %saved.display(), "Saved dictionary as new file");
        Ok(saved)
    }

    /// Serialises the document as a `dictionary.json` download
    pub fn export_json(&self) -> Result<ExportOutput, EditorError> {
        let json = self.store.borrow_mut().export_json(&today())?;
        let stats = self.stats();

        Ok(ExportOutput {
            bytes: json.into_bytes(),
            file_name: JSON_FILE_NAME,
            mime_type: JSON_MIME_TYPE,
            categories: stats.categories,
            rows: stats.total_words,
        })
    }

    pub fn file_path(&self) -> Option<PathBuf> {
        self.file.borrow().as_ref().map(|file| file.path().to_path_buf())
    }

    pub fn is_modified(&self) -> bool {
        self.modified.get()
    }

    /// Backups of the backing file, newest first (empty without a file)
    pub fn list_backups(&self) -> Result<Vec<PathBuf>, EditorError> {
        match self.file.borrow().as_ref() {
            Some(file) => Ok(file.list_backups()?),
            None => Ok(Vec::new()),
        }
    }

    // ========================================================================
    // Document edits
    // ========================================================================

    /// Adds a category and makes it active; returns the trimmed name
    pub fn add_category(&self, name: &str, description: &str) -> Result<String, EditorError> {
        let name = self.store.borrow_mut().add_category(name, description)?;
        self.modified.set(true);
        Ok(name)
    }

    pub fn set_category_enabled(&self, name: &str, enabled: bool) -> Result<(), EditorError> {
        self.store.borrow_mut().set_category_enabled(name, enabled)?;
        self.modified.set(true);
        Ok(())
    }

    /// Makes `name` the active category (view state only, not a modification)
    pub fn select_category(&self, name: &str) -> Result<(), EditorError> {
        Ok(self.store.borrow_mut().select_category(name)?)
    }

    /// Validates and applies the word form
    ///
    /// `editing` is the id of the entry being edited, `None` for a new word.
    pub fn submit_word(&self, draft: &WordDraft, editing: Option<WordId>) -> Result<UpsertOutcome, EditorError> {
        let outcome = self.store.borrow_mut().upsert_word(draft, editing)?;
        self.modified.set(true);
        Ok(outcome)
    }

    /// Deletes a word after asking `gate`
    ///
    /// Declining leaves the document untouched and is not an error.
    pub fn delete_word(&self, id: WordId, gate: &dyn ConfirmGate) -> Result<DeleteOutcome, EditorError> {
        let message = {
            let store = self.store.borrow();
            let (_, word) = store.word(id).ok_or(ValidationError::WordNotFound(id))?;
            format!("Delete \"{}\" ({})?", word.surface, word.reading)
        };

        if !gate.confirm(&message) {
            debug!(%id, "Delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        let removed = self.store.borrow_mut().delete_word(id)?;
        self.modified.set(true);
        Ok(DeleteOutcome::Deleted(removed))
    }

    // ========================================================================
    // View state
    // ========================================================================

    pub fn set_search(&self, text: &str) {
        self.view_state.borrow_mut().search = text.to_string();
    }

    pub fn search(&self) -> String {
        self.view_state.borrow().search.clone()
    }

    pub fn set_export_checked(&self, category: &str, checked: bool) {
        self.view_state.borrow_mut().set_export_checked(category, checked);
    }

    pub fn select_all_exports(&self) {
        self.view_state.borrow_mut().select_all_exports();
    }

    pub fn deselect_all_exports(&self) {
        let store = self.store.borrow();
        self.view_state.borrow_mut().deselect_all_exports(store.dictionary());
    }

    /// Checked export categories in document order
    pub fn selected_exports(&self) -> Vec<String> {
        self.view_state.borrow().selected_exports(self.store.borrow().dictionary())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Renders the full view for the current state
    pub fn render(&self) -> RenderedView {
        render(&self.store.borrow(), &self.view_state.borrow())
    }

    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats::compute(self.store.borrow().dictionary())
    }

    pub fn active_category(&self) -> Option<String> {
        self.store.borrow().active_category().map(str::to_string)
    }

    pub fn category_names(&self) -> Vec<String> {
        self.store.borrow().dictionary().categories.names().map(str::to_string).collect()
    }

    /// Looks up a word and its category
    pub fn word(&self, id: WordId) -> Option<(String, WordEntry)> {
        self.store
            .borrow()
            .word(id)
            .map(|(category, word)| (category.to_string(), word.clone()))
    }

    /// Edit form contents for an existing word
    pub fn draft_for(&self, id: WordId) -> Option<WordDraft> {
        self.word(id)
            .map(|(category, word)| WordDraft::from_entry(&word, &category))
    }

    /// Runs `f` with read access to the document
    pub fn with_dictionary<R>(&self, f: impl FnOnce(&Dictionary) -> R) -> R {
        f(self.store.borrow().dictionary())
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Exports the categories checked in the export panel
    pub fn export(&self, format: ExportFormat, profile: WindowsProfile) -> Result<ExportOutput, EditorError> {
        let selection = self.selected_exports();
        self.export_with(format, Some(selection.as_slice()), profile)
    }

    /// Exports an explicit selection, or falls back when `selection` is `None`
    ///
    /// See `export::collect_rows()` for the fallback order.
    pub fn export_with(
        &self,
        format: ExportFormat,
        selection: Option<&[String]>,
        profile: WindowsProfile,
    ) -> Result<ExportOutput, EditorError> {
        let store = self.store.borrow();
        Ok(export::export(
            store.dictionary(),
            format,
            selection,
            store.active_category(),
            profile,
        )?)
    }

    /// Writes an export into `dir` under its fixed file name
    pub fn write_export(&self, output: &ExportOutput, dir: &Path) -> Result<PathBuf, EditorError> {
        let path = dir.join(output.file_name);
        write_atomic(&path, &output.bytes)?;

        info!(path = %path.display(), rows = output.rows, "Wrote export");
        Ok(path)
    }
}
