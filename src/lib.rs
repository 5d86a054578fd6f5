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

//! IME Dictionary Editor
//!
//! Editor and converter for IME user dictionaries kept as a single JSON
//! document, with exports for the common input methods.
//!
//! # Features
//!
//! - **Lossless JSON:** Unknown keys and category order survive a load/save cycle
//! - **CRUD Operations:** Create categories, add, edit, move and delete words
//! - **Exports:** CSV, TXT, macOS plist and Microsoft IME text files
//! - **Automatic Backups:** Timestamped backups before every save
//! - **Atomic Operations:** Safe file writes with no partial files
//! - **GTK4 Interface:** Desktop editor behind the `gui` feature
//!
//! # Architecture
//!
//! - **`core`:** Document model, store, validation and view models
//! - **`export`:** Word-list export formats
//! - **`file`:** Reading, atomic writes and backups
//! - **`ui`:** Controller shared by the CLI and the GTK4 GUI (MVC pattern)
//!
//! # Examples
//!
//! ## Editing a dictionary file
//!
//! ```no_run
//! use ime_dict_editor::core::WordDraft;
//! use ime_dict_editor::ui::Controller;
//! use std::path::PathBuf;
//!
//! let controller = Controller::open_file(PathBuf::from("dictionary.json"))?;
//!
//! let draft = WordDraft {
//!     reading: "みぎや".to_string(),
//!     surface: "→".to_string(),
//!     category: "記号".to_string(),
//!     ..WordDraft::default()
//! };
//! controller.submit_word(&draft, None)?;
//! controller.save()?;
//! # Ok::<(), ime_dict_editor::error::EditorError>(())
//! ```
//!
//! ## Exporting for macOS
//!
//! ```no_run
//! use ime_dict_editor::export::{ExportFormat, WindowsProfile};
//! use ime_dict_editor::ui::Controller;
//! use std::path::{Path, PathBuf};
//!
//! let controller = Controller::open_file(PathBuf::from("dictionary.json"))?;
//! let output = controller.export_with(ExportFormat::MacPlist, None, WindowsProfile::Editor)?;
//! controller.write_export(&output, Path::new("."))?;
//! # Ok::<(), ime_dict_editor::error::EditorError>(())
//! ```

pub mod core;
pub mod error;
pub mod export;
pub mod file;
pub mod logging;
pub mod ui;

// Re-export commonly used types for convenience
pub use core::{Dictionary, DocumentStore, WordDraft, WordEntry, WordId};
pub use error::EditorError;
