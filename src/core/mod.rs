// Copyright 2025 bakri (tidynest@proton.me)
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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the dictionary document model and the operations
//! on it, including:
//! - Type definitions for dictionaries, categories and word entries
//! - The document store (category creation, word upsert/delete)
//! - Form validation
//! - Statistics and view models for the front-ends
//!
//! All business logic is isolated from UI and I/O concerns to enable
//! comprehensive unit testing without requiring a display server.

pub mod stats;
pub mod store;
pub mod types;
pub mod validator;
pub mod view;

pub use stats::DictionaryStats;
pub use store::{DocumentStore, UpsertOutcome};
pub use types::*;
pub use validator::{ValidationError, WordDraft};
pub use view::{render, RenderedView, ViewState, WordListView};

#[cfg(test)]
pub(crate) mod tests;
