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

//! Search bar component
//!
//! Filters the word list of the active category as the user types.

use gtk4::{prelude::*, SearchEntry};

/// Search bar for filtering words
pub struct SearchBar {
    /// Root widget (search entry)
    widget: SearchEntry,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBar {
    /// Creates a new search bar
    ///
    /// Returns just the widget - the parent wires the search to the
    /// Controller.
    pub fn new() -> Self {
        let widget = SearchEntry::builder()
            .placeholder_text("Search reading, word or description...")
            .hexpand(true)
            .build();

        Self { widget }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &SearchEntry {
        &self.widget
    }

    /// Calls `callback` with the new query whenever it changes
    pub fn connect_changed<F>(&self, callback: F)
    where
        F: Fn(&str) + 'static,
    {
        self.widget.connect_search_changed(move |entry| {
            callback(entry.text().as_str());
        });
    }

    /// Clears the search query
    pub fn clear(&self) {
        self.widget.set_text("");
    }
}
