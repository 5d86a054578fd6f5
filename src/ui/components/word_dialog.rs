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

//! Add/edit word dialog
//!
//! Fields: reading, word, part of speech (suggestions plus free text),
//! description, tags (comma separated) and destination category. Required
//! fields are checked before the dialog closes; the store validates again
//! on submit.

use gtk4::prelude::*;
use gtk4::{ApplicationWindow, Box as GtkBox, DropDown, Entry, Grid, Orientation, Window};
use std::cell::Cell;
use std::rc::Rc;

use crate::core::validator::validate_word;
use crate::core::{WordDraft, DEFAULT_PART_OF_SPEECH, PART_OF_SPEECH_OPTIONS};
use crate::ui::components::modal::{self, DialogResponse, ResponseCell};

/// Dialog for adding a word or editing an existing one
pub struct WordDialog {
    dialog_window: Window,
    reading_entry: Entry,
    surface_entry: Entry,
    part_of_speech_entry: Entry,
    description_entry: Entry,
    tags_entry: Entry,
    category_dropdown: DropDown,
    categories: Vec<String>,
    response: ResponseCell,
}

impl WordDialog {
    /// Creates the dialog pre-filled from `draft`
    ///
    /// `categories` fills the destination dropdown; `draft.category` is
    /// preselected when present.
    pub fn new(parent: &ApplicationWindow, title: &str, draft: &WordDraft, categories: Vec<String>) -> Self {
        let dialog_window = Window::builder()
            .title(title)
            .modal(true)
            .transient_for(parent)
            .default_width(460)
            .resizable(false)
            .build();

        let grid = Grid::builder()
            .row_spacing(12)
            .column_spacing(12)
            .margin_start(20)
            .margin_end(20)
            .margin_top(20)
            .margin_bottom(20)
            .build();

        let reading_entry = Entry::builder()
            .text(&draft.reading)
            .placeholder_text("e.g. みぎや")
            .hexpand(true)
            .build();
        grid.attach(&modal::field_label("Reading:"), 0, 0, 1, 1);
        grid.attach(&reading_entry, 1, 0, 1, 1);

        let surface_entry = Entry::builder()
            .text(&draft.surface)
            .placeholder_text("e.g. →")
            .hexpand(true)
            .build();
        grid.attach(&modal::field_label("Word:"), 0, 1, 1, 1);
        grid.attach(&surface_entry, 1, 1, 1, 1);

        let part_of_speech = if draft.part_of_speech.trim().is_empty() {
            DEFAULT_PART_OF_SPEECH
        } else {
            draft.part_of_speech.as_str()
        };
        let part_of_speech_entry = Entry::builder().text(part_of_speech).hexpand(true).build();
        let suggestions = DropDown::from_strings(&PART_OF_SPEECH_OPTIONS);
        if let Some(index) = PART_OF_SPEECH_OPTIONS.iter().position(|option| *option == part_of_speech) {
            suggestions.set_selected(index as u32);
        }
        {
            let entry = part_of_speech_entry.clone();
            suggestions.connect_selected_notify(move |dropdown| {
                if let Some(option) = PART_OF_SPEECH_OPTIONS.get(dropdown.selected() as usize) {
                    entry.set_text(option);
                }
            });
        }
        let part_of_speech_box = GtkBox::new(Orientation::Horizontal, 6);
        part_of_speech_box.append(&part_of_speech_entry);
        part_of_speech_box.append(&suggestions);
        grid.attach(&modal::field_label("Part of speech:"), 0, 2, 1, 1);
        grid.attach(&part_of_speech_box, 1, 2, 1, 1);

        let description_entry = Entry::builder()
            .text(&draft.description)
            .placeholder_text("Optional")
            .hexpand(true)
            .build();
        grid.attach(&modal::field_label("Description:"), 0, 3, 1, 1);
        grid.attach(&description_entry, 1, 3, 1, 1);

        let tags_entry = Entry::builder()
            .text(&draft.tags)
            .placeholder_text("Comma separated, e.g. 矢印, 記号")
            .hexpand(true)
            .build();
        grid.attach(&modal::field_label("Tags:"), 0, 4, 1, 1);
        grid.attach(&tags_entry, 1, 4, 1, 1);

        let category_names: Vec<&str> = categories.iter().map(String::as_str).collect();
        let category_dropdown = DropDown::from_strings(&category_names);
        if let Some(index) = categories.iter().position(|name| *name == draft.category) {
            category_dropdown.set_selected(index as u32);
        }
        grid.attach(&modal::field_label("Category:"), 0, 5, 1, 1);
        grid.attach(&category_dropdown, 1, 5, 1, 1);

        let response: ResponseCell = Rc::new(Cell::new(None));
        let button_box = modal::button_row(&dialog_window, "💾 Save", &response);

        let main_box = GtkBox::new(Orientation::Vertical, 0);
        main_box.append(&grid);
        main_box.append(&button_box);
        dialog_window.set_child(Some(&main_box));

        Self {
            dialog_window,
            reading_entry,
            surface_entry,
            part_of_speech_entry,
            description_entry,
            tags_entry,
            category_dropdown,
            categories,
            response,
        }
    }

    fn draft(&self) -> WordDraft {
        let category = self
            .categories
            .get(self.category_dropdown.selected() as usize)
            .cloned()
            .unwrap_or_default();

        WordDraft {
            reading: self.reading_entry.text().to_string(),
            surface: self.surface_entry.text().to_string(),
            part_of_speech: self.part_of_speech_entry.text().to_string(),
            description: self.description_entry.text().to_string(),
            tags: self.tags_entry.text().to_string(),
            category,
        }
    }

    /// Shows the dialog and waits until the user saves valid input or
    /// cancels
    pub fn show_and_wait(self) -> Option<WordDraft> {
        loop {
            match modal::wait_for_response(&self.dialog_window, &self.response) {
                DialogResponse::Save => {
                    let draft = self.draft();
                    match validate_word(&draft) {
                        Ok(_) => {
                            self.dialog_window.close();
                            return Some(draft);
                        }
                        Err(e) => modal::show_error(&self.dialog_window, &e.to_string()),
                    }
                }
                DialogResponse::Cancel => {
                    self.dialog_window.close();
                    return None;
                }
            }
        }
    }
}
