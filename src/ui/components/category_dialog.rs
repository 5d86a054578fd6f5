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

//! New category dialog

use gtk4::prelude::*;
use gtk4::{ApplicationWindow, Box as GtkBox, Entry, Grid, Orientation, Window};
use std::cell::Cell;
use std::rc::Rc;

use crate::core::validator::validate_category_name;
use crate::ui::components::modal::{self, DialogResponse, ResponseCell};

pub struct CategoryDialog {
    dialog_window: Window,
    name_entry: Entry,
    description_entry: Entry,
    existing: Vec<String>,
    response: ResponseCell,
}

impl CategoryDialog {
    /// `existing` is checked for duplicates before the dialog closes
    pub fn new(parent: &ApplicationWindow, existing: Vec<String>) -> Self {
        let dialog_window = Window::builder()
            .title("📁 New Category")
            .modal(true)
            .transient_for(parent)
            .default_width(400)
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

        let name_entry = Entry::builder().placeholder_text("e.g. 記号").hexpand(true).build();
        grid.attach(&modal::field_label("Name:"), 0, 0, 1, 1);
        grid.attach(&name_entry, 1, 0, 1, 1);

        let description_entry = Entry::builder().placeholder_text("Optional").hexpand(true).build();
        grid.attach(&modal::field_label("Description:"), 0, 1, 1, 1);
        grid.attach(&description_entry, 1, 1, 1, 1);

        let response: ResponseCell = Rc::new(Cell::new(None));
        let button_box = modal::button_row(&dialog_window, "➕ Add", &response);

        let main_box = GtkBox::new(Orientation::Vertical, 0);
        main_box.append(&grid);
        main_box.append(&button_box);
        dialog_window.set_child(Some(&main_box));

        Self {
            dialog_window,
            name_entry,
            description_entry,
            existing,
            response,
        }
    }

    /// Returns `(name, description)` or `None` when cancelled
    pub fn show_and_wait(self) -> Option<(String, String)> {
        loop {
            match modal::wait_for_response(&self.dialog_window, &self.response) {
                DialogResponse::Save => {
                    let name = self.name_entry.text().to_string();
                    match validate_category_name(&name, self.existing.iter().map(String::as_str)) {
                        Ok(_) => {
                            self.dialog_window.close();
                            return Some((name, self.description_entry.text().to_string()));
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
