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

//! Word list component
//!
//! Displays the words of the active category that match the search.
//! Each row shows reading → word, part of speech, description and tags,
//! with Edit and Delete buttons. Rows carry the word id, never a position.

use gtk4::{prelude::*, Align, Box as GtkBox, Button, Label, ListBox, Orientation, ScrolledWindow};

use crate::core::view::WordRow;
use crate::core::{WordId, WordListView};
use crate::ui::components::{fire, new_slot, CallbackSlot};

/// Displays a scrollable list of words
pub struct WordList {
    /// Root widget (scrollable container)
    widget: ScrolledWindow,
    list_box: ListBox,
    on_edit: CallbackSlot<WordId>,
    on_delete: CallbackSlot<WordId>,
}

impl Default for WordList {
    fn default() -> Self {
        Self::new()
    }
}

impl WordList {
    pub fn new() -> Self {
        let widget = ScrolledWindow::builder()
            .hexpand(true)
            .vexpand(true)
            .build();

        let list_box = ListBox::builder()
            .selection_mode(gtk4::SelectionMode::None)
            .build();
        widget.set_child(Some(&list_box));

        Self {
            widget,
            list_box,
            on_edit: new_slot(),
            on_delete: new_slot(),
        }
    }

    /// Rebuilds the list from the rendered view
    pub fn update(&self, view: &WordListView) {
        while let Some(child) = self.list_box.first_child() {
            self.list_box.remove(&child);
        }

        match view {
            WordListView::NoCategorySelected => self.show_placeholder("Select a category"),
            WordListView::NoMatches => self.show_placeholder("No words found"),
            WordListView::Words(rows) => {
                for (index, row) in rows.iter().enumerate() {
                    self.list_box.append(&self.create_row(row, index));
                }
            }
        }
    }

    fn show_placeholder(&self, text: &str) {
        let label = Label::builder()
            .label(text)
            .margin_top(40)
            .margin_bottom(40)
            .build();
        label.add_css_class("dim-label");
        self.list_box.append(&label);
    }

    fn create_row(&self, row: &WordRow, index: usize) -> GtkBox {
        let container = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(20)
            .margin_start(10)
            .margin_end(10)
            .margin_top(5)
            .margin_bottom(5)
            .build();

        if index % 2 == 0 {
            container.add_css_class("even-row");
        } else {
            container.add_css_class("odd-row");
        }

        let text = GtkBox::new(Orientation::Vertical, 2);
        text.set_hexpand(true);

        let main_label = Label::builder()
            .label(format!("{} → {}", row.reading, row.surface))
            .xalign(0.0)
            .build();
        main_label.add_css_class("word-main");
        text.append(&main_label);

        let meta_label = Label::builder().label(&row.part_of_speech).xalign(0.0).build();
        meta_label.add_css_class("dim-label");
        text.append(&meta_label);

        if !row.description.is_empty() {
            let description_label = Label::builder()
                .label(&row.description)
                .xalign(0.0)
                .wrap(true)
                .build();
            text.append(&description_label);
        }

        if !row.tags.is_empty() {
            let tags_label = Label::builder().label(format!("🏷 {}", row.tags)).xalign(0.0).build();
            tags_label.add_css_class("word-tags");
            text.append(&tags_label);
        }

        let edit_button = Button::builder().label("✏️ Edit").valign(Align::Center).build();
        let delete_button = Button::builder().label("🗑️ Delete").valign(Align::Center).build();
        delete_button.add_css_class("destructive-action");

        let id = row.id;
        let on_edit = self.on_edit.clone();
        edit_button.connect_clicked(move |_| fire(&on_edit, id));

        let on_delete = self.on_delete.clone();
        delete_button.connect_clicked(move |_| fire(&on_delete, id));

        container.append(&text);
        container.append(&edit_button);
        container.append(&delete_button);
        container
    }

    /// Connects a callback to every row's Edit button
    pub fn connect_edit<F>(&self, callback: F)
    where
        F: Fn(WordId) + 'static,
    {
        *self.on_edit.borrow_mut() = Some(std::rc::Rc::new(callback));
    }

    /// Connects a callback to every row's Delete button
    pub fn connect_delete<F>(&self, callback: F)
    where
        F: Fn(WordId) + 'static,
    {
        *self.on_delete.borrow_mut() = Some(std::rc::Rc::new(callback));
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &ScrolledWindow {
        &self.widget
    }
}
