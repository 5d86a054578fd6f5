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

//! Category list component
//!
//! One row per category: name, description, word count and a switch for
//! the enabled flag. Activating a row makes that category active.

use gtk4::{prelude::*, Align, Box as GtkBox, Label, ListBox, Orientation, ScrolledWindow, Switch};
use std::{cell::RefCell, rc::Rc};

use crate::core::view::CategoryRow;
use crate::ui::components::{fire, new_slot, CallbackSlot};

/// Scrollable list of categories
pub struct CategoryList {
    widget: ScrolledWindow,
    list_box: ListBox,
    /// Names of the displayed rows, by row index
    names: Rc<RefCell<Vec<String>>>,
    on_select: CallbackSlot<String>,
    on_toggle: CallbackSlot<(String, bool)>,
}

impl Default for CategoryList {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryList {
    pub fn new() -> Self {
        let widget = ScrolledWindow::builder()
            .vexpand(true)
            .min_content_width(240)
            .build();

        let list_box = ListBox::builder()
            .selection_mode(gtk4::SelectionMode::Single)
            .activate_on_single_click(true)
            .build();
        list_box.add_css_class("category-list");
        widget.set_child(Some(&list_box));

        let names: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let on_select = new_slot();

        {
            let names = names.clone();
            let on_select = on_select.clone();
            list_box.connect_row_activated(move |_list_box, row| {
                let name = usize::try_from(row.index())
                    .ok()
                    .and_then(|index| names.borrow().get(index).cloned());

                if let Some(name) = name {
                    fire(&on_select, name);
                }
            });
        }

        Self {
            widget,
            list_box,
            names,
            on_select,
            on_toggle: new_slot(),
        }
    }

    /// Rebuilds the rows
    pub fn update(&self, rows: &[CategoryRow]) {
        while let Some(child) = self.list_box.first_child() {
            self.list_box.remove(&child);
        }

        *self.names.borrow_mut() = rows.iter().map(|row| row.name.clone()).collect();

        for row in rows {
            self.list_box.append(&self.create_row(row));
        }

        let active = rows.iter().position(|row| row.active);
        let selected = active.and_then(|index| i32::try_from(index).ok()).and_then(|index| self.list_box.row_at_index(index));
        self.list_box.select_row(selected.as_ref());
    }

    fn create_row(&self, row: &CategoryRow) -> GtkBox {
        let container = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(10)
            .margin_start(8)
            .margin_end(8)
            .margin_top(4)
            .margin_bottom(4)
            .build();

        if !row.enabled {
            container.add_css_class("disabled-category");
        }

        let text = GtkBox::new(Orientation::Vertical, 2);
        text.set_hexpand(true);

        let name_label = Label::builder()
            .label(format!("{} ({})", row.name, row.word_count))
            .xalign(0.0)
            .build();
        name_label.add_css_class("category-name");
        text.append(&name_label);

        if !row.description.is_empty() {
            let description_label = Label::builder().label(&row.description).xalign(0.0).build();
            description_label.add_css_class("dim-label");
            text.append(&description_label);
        }

        let switch = Switch::builder()
            .active(row.enabled)
            .valign(Align::Center)
            .tooltip_text("Include in active words and default exports")
            .build();

        let name = row.name.clone();
        let on_toggle = self.on_toggle.clone();
        switch.connect_active_notify(move |switch| {
            fire(&on_toggle, (name.clone(), switch.is_active()));
        });

        container.append(&text);
        container.append(&switch);
        container
    }

    /// Connects a callback fired when a category row is activated
    pub fn connect_selected<F>(&self, callback: F)
    where
        F: Fn(&str) + 'static,
    {
        *self.on_select.borrow_mut() = Some(Rc::new(move |name: String| callback(&name)));
    }

    /// Connects a callback fired when an enabled switch changes
    pub fn connect_toggled<F>(&self, callback: F)
    where
        F: Fn(&str, bool) + 'static,
    {
        *self.on_toggle.borrow_mut() = Some(Rc::new(move |(name, enabled): (String, bool)| callback(&name, enabled)));
    }

    pub fn widget(&self) -> &ScrolledWindow {
        &self.widget
    }
}
