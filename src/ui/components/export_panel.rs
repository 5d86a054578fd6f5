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

//! Export panel component
//!
//! A checkbox per category (all checked by default), select all / none,
//! one button per output format, and a toggle for the Windows IME native
//! profile.

use gtk4::{prelude::*, Box as GtkBox, Button, CheckButton, Frame, Label, Orientation, ScrolledWindow};
use std::rc::Rc;

use crate::core::view::ExportChoice;
use crate::export::{ExportFormat, WindowsProfile};
use crate::ui::components::{fire, new_slot, CallbackSlot};

/// What an export button produces
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExportTarget {
    Words(ExportFormat),
    /// The whole document as JSON
    Json,
}

pub struct ExportPanel {
    widget: Frame,
    checks_box: GtkBox,
    select_all_button: Button,
    deselect_all_button: Button,
    native_check: CheckButton,
    on_check: CallbackSlot<(String, bool)>,
    on_export: CallbackSlot<ExportTarget>,
}

impl Default for ExportPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportPanel {
    pub fn new() -> Self {
        let widget = Frame::builder().label("📤 Export").margin_start(10).margin_end(10).build();

        let vbox = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(8)
            .margin_start(10)
            .margin_end(10)
            .margin_top(10)
            .margin_bottom(10)
            .build();

        let selection_row = GtkBox::new(Orientation::Horizontal, 6);
        let select_all_button = Button::with_label("Select all");
        let deselect_all_button = Button::with_label("Select none");
        selection_row.append(&select_all_button);
        selection_row.append(&deselect_all_button);
        vbox.append(&selection_row);

        let checks_box = GtkBox::new(Orientation::Vertical, 4);
        let scrolled = ScrolledWindow::builder()
            .min_content_height(120)
            .vexpand(true)
            .child(&checks_box)
            .build();
        vbox.append(&scrolled);

        let native_check = CheckButton::builder()
            .label("Windows: IME tool format (UTF-16)")
            .tooltip_text("Map parts of speech to ones the Windows IME accepts and encode as UTF-16LE")
            .build();
        vbox.append(&native_check);

        let on_export: CallbackSlot<ExportTarget> = new_slot();
        let buttons = GtkBox::new(Orientation::Horizontal, 6);
        let targets = [
            ("CSV", ExportTarget::Words(ExportFormat::Csv)),
            ("TXT", ExportTarget::Words(ExportFormat::Txt)),
            ("🍎 macOS", ExportTarget::Words(ExportFormat::MacPlist)),
            ("🪟 Windows", ExportTarget::Words(ExportFormat::Windows)),
            ("💾 JSON", ExportTarget::Json),
        ];
        for (label, target) in targets {
            let button = Button::with_label(label);
            let on_export = on_export.clone();
            button.connect_clicked(move |_| fire(&on_export, target));
            buttons.append(&button);
        }
        vbox.append(&buttons);

        widget.set_child(Some(&vbox));

        Self {
            widget,
            checks_box,
            select_all_button,
            deselect_all_button,
            native_check,
            on_check: new_slot(),
            on_export,
        }
    }

    /// Rebuilds the category checkboxes
    pub fn update(&self, choices: &[ExportChoice]) {
        while let Some(child) = self.checks_box.first_child() {
            self.checks_box.remove(&child);
        }

        if choices.is_empty() {
            let label = Label::new(Some("No categories"));
            label.add_css_class("dim-label");
            self.checks_box.append(&label);
            return;
        }

        for choice in choices {
            let check = CheckButton::builder()
                .label(format!("{} ({})", choice.name, choice.word_count))
                .active(choice.checked)
                .build();
            if !choice.description.is_empty() {
                check.set_tooltip_text(Some(&choice.description));
            }

            let name = choice.name.clone();
            let on_check = self.on_check.clone();
            check.connect_toggled(move |check| {
                fire(&on_check, (name.clone(), check.is_active()));
            });

            self.checks_box.append(&check);
        }
    }

    /// Profile chosen for the Windows format
    pub fn windows_profile(&self) -> WindowsProfile {
        if self.native_check.is_active() {
            WindowsProfile::Native
        } else {
            WindowsProfile::Editor
        }
    }

    pub fn connect_checked<F>(&self, callback: F)
    where
        F: Fn(&str, bool) + 'static,
    {
        *self.on_check.borrow_mut() = Some(Rc::new(move |(name, checked): (String, bool)| callback(&name, checked)));
    }

    pub fn connect_select_all<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.select_all_button.connect_clicked(move |_| callback());
    }

    pub fn connect_deselect_all<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.deselect_all_button.connect_clicked(move |_| callback());
    }

    /// Connects a callback fired by the format buttons
    pub fn connect_export<F>(&self, callback: F)
    where
        F: Fn(ExportTarget) + 'static,
    {
        *self.on_export.borrow_mut() = Some(Rc::new(callback));
    }

    pub fn widget(&self) -> &Frame {
        &self.widget
    }
}
