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

//! Shared plumbing for the form dialogs
//!
//! Dialogs run a nested main loop until the user answers, so callers get
//! the result synchronously.

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Button, Label, Orientation, Window};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug, Copy, PartialEq)]
pub(super) enum DialogResponse {
    Save,
    Cancel,
}

/// Response cell shared by a dialog's buttons and its close handler
pub(super) type ResponseCell = Rc<Cell<Option<DialogResponse>>>;

/// Builds the Cancel / Save row and wires both buttons and the window's
/// close button to `response`
pub(super) fn button_row(window: &Window, save_label: &str, response: &ResponseCell) -> GtkBox {
    let button_box = GtkBox::builder()
        .orientation(Orientation::Horizontal)
        .spacing(12)
        .halign(gtk4::Align::End)
        .margin_start(20)
        .margin_end(20)
        .margin_bottom(20)
        .build();

    let cancel_button = Button::builder().label("Cancel").build();
    let save_button = Button::builder().label(save_label).build();
    save_button.add_css_class("suggested-action");

    button_box.append(&cancel_button);
    button_box.append(&save_button);

    {
        let response = response.clone();
        let window = window.clone();
        cancel_button.connect_clicked(move |_| {
            response.set(Some(DialogResponse::Cancel));
            window.close();
        });
    }

    {
        let response = response.clone();
        let window = window.clone();
        save_button.connect_clicked(move |_| {
            response.set(Some(DialogResponse::Save));
            window.set_visible(false);
        });
    }

    // Window X button counts as Cancel
    {
        let response = response.clone();
        window.connect_close_request(move |_| {
            if response.get().is_none() {
                response.set(Some(DialogResponse::Cancel));
            }
            glib::Propagation::Proceed
        });
    }

    button_box
}

/// Presents `window` and spins the main loop until a response arrives
pub(super) fn wait_for_response(window: &Window, response: &ResponseCell) -> DialogResponse {
    response.set(None);
    window.present();

    let main_context = glib::MainContext::default();
    while response.get().is_none() && window.is_visible() {
        main_context.iteration(true);
    }

    response.get().unwrap_or(DialogResponse::Cancel)
}

/// Shows an error message in a modal window and waits for it to close
pub(super) fn show_error(parent: &Window, message: &str) {
    let error_window = Window::builder()
        .title("❌ Invalid Input")
        .modal(true)
        .transient_for(parent)
        .default_width(350)
        .default_height(150)
        .resizable(false)
        .build();

    let vbox = GtkBox::builder()
        .orientation(Orientation::Vertical)
        .spacing(12)
        .margin_start(20)
        .margin_end(20)
        .margin_top(20)
        .margin_bottom(20)
        .build();

    let label = Label::builder()
        .label(message)
        .wrap(true)
        .justify(gtk4::Justification::Center)
        .build();

    let ok_button = Button::builder().label("Ok").halign(gtk4::Align::Center).build();

    vbox.append(&label);
    vbox.append(&ok_button);
    error_window.set_child(Some(&vbox));

    let error_window_clone = error_window.clone();
    ok_button.connect_clicked(move |_| {
        error_window_clone.close();
    });

    error_window.present();

    let main_context = glib::MainContext::default();
    while error_window.is_visible() {
        main_context.iteration(true);
    }
}

/// Right-aligned form label
pub(super) fn field_label(text: &str) -> Label {
    Label::builder().label(text).halign(gtk4::Align::End).build()
}
