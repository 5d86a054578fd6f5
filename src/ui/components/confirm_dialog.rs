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

//! Yes/no confirmation for destructive actions
//!
//! Wraps `AlertDialog` in a nested main loop so it can serve as the
//! controller's synchronous `ConfirmGate`.

use gtk4::{gio, prelude::*, AlertDialog, ApplicationWindow};
use std::cell::Cell;
use std::rc::Rc;

use crate::ui::controller::ConfirmGate;

pub struct ConfirmDialog {
    parent: ApplicationWindow,
    title: String,
    accept_label: String,
}

impl ConfirmDialog {
    pub fn new(parent: &ApplicationWindow, title: &str, accept_label: &str) -> Self {
        Self {
            parent: parent.clone(),
            title: title.to_string(),
            accept_label: accept_label.to_string(),
        }
    }
}

impl ConfirmGate for ConfirmDialog {
    fn confirm(&self, message: &str) -> bool {
        let dialog = AlertDialog::builder()
            .modal(true)
            .message(self.title.as_str())
            .detail(message)
            .buttons(vec!["Cancel", self.accept_label.as_str()])
            .cancel_button(0)
            .default_button(0)
            .build();

        let answer: Rc<Cell<Option<bool>>> = Rc::new(Cell::new(None));
        let answer_for_dialog = answer.clone();

        // 1 = accept button (second button)
        dialog.choose(Some(&self.parent), None::<&gio::Cancellable>, move |response| {
            answer_for_dialog.set(Some(matches!(response, Ok(1))));
        });

        let main_context = glib::MainContext::default();
        while answer.get().is_none() {
            main_context.iteration(true);
        }

        answer.get().unwrap_or(false)
    }
}
