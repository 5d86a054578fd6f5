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

//! Toast notifications
//!
//! Each toast removes itself after `NOTIFICATION_LIFETIME`. Several may be
//! visible at once; there is no queue.

use gtk4::{prelude::*, Align, Box as GtkBox, Label, Orientation};

use crate::ui::notification::{Notification, NOTIFICATION_LIFETIME};

pub struct ToastArea {
    widget: GtkBox,
}

impl Default for ToastArea {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastArea {
    pub fn new() -> Self {
        let widget = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(6)
            .halign(Align::End)
            .valign(Align::Start)
            .margin_top(12)
            .margin_end(12)
            .can_target(false)
            .build();

        Self { widget }
    }

    /// Shows `notification` for a few seconds
    pub fn show(&self, notification: &Notification) {
        let label = Label::builder()
            .label(&notification.message)
            .wrap(true)
            .max_width_chars(50)
            .build();
        label.add_css_class("toast");
        label.add_css_class(notification.kind.css_class());

        self.widget.append(&label);

        let container = self.widget.clone();
        glib::timeout_add_local_once(NOTIFICATION_LIFETIME, move || {
            if label.parent().is_some() {
                container.remove(&label);
            }
        });
    }

    /// Overlay child placed over the main layout
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }
}
