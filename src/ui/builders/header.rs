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

//! Header bar builder
//!
//! File buttons on the left, editing buttons and the menu on the right.
//! Every button triggers an `app.*` action set up in `actions.rs`.

use gtk4::{gio::Menu, prelude::WidgetExt, Button, HeaderBar, MenuButton};

fn action_button(label: &str, action: &str, tooltip: &str) -> Button {
    Button::builder()
        .label(label)
        .action_name(action)
        .tooltip_text(tooltip)
        .build()
}

/// Builds the application header bar
pub fn build_header_bar() -> HeaderBar {
    let header_bar = HeaderBar::new();

    let open_button = action_button("📂 Open", "app.open", "Open a dictionary JSON file (Ctrl+O)");
    let save_button = action_button("💾 Save", "app.save", "Save with a backup of the previous version (Ctrl+S)");
    header_bar.pack_start(&open_button);
    header_bar.pack_start(&save_button);

    let menu = Menu::new();
    menu.append(Some("Save As..."), Some("app.save-as"));
    menu.append(Some("Reload from Disk"), Some("app.reload"));
    menu.append(Some("Quit"), Some("app.quit"));

    let menu_button = MenuButton::new();
    menu_button.set_icon_name("open-menu-symbolic");
    menu_button.set_menu_model(Some(&menu));

    let add_word_button = action_button("➕ Add Word", "app.add-word", "Add a word to a category (Ctrl+N)");
    add_word_button.add_css_class("suggested-action");
    let add_category_button = action_button("📁 New Category", "app.add-category", "Create a category");

    header_bar.pack_end(&menu_button);
    header_bar.pack_end(&add_word_button);
    header_bar.pack_end(&add_category_button);

    header_bar
}
