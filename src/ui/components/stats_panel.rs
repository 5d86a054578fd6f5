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

//! Statistics strip shown above the lists

use gtk4::{prelude::*, Box as GtkBox, Label, Orientation};

use crate::core::DictionaryStats;

pub struct StatsPanel {
    widget: GtkBox,
    categories_label: Label,
    total_label: Label,
    active_label: Label,
}

impl Default for StatsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsPanel {
    pub fn new() -> Self {
        let widget = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(24)
            .margin_start(10)
            .margin_end(10)
            .margin_top(6)
            .margin_bottom(6)
            .build();
        widget.add_css_class("stats-panel");

        let categories_label = Label::new(None);
        let total_label = Label::new(None);
        let active_label = Label::new(None);

        widget.append(&categories_label);
        widget.append(&total_label);
        widget.append(&active_label);

        let panel = Self {
            widget,
            categories_label,
            total_label,
            active_label,
        };
        panel.update(&DictionaryStats::default());
        panel
    }

    pub fn update(&self, stats: &DictionaryStats) {
        self.categories_label.set_label(&format!("📁 Categories: {}", stats.categories));
        self.total_label.set_label(&format!("📝 Words: {}", stats.total_words));
        self.active_label.set_label(&format!("✅ Active: {}", stats.active_words));
    }

    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }
}
