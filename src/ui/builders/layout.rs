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

//! Layout builder
//!
//! Creates the main window content and the `MainView` that redraws it.

use gtk4::{prelude::*, ApplicationWindow, Box as GtkBox, Orientation, Overlay, Paned};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;
use tracing::warn;

use crate::error::EditorError;
use crate::ui::{
    components::{CategoryList, ExportPanel, SearchBar, StatsPanel, ToastArea, WordList},
    file_watcher::FileWatcher,
    notification::Notification,
    Controller,
};

const APP_TITLE: &str = "IME Dictionary Editor";

/// Every component of the main window plus the controller behind them
pub struct MainView {
    pub window: ApplicationWindow,
    pub controller: Rc<Controller>,
    pub stats_panel: StatsPanel,
    pub category_list: CategoryList,
    pub search_bar: SearchBar,
    pub word_list: WordList,
    pub export_panel: ExportPanel,
    pub toasts: ToastArea,
    /// Watcher for the open file, replaced when the file changes
    pub watcher: RefCell<Option<FileWatcher>>,
    /// File events before this instant come from our own saves
    pub ignore_changes_until: Cell<Option<Instant>>,
}

impl MainView {
    /// Redraws every component from the controller state
    pub fn refresh(&self) {
        let view = self.controller.render();

        self.stats_panel.update(&view.stats);
        self.category_list.update(&view.categories);
        self.word_list.update(&view.words);
        self.export_panel.update(&view.export_choices);
        self.update_title();
    }

    fn update_title(&self) {
        let file_name = self
            .controller
            .file_path()
            .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "Untitled".to_string());
        let marker = if self.controller.is_modified() { "● " } else { "" };

        self.window.set_title(Some(&format!("{}{} - {}", marker, file_name, APP_TITLE)));
    }

    pub fn notify(&self, notification: Notification) {
        self.toasts.show(&notification);
    }

    pub fn notify_error(&self, error: &EditorError) {
        warn!(%error, "Operation failed");
        self.notify(Notification::from_error(error));
    }

    /// Points the file watcher at the controller's current file
    pub fn watch_current_file(&self) {
        let watcher = self.controller.file_path().and_then(|path| match FileWatcher::new(&path) {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not watch dictionary file");
                None
            }
        });

        *self.watcher.borrow_mut() = watcher;
    }
}

/// Builds the main window layout
///
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │ stats                                        │
/// ├──────────────┬───────────────────────────────┤
/// │ categories   │ search                        │
/// │              │ words                         │
/// │              ├───────────────────────────────┤
/// │              │ export                        │
/// └──────────────┴───────────────────────────────┘
/// ```
/// Toasts float over the top-right corner.
pub fn build_main_layout(window: &ApplicationWindow, controller: Rc<Controller>) -> Rc<MainView> {
    let main_vbox = GtkBox::new(Orientation::Vertical, 0);

    let stats_panel = StatsPanel::new();
    main_vbox.append(stats_panel.widget());

    let paned = Paned::new(Orientation::Horizontal);

    // LEFT: categories
    let category_list = CategoryList::new();
    paned.set_start_child(Some(category_list.widget()));
    paned.set_resize_start_child(false);
    paned.set_shrink_start_child(false);

    // RIGHT: search + words + export
    let right_vbox = GtkBox::new(Orientation::Vertical, 10);
    right_vbox.set_margin_start(10);
    right_vbox.set_margin_end(10);
    right_vbox.set_margin_bottom(10);

    let search_bar = SearchBar::new();
    right_vbox.append(search_bar.widget());

    let word_list = WordList::new();
    right_vbox.append(word_list.widget());

    let export_panel = ExportPanel::new();
    right_vbox.append(export_panel.widget());

    paned.set_end_child(Some(&right_vbox));
    paned.set_resize_end_child(true);
    paned.set_position(260);
    paned.set_vexpand(true);

    main_vbox.append(&paned);

    let toasts = ToastArea::new();
    let overlay = Overlay::new();
    overlay.set_child(Some(&main_vbox));
    overlay.add_overlay(toasts.widget());

    window.set_child(Some(&overlay));

    Rc::new(MainView {
        window: window.clone(),
        controller,
        stats_panel,
        category_list,
        search_bar,
        word_list,
        export_panel,
        toasts,
        watcher: RefCell::new(None),
        ignore_changes_until: Cell::new(None),
    })
}
