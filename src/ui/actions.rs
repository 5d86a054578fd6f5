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

//! GTK Action setup for the application
//!
//! Header bar buttons, menu items and keyboard shortcuts all go through
//! these `app.*` actions.

use gtk4::{gio, prelude::*, Application, FileDialog};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::core::{ValidationError, WordDraft};
use crate::error::EditorError;
use crate::ui::{
    builders::MainView,
    components::{CategoryDialog, WordDialog},
    notification::Notification,
};

/// File events within this window after a save are our own
const OWN_WRITE_GRACE: Duration = Duration::from_secs(2);

fn add_action<F>(app: &Application, name: &str, accels: &[&str], handler: F)
where
    F: Fn() + 'static,
{
    let action = gio::SimpleAction::new(name, None);
    action.connect_activate(move |_, _| handler());
    app.add_action(&action);

    if !accels.is_empty() {
        app.set_accels_for_action(&format!("app.{}", name), accels);
    }
}

/// Sets up every application action
pub fn setup_actions(app: &Application, view: &Rc<MainView>) {
    let app_for_quit = app.clone();
    add_action(app, "quit", &["<Control>q"], move || app_for_quit.quit());

    let view_for_open = view.clone();
    add_action(app, "open", &["<Control>o"], move || open_dialog(&view_for_open));

    let view_for_save = view.clone();
    add_action(app, "save", &["<Control>s"], move || {
        if view_for_save.controller.file_path().is_some() {
            save(&view_for_save);
        } else {
            save_as_dialog(&view_for_save);
        }
    });

    let view_for_save_as = view.clone();
    add_action(app, "save-as", &["<Control><Shift>s"], move || save_as_dialog(&view_for_save_as));

    let view_for_reload = view.clone();
    add_action(app, "reload", &[], move || {
        match view_for_reload.controller.reload() {
            Ok(_) => view_for_reload.notify(Notification::success("🔄 Reloaded from disk")),
            Err(e) => view_for_reload.notify_error(&e),
        }
        view_for_reload.refresh();
    });

    let view_for_category = view.clone();
    add_action(app, "add-category", &[], move || add_category(&view_for_category));

    let view_for_word = view.clone();
    add_action(app, "add-word", &["<Control>n"], move || add_word(&view_for_word));
}

/// Opens `path` and resets the view around it
pub fn open_path(view: &MainView, path: PathBuf) {
    match view.controller.open(path) {
        Ok(_) => {
            view.watch_current_file();
            view.search_bar.clear();
            view.notify(Notification::success("✅ File loaded"));
        }
        Err(e) => view.notify_error(&e),
    }
    view.refresh();
}

fn open_dialog(view: &Rc<MainView>) {
    let file_dialog = FileDialog::builder().title("Open Dictionary").build();
    let view_for_dialog = view.clone();

    file_dialog.open(Some(&view.window), None::<&gio::Cancellable>, move |result| {
        match result.ok().and_then(|file| file.path()) {
            Some(path) => open_path(&view_for_dialog, path),
            None => debug!("Open cancelled"),
        }
    });
}

fn save(view: &MainView) {
    view.ignore_changes_until.set(Some(Instant::now() + OWN_WRITE_GRACE));

    match view.controller.save() {
        Ok(_) => view.notify(Notification::success("💾 Dictionary saved")),
        Err(e) => view.notify_error(&e),
    }
    view.refresh();
}

fn save_as_dialog(view: &Rc<MainView>) {
    let file_dialog = FileDialog::builder()
        .title("Save Dictionary")
        .initial_name(crate::export::JSON_FILE_NAME)
        .build();
    let view_for_dialog = view.clone();

    file_dialog.save(Some(&view.window), None::<&gio::Cancellable>, move |result| {
        let Some(path) = result.ok().and_then(|file| file.path()) else {
            debug!("Save cancelled");
            return;
        };

        view_for_dialog.ignore_changes_until.set(Some(Instant::now() + OWN_WRITE_GRACE));
        match view_for_dialog.controller.save_as(path) {
            Ok(_) => {
                view_for_dialog.watch_current_file();
                view_for_dialog.notify(Notification::success("💾 Dictionary saved"));
            }
            Err(e) => view_for_dialog.notify_error(&e),
        }
        view_for_dialog.refresh();
    });
}

fn add_category(view: &MainView) {
    let dialog = CategoryDialog::new(&view.window, view.controller.category_names());

    if let Some((name, description)) = dialog.show_and_wait() {
        match view.controller.add_category(&name, &description) {
            Ok(_) => view.notify(Notification::success("📁 Category added")),
            Err(e) => view.notify_error(&e),
        }
        view.refresh();
    }
}

fn add_word(view: &MainView) {
    let categories = view.controller.category_names();
    if categories.is_empty() {
        view.notify_error(&EditorError::from(ValidationError::NoCategories));
        return;
    }

    let draft = WordDraft {
        category: view
            .controller
            .active_category()
            .unwrap_or_else(|| categories[0].clone()),
        ..WordDraft::default()
    };

    let dialog = WordDialog::new(&view.window, "➕ Add Word", &draft, categories);
    if let Some(draft) = dialog.show_and_wait() {
        match view.controller.submit_word(&draft, None) {
            Ok(_) => view.notify(Notification::success("➕ Word added")),
            Err(e) => view.notify_error(&e),
        }
        view.refresh();
    }
}
