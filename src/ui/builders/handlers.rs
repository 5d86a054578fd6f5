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

//! Event handler setup
//!
//! Wires component callbacks to the Controller:
//! - Category selection and enable switches
//! - Search
//! - Word Edit/Delete buttons
//! - Export checkboxes and format buttons

use gtk4::{gio, prelude::*, FileDialog};
use std::rc::Rc;
use tracing::debug;

use crate::file::write_atomic;
use crate::ui::{
    builders::MainView,
    components::{ConfirmDialog, ExportTarget, WordDialog},
    controller::DeleteOutcome,
    notification::Notification,
};

/// Wires up all event handlers for the main UI
pub fn wire_up_handlers(view: &Rc<MainView>) {
    // ============================================================================
    // Categories
    // ============================================================================
    let view_for_select = view.clone();
    view.category_list.connect_selected(move |name| {
        match view_for_select.controller.select_category(name) {
            Ok(()) => view_for_select.refresh(),
            Err(e) => view_for_select.notify_error(&e),
        }
    });

    let view_for_toggle = view.clone();
    view.category_list.connect_toggled(move |name, enabled| {
        if let Err(e) = view_for_toggle.controller.set_category_enabled(name, enabled) {
            view_for_toggle.notify_error(&e);
        }
        view_for_toggle.refresh();
    });

    // ============================================================================
    // Search
    // ============================================================================
    let view_for_search = view.clone();
    view.search_bar.connect_changed(move |query| {
        debug!(query, "Search changed");
        view_for_search.controller.set_search(query);
        view_for_search.refresh();
    });

    // ============================================================================
    // Word Edit / Delete
    // ============================================================================
    let view_for_edit = view.clone();
    view.word_list.connect_edit(move |id| {
        let controller = &view_for_edit.controller;
        let Some(draft) = controller.draft_for(id) else {
            return;
        };

        let dialog = WordDialog::new(&view_for_edit.window, "✏️ Edit Word", &draft, controller.category_names());
        if let Some(edited) = dialog.show_and_wait() {
            match controller.submit_word(&edited, Some(id)) {
                Ok(_) => view_for_edit.notify(Notification::success("✏️ Word updated")),
                Err(e) => view_for_edit.notify_error(&e),
            }
            view_for_edit.refresh();
        }
    });

    let view_for_delete = view.clone();
    view.word_list.connect_delete(move |id| {
        let gate = ConfirmDialog::new(&view_for_delete.window, "Delete Word?", "Delete");

        match view_for_delete.controller.delete_word(id, &gate) {
            Ok(DeleteOutcome::Deleted(_)) => {
                view_for_delete.notify(Notification::success("🗑️ Word deleted"));
                view_for_delete.refresh();
            }
            Ok(DeleteOutcome::Declined) => {}
            Err(e) => view_for_delete.notify_error(&e),
        }
    });

    // ============================================================================
    // Export
    // ============================================================================
    let view_for_check = view.clone();
    view.export_panel.connect_checked(move |name, checked| {
        view_for_check.controller.set_export_checked(name, checked);
    });

    let view_for_all = view.clone();
    view.export_panel.connect_select_all(move || {
        view_for_all.controller.select_all_exports();
        view_for_all.refresh();
    });

    let view_for_none = view.clone();
    view.export_panel.connect_deselect_all(move || {
        view_for_none.controller.deselect_all_exports();
        view_for_none.refresh();
    });

    let view_for_export = view.clone();
    view.export_panel.connect_export(move |target| {
        export_to_file(&view_for_export, target);
    });
}

/// Builds the export, then asks where to write it
fn export_to_file(view: &Rc<MainView>, target: ExportTarget) {
    let result = match target {
        ExportTarget::Words(format) => view.controller.export(format, view.export_panel.windows_profile()),
        ExportTarget::Json => view.controller.export_json(),
    };

    let output = match result {
        Ok(output) => output,
        Err(e) => {
            view.notify_error(&e);
            return;
        }
    };

    let file_dialog = FileDialog::builder()
        .title("Export Dictionary")
        .initial_name(output.file_name)
        .build();

    let view = view.clone();
    let window = view.window.clone();

    file_dialog.save(Some(&window), None::<&gio::Cancellable>, move |result| {
        let Some(path) = result.ok().and_then(|file| file.path()) else {
            debug!("Export cancelled");
            return;
        };

        if let Err(e) = write_atomic(&path, &output.bytes) {
            view.notify_error(&e.into());
            return;
        }

        let notification = match target {
            ExportTarget::Words(format) => Notification::exported(format, &output),
            ExportTarget::Json => Notification::success("💾 JSON file saved"),
        };
        view.notify(notification);
    });
}
