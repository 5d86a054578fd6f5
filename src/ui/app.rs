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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window. All state lives in the Controller.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Owns Controller
//!   ├─ Builds main window (builders::layout)
//!   ├─ Wires handlers and actions
//!   └─ Polls the file watcher
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, glib, Application, ApplicationWindow, CssProvider};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::ui::{
    actions,
    builders::{build_header_bar, build_main_layout, wire_up_handlers, MainView},
    notification::Notification,
    Controller,
};

/// How often the file watcher is polled
const WATCH_INTERVAL: Duration = Duration::from_millis(500);

/// GTK4 Application for dictionary editing
pub struct App {
    app: Application,
    controller: Rc<Controller>,
    initial_file: Option<PathBuf>,
}

impl App {
    /// Creates the application, optionally opening `initial_file` on start
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ime_dict_editor::ui::App;
    /// use std::path::PathBuf;
    ///
    /// let app = App::new(Some(PathBuf::from("dictionary.json")));
    /// app.run(); // Blocks until window closes
    /// ```
    pub fn new(initial_file: Option<PathBuf>) -> Self {
        let app = Application::builder()
            .application_id("com.tidynest.ime-dict-editor")
            .build();

        Self {
            app,
            controller: Rc::new(Controller::new()),
            initial_file,
        }
    }

    /// Runs the GTK4 main loop; blocks until the application exits
    pub fn run(self) -> glib::ExitCode {
        let controller = self.controller.clone();
        let initial_file = self.initial_file.clone();

        self.app.connect_activate(move |app| {
            Self::build_ui(app, controller.clone(), initial_file.clone());
        });

        // Arguments were already parsed by clap
        self.app.run_with_args::<&str>(&[])
    }

    /// Applies `style.css` to the default display
    fn load_css() {
        let provider = CssProvider::new();
        provider.load_from_string(include_str!("style.css"));

        match gdk::Display::default() {
            Some(display) => gtk4::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            ),
            None => warn!("No display available; skipping custom CSS"),
        }
    }

    fn build_ui(app: &Application, controller: Rc<Controller>, initial_file: Option<PathBuf>) {
        Self::load_css();

        let window = ApplicationWindow::builder()
            .application(app)
            .title("IME Dictionary Editor")
            .default_width(1100)
            .default_height(760)
            .build();

        window.set_titlebar(Some(&build_header_bar()));

        let view = build_main_layout(&window, controller);
        wire_up_handlers(&view);
        actions::setup_actions(app, &view);

        match initial_file {
            Some(path) => actions::open_path(&view, path),
            None => view.refresh(),
        }

        Self::start_watching(view.clone());

        info!("Editor window ready");
        view.notify(Notification::success("📚 IME dictionary editor started"));
        window.present();
    }

    /// Polls for external changes to the open file
    ///
    /// Without unsaved edits the file is reloaded; with them the user is
    /// only warned.
    fn start_watching(view: Rc<MainView>) {
        glib::timeout_add_local(WATCH_INTERVAL, move || {
            let changed = view
                .watcher
                .borrow()
                .as_ref()
                .is_some_and(|watcher| watcher.check_for_changes());

            let own_write = view
                .ignore_changes_until
                .get()
                .is_some_and(|until| Instant::now() < until);

            if changed && !own_write {
                if view.controller.is_modified() {
                    view.notify(Notification::info(
                        "⚠️ File changed on disk; your unsaved edits were kept",
                    ));
                } else {
                    match view.controller.reload() {
                        Ok(_) => view.notify(Notification::info("🔄 File changed on disk and was reloaded")),
                        Err(e) => view.notify_error(&e),
                    }
                    view.refresh();
                }
            }

            glib::ControlFlow::Continue
        });
    }
}
