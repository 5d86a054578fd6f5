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

//! User interface layer with MVC architecture
//!
//! # Architecture
//!
//! - **Model**: DocumentStore and DictionaryFile (in `core` and `file`)
//! - **View**: GTK4 components (in `components/`, feature `gui`)
//! - **Controller**: Mediates between Model and View (in `controller.rs`)
//!
//! The controller and notifications have no GTK dependency and are shared
//! with the CLI.
//!
//! # Module Structure
//!
//! ```text
//! ui/
//! ├── mod.rs           // This file - exports
//! ├── controller.rs    // MVC Controller
//! ├── notification.rs  // Toast / message model
//! ├── app.rs           // GTK4 Application setup
//! ├── actions.rs       // GTK actions (open, save, add word, ...)
//! ├── file_watcher.rs  // External modification detection
//! ├── builders/        // UI building functions
//! └── components/      // Reusable UI widgets
//! ```

#[cfg(feature = "gui")]
mod actions;
#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
mod builders;
#[cfg(feature = "gui")]
pub mod components;
pub mod controller;
#[cfg(feature = "gui")]
pub mod file_watcher;
pub mod notification;

#[cfg(feature = "gui")]
pub use app::App;
pub use controller::{ConfirmGate, Controller, DeleteOutcome};
pub use notification::{Notification, NotificationKind};

#[cfg(test)]
mod tests;
