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

//! UI Components
//!
//! Reusable GTK4 widgets for the dictionary editor.
//!
//! # Components
//!
//! - `stats_panel.rs` - Category / word counters
//! - `category_list.rs` - Category list with enable switches
//! - `search_bar.rs` - Real-time word filter
//! - `word_list.rs` - Words of the active category with Edit/Delete
//! - `export_panel.rs` - Export checkboxes and format buttons
//! - `word_dialog.rs` - Add/edit word dialog
//! - `category_dialog.rs` - New category dialog
//! - `confirm_dialog.rs` - Delete confirmation
//! - `toast.rs` - Self-removing notifications
//!
//! Lists are rebuilt on every refresh, so row buttons report through
//! callback slots owned by the component rather than capturing handlers
//! directly.

mod category_dialog;
mod category_list;
mod confirm_dialog;
mod export_panel;
mod modal;
mod search_bar;
mod stats_panel;
mod toast;
mod word_dialog;
mod word_list;

use std::{cell::RefCell, rc::Rc};

pub use category_dialog::CategoryDialog;
pub use category_list::CategoryList;
pub use confirm_dialog::ConfirmDialog;
pub use export_panel::{ExportPanel, ExportTarget};
pub use search_bar::SearchBar;
pub use stats_panel::StatsPanel;
pub use toast::ToastArea;
pub use word_dialog::WordDialog;
pub use word_list::WordList;

/// Callback installed after the component is built
type CallbackSlot<A> = Rc<RefCell<Option<Rc<dyn Fn(A)>>>>;

fn new_slot<A>() -> CallbackSlot<A> {
    Rc::new(RefCell::new(None))
}

/// Invokes the slot's callback, if any
///
/// The slot borrow is released before the call so the callback may
/// trigger a refresh that rebuilds the component.
fn fire<A>(slot: &CallbackSlot<A>, arg: A) {
    let callback = slot.borrow().clone();
    if let Some(callback) = callback {
        callback(arg);
    }
}
