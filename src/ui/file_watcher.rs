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

//! Watches the open dictionary file for changes made by other programs
//!
//! Saves replace the file by rename, which drops inotify watches on the
//! file itself, so the parent directory is watched and events are filtered
//! by path.

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::{
    path::{Path, PathBuf},
    sync::mpsc::{channel, Receiver},
};

/// Non-blocking change detector for one file
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    path: PathBuf,
    rx: Receiver<notify::Result<Event>>,
}

impl FileWatcher {
    pub fn new(path: &Path) -> notify::Result<Self> {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        let directory = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        watcher.watch(directory, RecursiveMode::NonRecursive)?;

        Ok(FileWatcher {
            _watcher: watcher,
            path: path.to_path_buf(),
            rx,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drains pending events; true if any touched the watched file
    pub fn check_for_changes(&self) -> bool {
        let mut changed = false;

        while let Ok(event_result) = self.rx.try_recv() {
            if let Ok(event) = event_result {
                let relevant = matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_));
                if relevant && event.paths.iter().any(|p| p.file_name() == self.path.file_name()) {
                    changed = true;
                }
            }
        }

        changed
    }
}
