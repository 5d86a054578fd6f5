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


//! Dictionary file persistence with atomic writes and backup support.
//!
//! Key features:
//!
//! - **Atomic writes**: Uses temp-file-then-rename to prevent corruption
//! - **Automatic backups**: Every save creates a timestamped backup first
//! - **Rollback safety**: A failed save leaves the original file untouched
//!
//! # Example
//!
//! ```no_run
//! use ime_dict_editor::file::DictionaryFile;
//!
//! let file = DictionaryFile::new("/home/user/dictionary.json".into())?;
//! let json = file.read()?;
//!
//! file.begin_transaction()?.commit(&json)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod transaction;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, warn};

pub use error::FileError;
pub use transaction::{write_atomic, SaveTransaction};

/// Name of the directory created next to the dictionary for backups
pub const BACKUP_DIR_NAME: &str = "backups";

/// Timestamp appended to backup file names
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H%M%S";

/// A dictionary JSON file on disk plus its backup directory.
#[derive(Clone, Debug)]
pub struct DictionaryFile {
    path: PathBuf,
    backup_dir: PathBuf,
}

impl DictionaryFile {
    /// Opens an existing dictionary file.
    ///
    /// Creates the `backups/` directory next to the file if needed. If the
    /// file is a symlink a warning is logged but the file is accepted.
    ///
    /// # Errors
    ///
    /// Returns `FileError::NotFound` if the file doesn't exist.
    /// Returns `FileError::BackupDirNotWritable` if the backup directory
    /// cannot be created.
    pub fn new(path: PathBuf) -> Result<Self, FileError> {
        if !path.exists() {
            return Err(FileError::NotFound(path));
        }

        if path.read_link().is_ok() {
            warn!(path = %path.display(), "Dictionary file is a symlink");
        }

        // e.g. ~/dict/dictionary.json → ~/dict/backups/
        let backup_dir = path
            .parent()
            .ok_or_else(|| FileError::BackupDirNotWritable(PathBuf::from("Dictionary file has no parent directory")))?
            .join(BACKUP_DIR_NAME);

        if !backup_dir.exists() {
            fs::create_dir_all(&backup_dir).map_err(|_| FileError::BackupDirNotWritable(backup_dir.clone()))?;
        }

        if backup_dir.metadata()?.permissions().readonly() {
            return Err(FileError::BackupDirNotWritable(backup_dir));
        }

        Ok(Self { path, backup_dir })
    }

    /// Creates a new dictionary file with `contents` and opens it.
    ///
    /// # Errors
    ///
    /// Returns `FileError::AlreadyExists` rather than overwriting.
    pub fn create(path: PathBuf, contents: &str) -> Result<Self, FileError> {
        if path.exists() {
            return Err(FileError::AlreadyExists(path));
        }

        write_atomic(&path, contents.as_bytes())?;
        debug!(path = %path.display(), "Created dictionary file");

        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Reads the current file content.
    pub fn read(&self) -> Result<String, FileError> {
        Ok(fs::read_to_string(&self.path)?)
    }

    /// Starts a save; the backup is taken immediately.
    pub fn begin_transaction(&self) -> Result<SaveTransaction<'_>, FileError> {
        SaveTransaction::begin(self)
    }

    pub(crate) fn create_timestamped_backup(&self) -> Result<PathBuf, FileError> {
        let content = fs::read(&self.path)?;
        let timestamp = Local::now().format(BACKUP_TIMESTAMP_FORMAT);

        let stem = format!("{}.{}", self.file_name()?, timestamp);

        // Saves within the same second get a counter instead of overwriting
        let mut backup_path = self.backup_dir.join(&stem);
        let mut attempt = 0;
        while backup_path.exists() {
            attempt += 1;
            backup_path = self.backup_dir.join(format!("{}_{:02}", stem, attempt));
        }

        fs::write(&backup_path, content).map_err(|e| FileError::BackupFailed(e.to_string()))?;

        debug!(backup = %backup_path.display(), "Created backup");
        Ok(backup_path)
    }

    /// Backups of this file, newest first.
    pub fn list_backups(&self) -> Result<Vec<PathBuf>, FileError> {
        let prefix = format!("{}.", self.file_name()?);

        let mut backups: Vec<PathBuf> = fs::read_dir(&self.backup_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .file_name()
                        .and_then(|name| name.to_str())
                        .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        // Timestamps sort lexically
        backups.sort();
        backups.reverse();

        Ok(backups)
    }

    fn file_name(&self) -> Result<&str, FileError> {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| FileError::BackupFailed(format!("Unusable file name: {}", self.path.display())))
    }
}

#[cfg(test)]
mod tests;
