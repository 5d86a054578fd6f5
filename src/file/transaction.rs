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


//! Save transactions
//!
//! A save takes a backup first, then replaces the file atomically. The
//! file is never left half-written.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use atomic_write_file::AtomicWriteFile;
use tracing::{info, warn};

use crate::file::{DictionaryFile, FileError};

/// Writes `bytes` to `path` via a temporary file and rename.
///
/// # Errors
///
/// Returns `FileError::WriteFailed` if the temporary file cannot be
/// created, written or renamed into place. The target is untouched then.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), FileError> {
    let mut file = AtomicWriteFile::options()
        .open(path)
        .map_err(|e| FileError::WriteFailed(format!("Failed to open for atomic write: {}", e)))?;

    file.write_all(bytes)
        .map_err(|e| FileError::WriteFailed(format!("Failed to write content: {}", e)))?;

    file.commit()
        .map_err(|e| FileError::WriteFailed(format!("Failed to commit atomic write: {}", e)))?;

    Ok(())
}

/// One save of a dictionary file, with its backup.
///
/// # Lifecycle
///
/// 1. `begin()` - creates the timestamped backup
/// 2. `commit()` - writes the new content atomically, or
/// 3. `rollback()` - restores the backup
///
/// # Example
///
/// ```no_run
/// use ime_dict_editor::file::DictionaryFile;
///
/// let file = DictionaryFile::new("dictionary.json".into())?;
/// let tx = file.begin_transaction()?;
///
/// match tx.commit("{}") {
///     Ok(()) => println!("Saved"),
///     Err(e) => eprintln!("Save failed: {}", e),
/// }
/// # Ok::<(), ime_dict_editor::file::FileError>(())
/// ```
#[derive(Debug)]
pub struct SaveTransaction<'a> {
    file: &'a DictionaryFile,
    backup_path: PathBuf,
}

impl<'a> SaveTransaction<'a> {
    /// Begins a save by backing up the current file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or the backup cannot be written.
    /// Nothing is modified in that case.
    pub fn begin(file: &'a DictionaryFile) -> Result<Self, FileError> {
        let backup_path = file.create_timestamped_backup()?;

        Ok(Self { file, backup_path })
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    /// Writes `contents` atomically, consuming the transaction.
    ///
    /// The backup stays in the backup directory.
    pub fn commit(self, contents: &str) -> Result<(), FileError> {
        write_atomic(self.file.path(), contents.as_bytes())?;

        info!(
            path = %self.file.path().display(),
            backup = %self.backup_path.display(),
            "Saved dictionary"
        );
        Ok(())
    }

    /// Restores the file to its content when the transaction began.
    ///
    /// Borrows `self`, so a rollback may be retried.
    pub fn rollback(&self) -> Result<(), FileError> {
        let backup = fs::read(&self.backup_path)?;
        write_atomic(self.file.path(), &backup)?;

        warn!(path = %self.file.path().display(), "Rolled back dictionary to backup");
        Ok(())
    }
}
