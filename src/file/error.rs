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


use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or saving dictionary files.
#[derive(Debug, Error)]
pub enum FileError {
    /// Dictionary file does not exist.
    #[error("Dictionary file not found: {0}")]
    NotFound(PathBuf),
    /// Dictionary file already exists (refusing to overwrite on create).
    #[error("Dictionary file already exists: {0}")]
    AlreadyExists(PathBuf),
    /// Backup directory cannot be created or written to.
    #[error("Backup directory not writable: {0}")]
    BackupDirNotWritable(PathBuf),
    /// Failed to create backup file.
    #[error("Failed to create backup: {0}")]
    BackupFailed(String),
    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),
    /// The controller has no file to save to.
    #[error("No dictionary file is open")]
    NoFileOpen,
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
