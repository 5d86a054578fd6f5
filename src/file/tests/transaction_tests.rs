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


use std::fs;

use tempfile::TempDir;

use crate::file::{write_atomic, DictionaryFile};

// ============================================================================
// SaveTransaction Tests
// ============================================================================

#[test]
fn test_transaction_basic_flow() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dictionary.json");
    fs::write(&path, "original").unwrap();
    let file = DictionaryFile::new(path.clone()).unwrap();

    let tx = file.begin_transaction().unwrap();
    assert_eq!(file.list_backups().unwrap().len(), 1, "Begin should create one backup");

    tx.commit("updated").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    let backups = file.list_backups().unwrap();
    assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "original", "Backup keeps old content");
}

#[test]
fn test_transaction_rollback_restores_original() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dictionary.json");
    fs::write(&path, "original").unwrap();
    let file = DictionaryFile::new(path.clone()).unwrap();

    let tx = file.begin_transaction().unwrap();

    // Simulate an external write after the backup was taken
    fs::write(&path, "clobbered").unwrap();
    tx.rollback().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "original");
}

#[test]
fn test_begin_fails_when_file_vanished() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dictionary.json");
    fs::write(&path, "original").unwrap();
    let file = DictionaryFile::new(path.clone()).unwrap();

    fs::remove_file(&path).unwrap();

    assert!(file.begin_transaction().is_err());
    assert!(!path.exists(), "Failed begin must not create the file");
}

#[test]
fn test_write_atomic_replaces_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dictionary.csv");

    write_atomic(&path, b"first").unwrap();
    write_atomic(&path, "二回目".as_bytes()).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "二回目");
}
