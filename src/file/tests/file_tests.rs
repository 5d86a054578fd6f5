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
use std::path::PathBuf;

use tempfile::TempDir;

use crate::file::{DictionaryFile, FileError, BACKUP_DIR_NAME};

/// Helper: Creates a temporary dictionary file
fn create_test_file() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dictionary.json");
    fs::write(&path, r#"{ "カテゴリ": {} }"#).unwrap();
    (temp_dir, path)
}

#[test]
fn test_new_with_existing_file() {
    let (_temp_dir, path) = create_test_file();

    let file = DictionaryFile::new(path.clone()).unwrap();

    assert_eq!(file.path(), path);
    assert!(file.backup_dir().is_dir(), "Backup directory should be created");
    assert_eq!(file.backup_dir(), path.parent().unwrap().join(BACKUP_DIR_NAME));
}

#[test]
fn test_new_with_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.json");

    match DictionaryFile::new(path.clone()) {
        Err(FileError::NotFound(missing)) => assert_eq!(missing, path),
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
}

#[test]
fn test_create_writes_contents_and_refuses_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("new.json");

    let file = DictionaryFile::create(path.clone(), "{}").unwrap();
    assert_eq!(file.read().unwrap(), "{}");

    let again = DictionaryFile::create(path, "{ }");
    assert!(matches!(again, Err(FileError::AlreadyExists(_))));
    assert_eq!(file.read().unwrap(), "{}", "Existing file must not change");
}

#[test]
fn test_backup_name_format() {
    let (_temp_dir, path) = create_test_file();
    let file = DictionaryFile::new(path).unwrap();

    let backup = file.create_timestamped_backup().unwrap();
    let name = backup.file_name().unwrap().to_str().unwrap();

    let timestamp = name.strip_prefix("dictionary.json.").unwrap();
    assert!(
        chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d_%H%M%S").is_ok(),
        "Timestamp should parse: {}",
        timestamp
    );
    assert_eq!(fs::read_to_string(&backup).unwrap(), r#"{ "カテゴリ": {} }"#);
}

#[test]
fn test_list_backups_newest_first_and_filtered() {
    let (_temp_dir, path) = create_test_file();
    let file = DictionaryFile::new(path).unwrap();

    // Backups of another file in the same directory are ignored
    fs::write(file.backup_dir().join("other.json.2020-01-01_000000"), "x").unwrap();
    fs::write(file.backup_dir().join("dictionary.json.2020-01-01_000000"), "old").unwrap();
    fs::write(file.backup_dir().join("dictionary.json.2021-06-01_120000"), "new").unwrap();

    let backups = file.list_backups().unwrap();

    assert_eq!(backups.len(), 2);
    assert!(backups[0].ends_with("dictionary.json.2021-06-01_120000"));
    assert!(backups[1].ends_with("dictionary.json.2020-01-01_000000"));
}

#[test]
fn test_backups_in_same_second_do_not_overwrite() {
    let (_temp_dir, path) = create_test_file();
    let file = DictionaryFile::new(path.clone()).unwrap();

    let first = file.create_timestamped_backup().unwrap();
    fs::write(&path, "second").unwrap();
    let second = file.create_timestamped_backup().unwrap();
    fs::write(&path, "third").unwrap();
    let third = file.create_timestamped_backup().unwrap();

    assert_ne!(first, second);
    assert_ne!(second, third);
    assert_eq!(fs::read_to_string(&first).unwrap(), r#"{ "カテゴリ": {} }"#);
    assert_eq!(fs::read_to_string(&second).unwrap(), "second");

    let backups = file.list_backups().unwrap();
    assert_eq!(backups.len(), 3);
    assert_eq!(backups[0], third, "Newest backup should come first");
}
