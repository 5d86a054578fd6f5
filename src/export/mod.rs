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

//! Export of word entries to IME dictionary formats
//!
//! Every format works on the same row list produced by `collect_rows()`:
//!
//! - **CSV**: BOM-prefixed, always-quoted, with a category column
//! - **TXT**: tab-separated reading/word/POS/comment lines
//! - **macOS**: XML property list of phrase/shortcut pairs
//! - **Windows**: Microsoft IME banner followed by tab-separated lines
//!
//! # Example
//!
//! ```
//! use ime_dict_editor::core::DocumentStore;
//! use ime_dict_editor::export::{export, ExportFormat, WindowsProfile};
//!
//! let mut store = DocumentStore::new();
//! store.import_json(r#"{ "カテゴリ": { "矢印": { "単語リスト": [ { "読み": "みぎ", "単語": "→" } ] } } }"#)?;
//!
//! let selection = vec!["矢印".to_string()];
//! let output = export(store.dictionary(), ExportFormat::Txt, Some(selection.as_slice()), None, WindowsProfile::Editor)?;
//! assert_eq!(output.bytes, "みぎ\t→\t名詞\t".as_bytes());
//! assert_eq!(output.rows, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod csv;
mod plist;
mod text;
mod windows;

use std::fmt;

use regex::Regex;
use tracing::info;

use crate::core::types::{Dictionary, WordEntry};
use crate::core::validator::ValidationError;

pub use windows::{map_part_of_speech_for_windows, WindowsProfile};

/// File name used when saving the JSON document
pub const JSON_FILE_NAME: &str = "dictionary.json";

/// MIME type of the JSON document
pub const JSON_MIME_TYPE: &str = "application/json";

/// Longest category suffix used in batch export file names
pub const BATCH_SUFFIX_MAX_CHARS: usize = 30;

/// Word-list export formats
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExportFormat {
    Csv,
    Txt,
    MacPlist,
    Windows,
}

impl ExportFormat {
    /// All formats, in menu order
    pub const ALL: [ExportFormat; 4] = [Self::Csv, Self::Txt, Self::MacPlist, Self::Windows];

    /// Fixed download file name
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Csv => "dictionary.csv",
            Self::Txt => "dictionary.txt",
            Self::MacPlist => "dictionary.plist",
            Self::Windows => "dictionary_windows.txt",
        }
    }

    /// MIME type declared for the download
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv;charset=utf-8",
            Self::Txt | Self::Windows => "text/plain;charset=utf-8",
            Self::MacPlist => "application/x-plist",
        }
    }

    /// File name suffix used by batch exports (`<stem><suffix>`)
    pub fn batch_suffix(&self) -> &'static str {
        match self {
            Self::Csv => ".csv",
            Self::Txt => ".txt",
            Self::MacPlist => ".plist",
            Self::Windows => "_windows.txt",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "CSV"),
            Self::Txt => write!(f, "TXT"),
            Self::MacPlist => write!(f, "macOS plist"),
            Self::Windows => write!(f, "Windows"),
        }
    }
}

/// One word as it appears in an export
///
/// The category annotation exists only here; the stored entry is untouched.
#[derive(Clone, Copy, Debug)]
pub struct ExportRow<'a> {
    pub word: &'a WordEntry,
    pub category: Option<&'a str>,
}

/// Rows chosen for an export, plus the categories they came from
#[derive(Clone, Debug)]
pub struct RowSelection<'a> {
    /// Category names reported in banners and summaries
    pub categories: Vec<&'a str>,
    pub rows: Vec<ExportRow<'a>>,
}

/// A finished export, ready to be written or offered for download
#[derive(Clone, Debug, PartialEq)]
pub struct ExportOutput {
    pub bytes: Vec<u8>,
    pub file_name: &'static str,
    pub mime_type: &'static str,
    /// Number of categories reported for the export
    pub categories: usize,
    /// Number of word rows written
    pub rows: usize,
}

/// Chooses the rows to export
///
/// * `Some(selection)` - every enabled, existing category named in
///   `selection`, each row annotated with its category. An empty slice
///   is rejected.
/// * `None` with an active category - that category's words as they are
///   (no enabled check, no annotation).
/// * `None` otherwise - every enabled category, annotated.
///
/// # Errors
///
/// * `EmptySelection` - `selection` is `Some` but empty
/// * `NothingToExport` - the selection resolves to zero rows
pub fn collect_rows<'a>(
    dictionary: &'a Dictionary,
    selection: Option<&'a [String]>,
    active_category: Option<&'a str>,
) -> Result<RowSelection<'a>, ValidationError> {
    let chosen = match (selection, active_category) {
        (Some([]), _) => return Err(ValidationError::EmptySelection),
        (Some(names), _) => RowSelection {
            categories: names.iter().map(String::as_str).collect(),
            rows: names
                .iter()
                .filter_map(|name| {
                    dictionary
                        .categories
                        .get(name)
                        .filter(|category| category.is_enabled())
                        .map(|category| (name.as_str(), category))
                })
                .flat_map(|(name, category)| annotated(name, &category.words))
                .collect(),
        },
        (None, Some(active)) => match dictionary.categories.get(active) {
            Some(category) => RowSelection {
                categories: vec![active],
                rows: category
                    .words
                    .iter()
                    .map(|word| ExportRow { word, category: None })
                    .collect(),
            },
            None => all_enabled(dictionary),
        },
        (None, None) => all_enabled(dictionary),
    };

    if chosen.rows.is_empty() {
        return Err(ValidationError::NothingToExport);
    }

    Ok(chosen)
}

fn annotated<'a>(name: &'a str, words: &'a [WordEntry]) -> impl Iterator<Item = ExportRow<'a>> {
    words.iter().map(move |word| ExportRow {
        word,
        category: Some(name),
    })
}

fn all_enabled(dictionary: &Dictionary) -> RowSelection<'_> {
    let mut chosen = RowSelection {
        categories: Vec::new(),
        rows: Vec::new(),
    };

    for (name, category) in dictionary.categories.iter().filter(|(_, c)| c.is_enabled()) {
        chosen.categories.push(name);
        chosen.rows.extend(annotated(name, &category.words));
    }

    chosen
}

/// Renders already-selected rows in the given format
pub fn render_rows(format: ExportFormat, selection: &RowSelection<'_>, profile: WindowsProfile) -> Vec<u8> {
    match format {
        ExportFormat::Csv => csv::render(&selection.rows).into_bytes(),
        ExportFormat::Txt => text::render(&selection.rows).into_bytes(),
        ExportFormat::MacPlist => plist::render(&selection.rows).into_bytes(),
        ExportFormat::Windows => windows::render(selection, profile),
    }
}

/// Selects rows and renders them in one step
///
/// See `collect_rows()` for the selection rules. `profile` only affects
/// the Windows format.
pub fn export(
    dictionary: &Dictionary,
    format: ExportFormat,
    selection: Option<&[String]>,
    active_category: Option<&str>,
    profile: WindowsProfile,
) -> Result<ExportOutput, ValidationError> {
    let chosen = collect_rows(dictionary, selection, active_category)?;
    let bytes = render_rows(format, &chosen, profile);

    info!(
        format = %format,
        categories = chosen.categories.len(),
        rows = chosen.rows.len(),
        "Exported dictionary"
    );

    let mime_type = match (format, profile) {
        (ExportFormat::Windows, WindowsProfile::Native) => "text/plain;charset=utf-16le",
        _ => format.mime_type(),
    };

    Ok(ExportOutput {
        bytes,
        file_name: format.file_name(),
        mime_type,
        categories: chosen.categories.len(),
        rows: chosen.rows.len(),
    })
}

/// Parses a comma-separated category filter
///
/// Names are trimmed; blanks and repeats are dropped, first one wins.
pub fn parse_category_list(input: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in input.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        if !names.iter().any(|seen| seen == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Reorders a category filter to follow the document
///
/// Names the dictionary knows come first, in document order. Unknown names
/// follow in the order given so they are still reported.
///
/// ```
/// use ime_dict_editor::core::DocumentStore;
/// use ime_dict_editor::export::{in_document_order, parse_category_list};
///
/// let mut store = DocumentStore::new();
/// store.import_json(r#"{ "カテゴリ": { "a": {}, "b": {} } }"#)?;
///
/// let filter = parse_category_list("x, b, a, b");
/// assert_eq!(in_document_order(store.dictionary(), &filter), vec!["a", "b", "x"]);
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn in_document_order(dictionary: &Dictionary, names: &[String]) -> Vec<String> {
    let known = dictionary
        .categories
        .names()
        .filter(|name| names.iter().any(|wanted| wanted == name))
        .map(str::to_string);
    let unknown = names
        .iter()
        .filter(|name| !dictionary.categories.contains(name))
        .cloned();

    let mut ordered: Vec<String> = Vec::new();
    for name in known.chain(unknown) {
        if !ordered.contains(&name) {
            ordered.push(name);
        }
    }
    ordered
}

/// File stem for a batch export of every format
///
/// With a category filter the names are appended as `_a_b`, cut to
/// `BATCH_SUFFIX_MAX_CHARS` characters, with path-unsafe characters
/// replaced by `_`.
///
/// ```
/// use ime_dict_editor::export::batch_file_stem;
///
/// let stem = batch_file_stem("dict", &["記号".to_string(), "a/b".to_string()])?;
/// assert_eq!(stem, "dict_記号_a_b");
/// # Ok::<(), regex::Error>(())
/// ```
pub fn batch_file_stem(stem: &str, categories: &[String]) -> Result<String, regex::Error> {
    if categories.is_empty() {
        return Ok(stem.to_string());
    }

    let unsafe_chars = Regex::new(r#"[/\\:*?"<>|\s]"#)?;
    let joined: String = categories.join("_").chars().take(BATCH_SUFFIX_MAX_CHARS).collect();

    Ok(format!("{}_{}", stem, unsafe_chars.replace_all(&joined, "_")))
}

#[cfg(test)]
mod tests;
