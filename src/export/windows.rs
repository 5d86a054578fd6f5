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

//! Microsoft IME dictionary export
//!
//! A five-line `!` banner, a blank line, then TXT-shaped rows.
//!
//! Two profiles exist:
//! - `Editor`: UTF-8, rows exactly as stored (what the editor downloads)
//! - `Native`: what the Microsoft IME dictionary tool imports directly.
//!   UTF-16LE with BOM, part of speech narrowed to labels the IME accepts,
//!   and the `読み_Windows` reading override honoured when present.

use crate::export::{text, ExportRow, RowSelection};

/// Key of the optional Windows-specific reading on a word entry
pub const WINDOWS_READING_KEY: &str = "読み_Windows";

/// Output flavour of the Windows export
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum WindowsProfile {
    #[default]
    Editor,
    Native,
}

/// Maps a part of speech to one the Windows IME accepts
///
/// Verbs, adjectives and adverbs cannot be registered as such and fall
/// back to nouns, as does anything unknown.
pub fn map_part_of_speech_for_windows(part_of_speech: &str) -> &'static str {
    match part_of_speech {
        "記号" | "短縮よみ" => "短縮よみ",
        "人名" => "人名",
        "地名" => "地名",
        "顔文字" => "顔文字",
        "サ変名詞" => "サ変名詞",
        _ => "名詞",
    }
}

fn banner(categories: &[&str]) -> Vec<String> {
    vec![
        "!Microsoft IME Dictionary Tool".to_string(),
        "!Version=10.0".to_string(),
        "!CharSet=UTF-16LE".to_string(),
        "!Format=<Reading>\t<Word>\t<POS>\t<Comment>".to_string(),
        format!("!Categories: {}", categories.join(", ")),
        String::new(),
    ]
}

fn native_line(row: &ExportRow<'_>) -> String {
    let reading = row
        .word
        .extra
        .get(WINDOWS_READING_KEY)
        .and_then(|value| value.as_str())
        .filter(|reading| !reading.is_empty())
        .unwrap_or(&row.word.reading);

    text::line(reading, row, map_part_of_speech_for_windows(row.word.part_of_speech_label()))
}

/// Encodes text as UTF-16LE with a byte-order mark
pub(crate) fn encode_utf16le(content: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    bytes.extend(content.encode_utf16().flat_map(u16::to_le_bytes));
    bytes
}

pub(crate) fn render(selection: &RowSelection<'_>, profile: WindowsProfile) -> Vec<u8> {
    let mut lines = banner(&selection.categories);

    match profile {
        WindowsProfile::Editor => lines.extend(
            selection
                .rows
                .iter()
                .map(|row| text::line(&row.word.reading, row, row.word.part_of_speech_label())),
        ),
        WindowsProfile::Native => lines.extend(selection.rows.iter().map(native_line)),
    }

    let content = lines.join("\n");

    match profile {
        WindowsProfile::Editor => content.into_bytes(),
        WindowsProfile::Native => encode_utf16le(&content),
    }
}
