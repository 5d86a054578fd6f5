//! CSV export
//!
//! UTF-8 with a byte-order mark so spreadsheet applications detect the
//! encoding. Every field is quoted; embedded quotes are doubled.

use crate::export::ExportRow;

const BOM: char = '\u{FEFF}';

const HEADER: &str = r#""読み","単語","品詞","説明","タグ","カテゴリ""#;

/// Quotes one field, doubling embedded double quotes
pub(crate) fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

pub(crate) fn render(rows: &[ExportRow<'_>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(HEADER.to_string());

    for row in rows {
        let tags = row.word.tag_list().join(";");
        let fields = [
            row.word.reading.as_str(),
            row.word.surface.as_str(),
            row.word.part_of_speech_label(),
            row.word.description_text(),
            tags.as_str(),
            row.category.unwrap_or(""),
        ];

        lines.push(fields.iter().map(|field| quote_field(field)).collect::<Vec<_>>().join(","));
    }

    format!("{}{}", BOM, lines.join("\n"))
}
