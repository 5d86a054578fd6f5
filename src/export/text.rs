//! Tab-separated text export
//!
//! One `reading<TAB>word<TAB>POS<TAB>comment` line per row, no header.
//! The Windows format reuses the same row shape under its banner.

use crate::export::ExportRow;

/// Formats one tab-separated line
pub(crate) fn line(reading: &str, row: &ExportRow<'_>, part_of_speech: &str) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        reading,
        row.word.surface,
        part_of_speech,
        row.word.description_text()
    )
}

pub(crate) fn render(rows: &[ExportRow<'_>]) -> String {
    rows.iter()
        .map(|row| line(&row.word.reading, row, row.word.part_of_speech_label()))
        .collect::<Vec<_>>()
        .join("\n")
}
