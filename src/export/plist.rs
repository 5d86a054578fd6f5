//! macOS property-list export
//!
//! Produces the array-of-dicts layout accepted by the macOS text
//! replacement import: `phrase` holds the converted word and `shortcut`
//! the reading. Part of speech, comments and categories have no place in
//! this format and are dropped.

use crate::export::ExportRow;

const HEADER: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
    "<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" ",
    "\"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n",
    "<plist version=\"1.0\">\n",
    "<array>"
);

const FOOTER: &str = "</array>\n</plist>";

/// Escapes the five XML special characters
pub(crate) fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn entry(row: &ExportRow<'_>) -> String {
    format!(
        "\t<dict>\n\t\t<key>phrase</key>\n\t\t<string>{}</string>\n\t\t<key>shortcut</key>\n\t\t<string>{}</string>\n\t</dict>",
        escape_xml(&row.word.surface),
        escape_xml(&row.word.reading)
    )
}

pub(crate) fn render(rows: &[ExportRow<'_>]) -> String {
    let entries = rows.iter().map(entry).collect::<Vec<_>>().join("\n");
    format!("{}\n{}\n{}", HEADER, entries, FOOTER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml(r#"a&b<c>"d'"#), "a&amp;b&lt;c&gt;&quot;d&apos;");
        assert_eq!(escape_xml("→"), "→");
    }

    #[test]
    fn test_render_escapes_values() {
        let word = WordEntry {
            reading: "あんど".to_string(),
            surface: "A&B<C".to_string(),
            ..WordEntry::default()
        };
        let rows = [ExportRow { word: &word, category: Some("記号") }];

        let plist = render(&rows);

        assert!(plist.contains("<string>A&amp;B&lt;C</string>"));
        assert!(plist.contains("<key>shortcut</key>\n\t\t<string>あんど</string>"));
        assert!(!plist.contains("記号"), "Category is not part of the plist");
    }

    #[test]
    fn test_render_document_structure() {
        let word = WordEntry {
            reading: "a".to_string(),
            surface: "b".to_string(),
            ..WordEntry::default()
        };
        let rows = [ExportRow { word: &word, category: None }, ExportRow { word: &word, category: None }];

        let plist = render(&rows);

        assert!(plist.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE plist"));
        assert!(plist.contains("<plist version=\"1.0\">\n<array>\n\t<dict>"));
        assert!(plist.ends_with("\t</dict>\n</array>\n</plist>"));
        assert_eq!(plist.matches("<dict>").count(), 2);
    }
}
