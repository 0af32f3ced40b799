//! Plain-text table rendering for the view action.

use crate::faq::FaqEntry;

/// Column headers, in display order. There is no id column; ids only
/// surface in selection lists and the add confirmation line.
const HEADERS: [&str; 4] = ["Question", "Answer", "Category", "Language"];

/// Render entries as an aligned text table.
///
/// Cells longer than `max_field_width` characters are truncated with a
/// trailing `...`. Widths are measured in characters, not bytes, so Urdu
/// content never gets split mid-codepoint.
#[must_use]
pub fn render_table(entries: &[FaqEntry], max_field_width: usize) -> String {
    let rows: Vec<[String; 4]> = entries
        .iter()
        .map(|entry| {
            [
                truncate(&entry.question, max_field_width),
                truncate(&entry.answer, max_field_width),
                truncate(&entry.category, max_field_width),
                truncate(&entry.language.to_string(), max_field_width),
            ]
        })
        .collect();

    let mut widths: [usize; 4] = [0; 4];
    for (width, header) in widths.iter_mut().zip(HEADERS.iter()) {
        *width = header.chars().count();
    }
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format_row(&HEADERS.map(String::from), &widths));
    out.push('\n');
    out.push_str(&separator(&widths));
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
    }
    out
}

/// Truncate to `max_chars` characters, marking the cut with `...`.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let kept: String = text.chars().take(max_chars - 3).collect();
    format!("{kept}...")
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let mut parts = Vec::with_capacity(cells.len());
    for (cell, &width) in cells.iter().zip(widths.iter()) {
        parts.push(format!("{cell:<width$}"));
    }
    parts.join(" | ").trim_end().to_string()
}

fn separator(widths: &[usize; 4]) -> String {
    widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("-+-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faq::Language;

    fn sample_entry(question: &str, answer: &str) -> FaqEntry {
        FaqEntry::new(question, answer, "Admissions", Language::English)
    }

    #[test]
    fn test_render_table_has_headers() {
        let entries = vec![sample_entry("What is the deadline?", "March 31")];
        let table = render_table(&entries, 48);

        let mut lines = table.lines();
        let header = lines.next().unwrap();
        assert!(header.contains("Question"));
        assert!(header.contains("Answer"));
        assert!(header.contains("Category"));
        assert!(header.contains("Language"));
        assert!(lines.next().unwrap().starts_with('-'));
    }

    #[test]
    fn test_render_table_omits_id() {
        let entries = vec![sample_entry("What is the deadline?", "March 31")];
        let table = render_table(&entries, 48);

        assert!(!table.contains(&entries[0].id));
    }

    #[test]
    fn test_render_table_contains_fields() {
        let entries = vec![sample_entry("What is the deadline?", "March 31")];
        let table = render_table(&entries, 48);

        assert!(table.contains("What is the deadline?"));
        assert!(table.contains("March 31"));
        assert!(table.contains("Admissions"));
        assert!(table.contains("English"));
    }

    #[test]
    fn test_render_table_truncates_long_cells() {
        let long = "a".repeat(60);
        let entries = vec![sample_entry(&long, "short")];
        let table = render_table(&entries, 10);

        assert!(table.contains("aaaaaaa..."));
        assert!(!table.contains(&long));
    }

    #[test]
    fn test_render_table_alignment() {
        let entries = vec![
            sample_entry("Short?", "A rather longer answer"),
            sample_entry("A much longer question here", "Brief"),
        ];
        let table = render_table(&entries, 48);

        let lines: Vec<&str> = table.lines().collect();
        let separator_width = lines[1].len();
        // Each row fits within the separator, which spans the widest cells.
        for line in &lines {
            assert!(line.len() <= separator_width);
        }
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let urdu = "داخلے کی آخری تاریخ کیا ہے؟";
        let cut = truncate(urdu, 10);
        assert_eq!(cut.chars().count(), 10);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_truncate_leaves_short_text_alone() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly ten", 11), "exactly ten");
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate("abcdef", 2), "ab");
        assert_eq!(truncate("abcdef", 3), "abc");
    }

    #[test]
    fn test_render_table_empty_entries() {
        let table = render_table(&[], 48);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Question"));
    }
}
