use chrono::NaiveDate;

use crate::domain::DiaryEntry;

const WRAP_WIDTH: usize = 72;
const PAGE_LINES: usize = 48;

pub struct DiaryDocument {
    pub filename: String,
    pub body: String,
}

/// Renders the journal as a paginated plain-text document: a title page
/// header, then one block per entry, newest first. Pages are separated by
/// form feeds.
pub fn render(entries: &[DiaryEntry], today: NaiveDate) -> DiaryDocument {
    let mut sorted: Vec<&DiaryEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut lines: Vec<String> = Vec::new();
    lines.push(center("Secret Diary"));
    lines.push(String::new());
    lines.push(center(&format!(
        "Exported on {}",
        today.format("%B %-d, %Y")
    )));
    lines.push(String::new());
    lines.push(String::new());

    for entry in sorted {
        lines.push(entry.date.format("%A, %B %-d, %Y").to_string());
        lines.push(entry.display_title().to_string());
        lines.push(String::new());
        lines.extend(wrap(&entry.content, WRAP_WIDTH));
        lines.push(String::new());
        lines.push(String::new());
    }

    DiaryDocument {
        filename: format!("secret-diary-{}.txt", today.format("%Y-%m-%d")),
        body: paginate(&lines),
    }
}

fn center(text: &str) -> String {
    format!("{text:^width$}", width = WRAP_WIDTH)
        .trim_end()
        .to_string()
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            out.push(String::new());
            continue;
        }
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line = word.to_string();
            } else if line.chars().count() + 1 + word.chars().count() <= width {
                line.push(' ');
                line.push_str(word);
            } else {
                out.push(line);
                line = word.to_string();
            }
        }
        if !line.is_empty() {
            out.push(line);
        }
    }
    out
}

fn paginate(lines: &[String]) -> String {
    let mut body = lines
        .chunks(PAGE_LINES)
        .map(|page| page.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\u{c}\n");
    body.push('\n');
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn entry(d: &str, title: &str, content: &str) -> DiaryEntry {
        DiaryEntry::new(date(d), title.into(), content.into())
    }

    #[test]
    fn test_filename_embeds_date() {
        let doc = render(&[], date("2024-06-01"));
        assert_eq!(doc.filename, "secret-diary-2024-06-01.txt");
    }

    #[test]
    fn test_title_page_header() {
        let doc = render(&[], date("2024-06-01"));
        assert!(doc.body.contains("Secret Diary"));
        assert!(doc.body.contains("Exported on June 1, 2024"));
    }

    #[test]
    fn test_entries_render_newest_first_with_long_dates() {
        let entries = vec![
            entry("2024-01-01", "Older", "a"),
            entry("2024-03-01", "Newer", "b"),
        ];
        let doc = render(&entries, date("2024-06-01"));

        let newer = doc.body.find("Friday, March 1, 2024").unwrap();
        let older = doc.body.find("Monday, January 1, 2024").unwrap();
        assert!(newer < older);
    }

    #[test]
    fn test_untitled_fallback() {
        let doc = render(&[entry("2024-01-01", "", "a")], date("2024-06-01"));
        assert!(doc.body.contains("Untitled Entry"));
    }

    #[test]
    fn test_content_wraps_at_width() {
        let long = "word ".repeat(100);
        let doc = render(&[entry("2024-01-01", "T", long.trim())], date("2024-06-01"));
        for line in doc.body.lines() {
            assert!(line.chars().count() <= WRAP_WIDTH, "line too long: {line:?}");
        }
    }

    #[test]
    fn test_long_journal_paginates() {
        let entries: Vec<DiaryEntry> = (1..=28)
            .map(|day| entry(&format!("2024-01-{day:02}"), "Day", "one line"))
            .collect();
        let doc = render(&entries, date("2024-06-01"));
        assert!(doc.body.contains('\u{c}'));
    }
}
