use chrono::NaiveDate;

use super::entry::DiaryEntry;

/// In-memory entry collection. Presented newest-first; insertion order is
/// kept among entries sharing a date (stable sort).
#[derive(Debug, Clone, PartialEq)]
pub struct Journal {
    entries: Vec<DiaryEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Wraps entries as stored, without reordering them.
    pub fn from_entries(entries: Vec<DiaryEntry>) -> Self {
        Self { entries }
    }

    pub fn add(&mut self, entry: DiaryEntry) {
        self.entries.push(entry);
        self.entries.sort_by(|a, b| b.date.cmp(&a.date));
    }

    /// Replaces title/content of the entry with the given id and refreshes
    /// its `updated_at`. Returns false (leaving the collection unchanged)
    /// when no entry matches.
    pub fn update(&mut self, id: &str, title: String, content: String) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.apply_edit(title, content);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() < before
    }

    pub fn find_by_date(&self, date: NaiveDate) -> Option<&DiaryEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    pub fn entries(&self) -> &[DiaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::new()
    }
}
