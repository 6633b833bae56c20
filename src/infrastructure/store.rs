use chrono::NaiveDate;

use crate::domain::error::StoreError;
use crate::domain::{DiaryEntry, Journal};

use super::session::SessionStore;

pub const ENTRIES_KEY: &str = "secret_diary_data";

/// Persists the journal in the session store. Every mutation serializes
/// the whole collection back; there are no partial writes.
pub struct EntryStore<'a, S: SessionStore> {
    session: &'a S,
}

impl<'a, S: SessionStore> EntryStore<'a, S> {
    pub fn new(session: &'a S) -> Self {
        Self { session }
    }

    /// Missing or malformed data yields an empty journal, never an error.
    pub fn load(&self) -> Journal {
        match self.session.get(ENTRIES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<DiaryEntry>>(&raw) {
                Ok(entries) => Journal::from_entries(entries),
                Err(_) => Journal::new(),
            },
            _ => Journal::new(),
        }
    }

    pub fn add(
        &self,
        journal: &mut Journal,
        date: NaiveDate,
        title: String,
        content: String,
    ) -> Result<DiaryEntry, StoreError> {
        let entry = DiaryEntry::new(date, title, content);
        journal.add(entry.clone());
        self.persist(journal)?;
        Ok(entry)
    }

    /// Returns whether the entry existed; an absent id is a persisted no-op.
    pub fn update(
        &self,
        journal: &mut Journal,
        id: &str,
        title: String,
        content: String,
    ) -> Result<bool, StoreError> {
        let found = journal.update(id, title, content);
        self.persist(journal)?;
        Ok(found)
    }

    pub fn delete(&self, journal: &mut Journal, id: &str) -> Result<bool, StoreError> {
        let removed = journal.remove(id);
        self.persist(journal)?;
        Ok(removed)
    }

    /// Replaces the collection wholesale (import path — no merging).
    pub fn replace(
        &self,
        journal: &mut Journal,
        entries: Vec<DiaryEntry>,
    ) -> Result<(), StoreError> {
        *journal = Journal::from_entries(entries);
        self.persist(journal)
    }

    fn persist(&self, journal: &Journal) -> Result<(), StoreError> {
        let json = serde_json::to_string(journal.entries())?;
        self.session.set(ENTRIES_KEY, &json)
    }
}
