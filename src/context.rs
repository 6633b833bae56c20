use anyhow::Result;
use chrono::NaiveDate;
use std::path::Path;

use crate::config::Config;
use crate::domain::error::{StoreError, TransferError};
use crate::domain::transfer::{self, DiaryData};
use crate::domain::{DiaryEntry, Journal};
use crate::infrastructure::document::{self, DiaryDocument};
use crate::infrastructure::{AccessGate, EntryStore, FileSessionStore, SessionStore};

/// Which screen the user sees. `Loading` only exists while the persisted
/// gate state is read at startup; it always resolves within `load`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Locked,
    Unlocked,
}

/// Holds the session store, the in-memory journal, and the current screen.
/// All state flows through here; handlers never touch the store directly.
pub struct DiaryContext<S: SessionStore> {
    session: S,
    journal: Journal,
    screen: Screen,
}

pub struct ImportOutcome {
    pub entries: usize,
    pub password_replaced: bool,
}

impl DiaryContext<FileSessionStore> {
    pub fn open(config_dir: &Path) -> Result<Self> {
        let config = Config::load(config_dir)?;
        let session = FileSessionStore::new(config.session_path);
        Ok(Self::load(session)?)
    }
}

impl<S: SessionStore> DiaryContext<S> {
    /// Cold start: reads the persisted gate state once and resolves
    /// `Loading` into `Locked` or `Unlocked`. The journal is only brought
    /// into memory when the session is already unlocked.
    pub fn load(session: S) -> Result<Self, StoreError> {
        let mut ctx = Self {
            session,
            journal: Journal::new(),
            screen: Screen::Loading,
        };

        if AccessGate::new(&ctx.session).is_unlocked()? {
            ctx.journal = EntryStore::new(&ctx.session).load();
            ctx.screen = Screen::Unlocked;
        } else {
            ctx.screen = Screen::Locked;
        }

        Ok(ctx)
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_unlocked(&self) -> bool {
        self.screen == Screen::Unlocked
    }

    pub fn has_password(&self) -> Result<bool, StoreError> {
        AccessGate::new(&self.session).has_password()
    }

    pub fn entries(&self) -> &[DiaryEntry] {
        self.journal.entries()
    }

    pub fn set_password(&mut self, password: &str) -> Result<(), StoreError> {
        AccessGate::new(&self.session).set_password(password)?;
        self.journal = EntryStore::new(&self.session).load();
        self.screen = Screen::Unlocked;
        Ok(())
    }

    pub fn unlock(&mut self, password: &str) -> Result<bool, StoreError> {
        if AccessGate::new(&self.session).unlock(password)? {
            self.journal = EntryStore::new(&self.session).load();
            self.screen = Screen::Unlocked;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Drops the journal from memory; the persisted blob stays so the same
    /// password brings it back.
    pub fn lock(&mut self) -> Result<(), StoreError> {
        AccessGate::new(&self.session).lock()?;
        self.journal = Journal::new();
        self.screen = Screen::Locked;
        Ok(())
    }

    pub fn add_entry(
        &mut self,
        date: NaiveDate,
        title: String,
        content: String,
    ) -> Result<DiaryEntry, StoreError> {
        EntryStore::new(&self.session).add(&mut self.journal, date, title, content)
    }

    pub fn update_entry(
        &mut self,
        id: &str,
        title: String,
        content: String,
    ) -> Result<bool, StoreError> {
        EntryStore::new(&self.session).update(&mut self.journal, id, title, content)
    }

    pub fn delete_entry(&mut self, id: &str) -> Result<bool, StoreError> {
        EntryStore::new(&self.session).delete(&mut self.journal, id)
    }

    pub fn entry_by_date(&self, date: NaiveDate) -> Option<&DiaryEntry> {
        self.journal.find_by_date(date)
    }

    pub fn export_json(&self) -> Result<String, TransferError> {
        let digest = AccessGate::new(&self.session)
            .stored_checksum()?
            .unwrap_or_default();
        DiaryData::snapshot(self.journal.entries().to_vec(), digest).to_json()
    }

    /// Restores a backup: the collection is replaced wholesale, and a
    /// checksum carried by the payload replaces the one of record (the
    /// backup's password becomes the diary password). Parse or shape
    /// failures leave store and gate untouched.
    pub fn import_json(&mut self, raw: &str) -> Result<ImportOutcome, TransferError> {
        let payload = transfer::parse_import(raw)?;

        let digest = payload
            .password_hash
            .as_deref()
            .filter(|d| !d.is_empty());
        if let Some(digest) = digest {
            AccessGate::new(&self.session).restore_checksum(digest)?;
        }

        let entries = payload.entries.len();
        EntryStore::new(&self.session).replace(&mut self.journal, payload.entries)?;

        Ok(ImportOutcome {
            entries,
            password_replaced: digest.is_some(),
        })
    }

    pub fn render_document(&self, today: NaiveDate) -> DiaryDocument {
        document::render(self.journal.entries(), today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::session::MemorySessionStore;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn unlocked_context() -> DiaryContext<MemorySessionStore> {
        let mut ctx = DiaryContext::load(MemorySessionStore::new()).unwrap();
        ctx.set_password("password").unwrap();
        ctx
    }

    #[test]
    fn test_cold_start_resolves_to_locked() {
        let ctx = DiaryContext::load(MemorySessionStore::new()).unwrap();
        assert_eq!(ctx.screen(), Screen::Locked);
        assert!(!ctx.has_password().unwrap());
    }

    #[test]
    fn test_set_password_transitions_to_unlocked() {
        let ctx = unlocked_context();
        assert_eq!(ctx.screen(), Screen::Unlocked);
        assert!(ctx.has_password().unwrap());
    }

    #[test]
    fn test_lock_clears_memory_but_not_store() {
        let mut ctx = unlocked_context();
        ctx.add_entry(date("2024-01-15"), "T".into(), "C".into())
            .unwrap();

        ctx.lock().unwrap();
        assert_eq!(ctx.screen(), Screen::Locked);
        assert!(ctx.entries().is_empty());

        assert!(ctx.unlock("password").unwrap());
        assert_eq!(ctx.entries().len(), 1);
        assert_eq!(ctx.entries()[0].content, "C");
    }

    #[test]
    fn test_wrong_password_stays_locked() {
        let mut ctx = unlocked_context();
        ctx.lock().unwrap();

        assert!(!ctx.unlock("not it").unwrap());
        assert_eq!(ctx.screen(), Screen::Locked);
        assert!(ctx.entries().is_empty());
    }

    #[test]
    fn test_entry_by_date() {
        let mut ctx = unlocked_context();
        ctx.add_entry(date("2024-01-15"), String::new(), "found".into())
            .unwrap();

        assert_eq!(
            ctx.entry_by_date(date("2024-01-15")).unwrap().content,
            "found"
        );
        assert!(ctx.entry_by_date(date("2024-01-16")).is_none());
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut ctx = unlocked_context();
        ctx.add_entry(date("2024-01-15"), "A".into(), "a".into())
            .unwrap();
        ctx.add_entry(date("2024-02-15"), "B".into(), "b".into())
            .unwrap();
        let exported = ctx.export_json().unwrap();
        let before: Vec<DiaryEntry> = ctx.entries().to_vec();

        ctx.delete_entry(&before[0].id.clone()).unwrap();
        let outcome = ctx.import_json(&exported).unwrap();

        assert_eq!(outcome.entries, 2);
        assert!(outcome.password_replaced);
        assert_eq!(ctx.entries(), before.as_slice());
    }

    #[test]
    fn test_import_replaces_password_checksum() {
        let mut ctx = unlocked_context();
        let backup = DiaryData::snapshot(vec![], crate::domain::checksum::checksum("other"))
            .to_json()
            .unwrap();

        ctx.import_json(&backup).unwrap();
        ctx.lock().unwrap();

        assert!(!ctx.unlock("password").unwrap());
        assert!(ctx.unlock("other").unwrap());
    }

    #[test]
    fn test_import_failure_leaves_state_untouched() {
        let mut ctx = unlocked_context();
        ctx.add_entry(date("2024-01-15"), "T".into(), "C".into())
            .unwrap();
        let before: Vec<DiaryEntry> = ctx.entries().to_vec();

        assert!(ctx.import_json(r#"{"entries": "not-an-array"}"#).is_err());
        assert!(ctx.import_json("garbage").is_err());

        assert_eq!(ctx.entries(), before.as_slice());
        ctx.lock().unwrap();
        assert!(ctx.unlock("password").unwrap());
    }

    #[test]
    fn test_import_without_checksum_keeps_password() {
        let mut ctx = unlocked_context();
        let outcome = ctx.import_json(r#"{"entries": []}"#).unwrap();
        assert!(!outcome.password_replaced);

        ctx.lock().unwrap();
        assert!(ctx.unlock("password").unwrap());
    }
}
