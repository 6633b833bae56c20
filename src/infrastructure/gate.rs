use crate::domain::checksum::checksum;
use crate::domain::error::StoreError;

use super::session::SessionStore;

pub const PASSWORD_KEY: &str = "secret_diary_password";
pub const UNLOCKED_KEY: &str = "secret_diary_unlocked";

/// Guards diary access with a password checksum kept in the session store.
/// A wrong password is a `false`, never an error; there is no lockout.
pub struct AccessGate<'a, S: SessionStore> {
    session: &'a S,
}

impl<'a, S: SessionStore> AccessGate<'a, S> {
    pub fn new(session: &'a S) -> Self {
        Self { session }
    }

    pub fn has_password(&self) -> Result<bool, StoreError> {
        Ok(self.session.get(PASSWORD_KEY)?.is_some())
    }

    pub fn is_unlocked(&self) -> Result<bool, StoreError> {
        Ok(self.session.get(UNLOCKED_KEY)?.as_deref() == Some("true"))
    }

    pub fn stored_checksum(&self) -> Result<Option<String>, StoreError> {
        self.session.get(PASSWORD_KEY)
    }

    pub fn set_password(&self, password: &str) -> Result<(), StoreError> {
        self.session.set(PASSWORD_KEY, &checksum(password))?;
        self.session.set(UNLOCKED_KEY, "true")
    }

    pub fn unlock(&self, password: &str) -> Result<bool, StoreError> {
        let stored = self.session.get(PASSWORD_KEY)?;
        if stored.as_deref() == Some(checksum(password).as_str()) {
            self.session.set(UNLOCKED_KEY, "true")?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Clears the unlocked flag only; the checksum of record stays so the
    /// same password unlocks again later.
    pub fn lock(&self) -> Result<(), StoreError> {
        self.session.remove(UNLOCKED_KEY)
    }

    /// Installs a checksum carried by an imported backup as the new
    /// checksum of record.
    pub fn restore_checksum(&self, digest: &str) -> Result<(), StoreError> {
        self.session.set(PASSWORD_KEY, digest)
    }
}
