use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entry::DiaryEntry;
use super::error::TransferError;

/// Backup transfer format, distinct from the session layout. Field names
/// stay camelCase so backups from older exports keep importing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryData {
    pub entries: Vec<DiaryEntry>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub exported_at: DateTime<Utc>,
}

impl DiaryData {
    pub fn snapshot(entries: Vec<DiaryEntry>, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            entries,
            password_hash,
            created_at: now,
            exported_at: now,
        }
    }

    pub fn to_json(&self) -> Result<String, TransferError> {
        serde_json::to_string_pretty(self).map_err(|e| TransferError::InvalidPayload(e.to_string()))
    }
}

/// Accepted import shape: `entries` must be an array of well-formed
/// entries; everything else is optional and unknown fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPayload {
    pub entries: Vec<DiaryEntry>,
    #[serde(default)]
    pub password_hash: Option<String>,
}

pub fn parse_import(raw: &str) -> Result<ImportPayload, TransferError> {
    serde_json::from_str(raw).map_err(|e| TransferError::InvalidPayload(e.to_string()))
}
