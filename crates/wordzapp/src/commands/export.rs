use crate::commands::helpers::{load_directory, load_words};
use crate::error::{Result, WordzError};
use crate::model::{Session, UserRecord, WordEntry};
use crate::store::backend::StorageBackend;
use crate::store::VocabStore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// A serialized backup, ready to be written under `filename`.
#[derive(Debug, Clone)]
pub struct ExportDocument {
    pub filename: String,
    pub contents: Vec<u8>,
}

impl ExportDocument {
    fn pretty<T: Serialize + ?Sized>(filename: String, value: &T) -> Result<Self> {
        Ok(Self {
            filename,
            contents: serde_json::to_vec_pretty(value)?,
        })
    }
}

/// A user as exported. Never carries credentials.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UserExport<'a> {
    username: &'a str,
    created_at: DateTime<Utc>,
    words: &'a [WordEntry],
    #[serde(skip_serializing_if = "Option::is_none")]
    exported_at: Option<DateTime<Utc>>,
}

impl<'a> UserExport<'a> {
    fn from_record(record: &'a UserRecord) -> Self {
        Self {
            username: &record.username,
            created_at: record.created_at,
            words: &record.words,
            exported_at: None,
        }
    }
}

fn date_stamp() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// The session user's list as a bare JSON array, the format `import` reads.
pub fn words<B: StorageBackend>(
    store: &VocabStore<B>,
    session: &Session,
) -> Result<ExportDocument> {
    let words = load_words(store, session)?;
    if words.is_empty() {
        return Err(WordzError::Validation("No words to export!".to_string()));
    }
    ExportDocument::pretty(format!("vocabulary-backup-{}.json", date_stamp()), &words)
}

pub fn user<B: StorageBackend>(store: &VocabStore<B>, session: &Session) -> Result<ExportDocument> {
    let users = load_directory(store, session)?;
    let record = users
        .get(session.username())
        .ok_or_else(|| WordzError::Auth("Please log in first.".to_string()))?;
    let mut export = UserExport::from_record(record);
    export.exported_at = Some(Utc::now());
    ExportDocument::pretty(
        format!("vocabulary-{}-{}.json", record.username, date_stamp()),
        &export,
    )
}

pub fn all_users<B: StorageBackend>(store: &VocabStore<B>) -> Result<ExportDocument> {
    let users = store.load_users();
    let export: BTreeMap<&str, UserExport> = users
        .iter()
        .map(|(name, record)| (name.as_str(), UserExport::from_record(record)))
        .collect();
    ExportDocument::pretty(format!("vocabulary-all-users-{}.json", date_stamp()), &export)
}
