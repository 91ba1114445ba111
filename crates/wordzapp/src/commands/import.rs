use crate::commands::helpers::{load_words, save_words};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WordzError};
use crate::model::{new_entry_id, Session, WordEntry, WordStatus};
use crate::store::backend::StorageBackend;
use crate::store::VocabStore;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

/// How imported entries combine with the current list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Discard the current list and adopt the file's entries as they are.
    Replace,
    /// Prepend the file's entries as new entries.
    #[default]
    Merge,
}

/// An element of an imported array. Only `word` and `meaning` are required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportedEntry {
    id: Option<String>,
    word: Option<String>,
    meaning: Option<String>,
    translation: Option<String>,
    example: Option<String>,
    date_added: Option<DateTime<Utc>>,
    timestamp: Option<i64>,
    status: Option<WordStatus>,
}

pub fn run<B: StorageBackend>(
    store: &VocabStore<B>,
    session: &Session,
    contents: &[u8],
    mode: ImportMode,
) -> Result<CmdResult> {
    let imported = parse(contents)?;
    let now = Utc::now();
    let entries: Vec<WordEntry> = imported
        .into_iter()
        .map(|e| match mode {
            ImportMode::Replace => adopt(e, now),
            ImportMode::Merge => renew(e, now),
        })
        .collect();

    let words = match mode {
        ImportMode::Replace => entries.clone(),
        ImportMode::Merge => {
            let mut words = entries.clone();
            words.extend(load_words(store, session)?);
            words
        }
    };
    save_words(store, session, words)?;
    info!(
        "Imported {} words for {} ({:?})",
        entries.len(),
        session.username(),
        mode
    );

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Successfully imported {} words!",
        entries.len()
    )));
    Ok(result.with_affected_words(entries))
}

fn parse(contents: &[u8]) -> Result<Vec<ImportedEntry>> {
    let value: Value = serde_json::from_slice(contents)
        .map_err(|e| WordzError::Format(format!("Error reading file: {}", e)))?;
    let Value::Array(items) = value else {
        return Err(WordzError::Format(
            "Invalid file format. Expected an array of words.".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let entry: ImportedEntry = serde_json::from_value(item)
                .map_err(|e| WordzError::Format(format!("Entry {}: {}", i + 1, e)))?;
            let blank = |field: &Option<String>| {
                field.as_deref().map_or(true, |s| s.trim().is_empty())
            };
            if blank(&entry.word) || blank(&entry.meaning) {
                return Err(WordzError::Format(format!(
                    "Entry {}: word and meaning are required",
                    i + 1
                )));
            }
            Ok(entry)
        })
        .collect()
}

/// Keep what the file says, filling in whatever is missing.
fn adopt(e: ImportedEntry, now: DateTime<Utc>) -> WordEntry {
    let date_added = e.date_added.unwrap_or(now);
    WordEntry {
        id: e.id.filter(|id| !id.is_empty()).unwrap_or_else(new_entry_id),
        word: e.word.unwrap_or_default(),
        meaning: e.meaning.unwrap_or_default(),
        translation: e.translation.unwrap_or_default(),
        example: e.example.unwrap_or_default(),
        date_added,
        timestamp: e.timestamp.unwrap_or_else(|| date_added.timestamp_millis()),
        status: e.status.unwrap_or_default(),
    }
}

/// A brand new entry with the file's text. Only status carries over.
fn renew(e: ImportedEntry, now: DateTime<Utc>) -> WordEntry {
    WordEntry {
        id: new_entry_id(),
        word: e.word.unwrap_or_default(),
        meaning: e.meaning.unwrap_or_default(),
        translation: e.translation.unwrap_or_default(),
        example: e.example.unwrap_or_default(),
        date_added: now,
        timestamp: now.timestamp_millis(),
        status: e.status.unwrap_or_default(),
    }
}
