//! # Storage Layer
//!
//! Wordz persists everything through a small key-value interface, the same
//! shape as browser local storage: a handful of fixed string keys, each
//! holding one string value.
//!
//! ## Layering
//!
//! - [`backend::StorageBackend`]: raw string I/O per key.
//!   - [`fs_backend::FsBackend`]: production, one file per key, atomic writes
//!   - [`mem_backend::MemBackend`]: testing, with failure simulation
//! - [`VocabStore`]: typed access on top of a backend. Owns the key names,
//!   the JSON shapes, and the degraded-read policy.
//!
//! ## Keys
//!
//! ```text
//! vocab_users           # JSON object: username -> user record (+ word list)
//! vocab_current_user    # bare username of the logged-in user
//! vocabularyQuizCount   # decimal integer, completed quiz words
//! vocabularyWords       # legacy global word list (migration source only)
//! ```
//!
//! ## Failure Policy
//!
//! Reads never fail: a missing, unreadable or corrupted value is logged and
//! treated as empty. Writes return `WordzError::Store` and leave the caller's
//! in-memory state alone; the next successful write stores the current state.
//! There is no transaction spanning several keys.

use crate::error::{Result, WordzError};
use crate::model::{UserDirectory, UserRecord, WordEntry};
use serde::Deserialize;
use tracing::{debug, warn};

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

use backend::StorageBackend;

pub const USERS_KEY: &str = "vocab_users";
pub const SESSION_KEY: &str = "vocab_current_user";
pub const QUIZ_COUNT_KEY: &str = "vocabularyQuizCount";
pub const LEGACY_WORDS_KEY: &str = "vocabularyWords";

/// The two shapes the users key has been written in.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StoredDirectory {
    /// Canonical: username -> record.
    Map(UserDirectory),
    /// Legacy: array of records.
    List(Vec<UserRecord>),
}

impl StoredDirectory {
    pub fn is_legacy(&self) -> bool {
        matches!(self, StoredDirectory::List(_))
    }

    /// Normalize to the canonical map. The first record wins when a legacy
    /// list holds the same username twice.
    pub fn into_directory(self) -> UserDirectory {
        match self {
            StoredDirectory::Map(map) => map,
            StoredDirectory::List(records) => {
                let mut map = UserDirectory::new();
                for record in records {
                    map.entry(record.username.clone()).or_insert(record);
                }
                map
            }
        }
    }
}

pub struct VocabStore<B: StorageBackend> {
    /// The underlying storage backend.
    pub(crate) backend: B,
}

impl<B: StorageBackend> VocabStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    // --- Users ---

    /// Raw users value in whichever shape it was written, or None when the
    /// key is absent or unreadable.
    pub fn load_stored_directory(&self) -> Option<StoredDirectory> {
        let raw = self.read_degraded(USERS_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(stored) => Some(stored),
            Err(e) => {
                warn!("Ignoring corrupted {} value: {}", USERS_KEY, e);
                None
            }
        }
    }

    pub fn load_users(&self) -> UserDirectory {
        self.load_stored_directory()
            .map(StoredDirectory::into_directory)
            .unwrap_or_default()
    }

    pub fn save_users(&self, users: &UserDirectory) -> Result<()> {
        let content = serde_json::to_string(users).map_err(WordzError::Serialization)?;
        self.write(USERS_KEY, &content)?;
        debug!("Saved {} users", users.len());
        Ok(())
    }

    // --- Session ---

    pub fn load_session(&self) -> Option<String> {
        self.read_degraded(SESSION_KEY)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    pub fn save_session(&self, username: &str) -> Result<()> {
        self.write(SESSION_KEY, username)
    }

    pub fn clear_session(&self) -> Result<()> {
        self.backend.remove(SESSION_KEY).map_err(into_store_error)
    }

    // --- Quiz ---

    pub fn load_quiz_count(&self) -> u64 {
        let Some(raw) = self.read_degraded(QUIZ_COUNT_KEY) else {
            return 0;
        };
        raw.trim().parse().unwrap_or_else(|e| {
            warn!("Ignoring corrupted {} value {:?}: {}", QUIZ_COUNT_KEY, raw, e);
            0
        })
    }

    pub fn save_quiz_count(&self, count: u64) -> Result<()> {
        self.write(QUIZ_COUNT_KEY, &count.to_string())
    }

    // --- Legacy global word list ---

    pub fn load_legacy_words(&self) -> Vec<WordEntry> {
        let Some(raw) = self.read_degraded(LEGACY_WORDS_KEY) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Ignoring corrupted {} value: {}", LEGACY_WORDS_KEY, e);
            Vec::new()
        })
    }

    pub fn remove_legacy_words(&self) -> Result<()> {
        self.backend
            .remove(LEGACY_WORDS_KEY)
            .map_err(into_store_error)
    }

    fn read_degraded(&self, key: &str) -> Option<String> {
        match self.backend.read(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read {}: {}", key, e);
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.backend.write(key, value).map_err(into_store_error)
    }
}

/// Backend failures all surface as `Store` errors to callers.
fn into_store_error(e: WordzError) -> WordzError {
    match e {
        WordzError::Store(msg) => WordzError::Store(msg),
        other => WordzError::Store(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Credential;
    use mem_backend::MemBackend;

    fn store() -> VocabStore<MemBackend> {
        VocabStore::with_backend(MemBackend::new())
    }

    #[test]
    fn missing_users_key_is_empty_directory() {
        assert!(store().load_users().is_empty());
    }

    #[test]
    fn users_roundtrip() {
        let store = store();
        let mut users = UserDirectory::new();
        users.insert(
            "alice".into(),
            UserRecord::new("alice".into(), Credential::new("secret", 1)),
        );
        store.save_users(&users).unwrap();

        let loaded = store.load_users();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded["alice"].username, "alice");
    }

    #[test]
    fn corrupted_users_value_reads_as_empty() {
        let store = store();
        store.backend().write(USERS_KEY, "{not json").unwrap();
        assert!(store.load_users().is_empty());
    }

    #[test]
    fn read_failure_reads_as_empty() {
        let store = store();
        store.backend().write(QUIZ_COUNT_KEY, "7").unwrap();
        store.backend().set_simulate_read_error(true);
        assert_eq!(store.load_quiz_count(), 0);
        assert!(store.load_users().is_empty());
        assert_eq!(store.load_session(), None);
    }

    #[test]
    fn legacy_list_directory_is_normalized() {
        let store = store();
        let raw = r#"[
            {"username": "bob", "password": "pass1", "createdAt": "2024-01-01T00:00:00Z", "words": []},
            {"username": "bob", "password": "other", "createdAt": "2024-02-01T00:00:00Z", "words": []},
            {"username": "carol", "password": "pass2", "createdAt": "2024-01-02T00:00:00Z"}
        ]"#;
        store.backend().write(USERS_KEY, raw).unwrap();

        let stored = store.load_stored_directory().unwrap();
        assert!(stored.is_legacy());
        let users = stored.into_directory();
        assert_eq!(users.len(), 2);
        assert_eq!(users["bob"].legacy_password.as_deref(), Some("pass1"));
        assert!(users["carol"].words.is_empty());
    }

    #[test]
    fn quiz_count_roundtrip_and_corruption() {
        let store = store();
        assert_eq!(store.load_quiz_count(), 0);
        store.save_quiz_count(12).unwrap();
        assert_eq!(store.load_quiz_count(), 12);
        store.backend().write(QUIZ_COUNT_KEY, "twelve").unwrap();
        assert_eq!(store.load_quiz_count(), 0);
    }

    #[test]
    fn session_is_a_bare_username() {
        let store = store();
        store.save_session("alice").unwrap();
        assert_eq!(
            store.backend().read(SESSION_KEY).unwrap().as_deref(),
            Some("alice")
        );
        assert_eq!(store.load_session().as_deref(), Some("alice"));
        store.clear_session().unwrap();
        assert_eq!(store.load_session(), None);
    }

    #[test]
    fn write_failure_is_a_store_error() {
        let store = store();
        store.backend().set_simulate_write_error(true);
        let err = store.save_quiz_count(1).unwrap_err();
        assert!(matches!(err, WordzError::Store(_)));
    }
}
