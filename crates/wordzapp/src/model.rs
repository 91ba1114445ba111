use crate::credentials::Credential;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// All registered users, keyed by exact (case-sensitive) username.
pub type UserDirectory = BTreeMap<String, UserRecord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordStatus {
    /// Statuses this version does not know read as `New`.
    #[default]
    #[serde(other)]
    New,
}

/// One vocabulary flashcard.
///
/// Field names serialize in camelCase (`dateAdded`) so that lists written by
/// the browser version of the app load without conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub id: String,
    pub word: String,
    pub meaning: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub example: String,
    pub date_added: DateTime<Utc>,
    /// Epoch millis, used for newest/oldest ordering.
    pub timestamp: i64,
    #[serde(default)]
    pub status: WordStatus,
}

impl WordEntry {
    /// Build a fresh entry from an already validated draft.
    pub fn new(draft: WordDraft) -> Self {
        let now = Utc::now();
        Self {
            id: new_entry_id(),
            word: draft.word,
            meaning: draft.meaning,
            translation: draft.translation,
            example: draft.example,
            date_added: now,
            timestamp: now.timestamp_millis(),
            status: WordStatus::New,
        }
    }

    /// Case-insensitive equality on the headword.
    pub fn is_same_word(&self, word: &str) -> bool {
        self.word.to_lowercase() == word.to_lowercase()
    }

    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.word, &self.meaning, &self.translation, &self.example]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

pub fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

/// User input for a new entry, before ids and timestamps are assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordDraft {
    pub word: String,
    pub meaning: String,
    pub translation: String,
    pub example: String,
}

impl WordDraft {
    pub fn new(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            meaning: meaning.into(),
            ..Default::default()
        }
    }

    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = translation.into();
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = example.into();
        self
    }

    pub fn trimmed(&self) -> Self {
        Self {
            word: self.word.trim().to_string(),
            meaning: self.meaning.trim().to_string(),
            translation: self.translation.trim().to_string(),
            example: self.example.trim().to_string(),
        }
    }
}

/// Partial update for an existing entry. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordChanges {
    pub word: Option<String>,
    pub meaning: Option<String>,
    pub translation: Option<String>,
    pub example: Option<String>,
}

impl WordChanges {
    pub fn word(mut self, word: impl Into<String>) -> Self {
        self.word = Some(word.into());
        self
    }

    pub fn meaning(mut self, meaning: impl Into<String>) -> Self {
        self.meaning = Some(meaning.into());
        self
    }

    pub fn translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }

    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_none()
            && self.meaning.is_none()
            && self.translation.is_none()
            && self.example.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<Credential>,
    /// Cleartext password written by older versions. Replaced by a
    /// credential on the first successful login.
    #[serde(default, rename = "password", skip_serializing_if = "Option::is_none")]
    pub legacy_password: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub words: Vec<WordEntry>,
}

impl UserRecord {
    pub fn new(username: String, credential: Credential) -> Self {
        Self {
            username,
            credential: Some(credential),
            legacy_password: None,
            created_at: Utc::now(),
            words: Vec::new(),
        }
    }
}

/// The authenticated user an operation acts for.
///
/// Obtained from `login` or by resolving the persisted session key; every
/// per-user operation takes one explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: String,
}

impl Session {
    pub(crate) fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Newest,
    Oldest,
    Alphabetical,
    Reverse,
}

impl SortMode {
    pub fn all() -> &'static [SortMode] {
        &[
            SortMode::Newest,
            SortMode::Oldest,
            SortMode::Alphabetical,
            SortMode::Reverse,
        ]
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
            SortMode::Alphabetical => "alphabetical",
            SortMode::Reverse => "reverse",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(SortMode::Newest),
            "oldest" => Ok(SortMode::Oldest),
            "alphabetical" | "alpha" | "az" => Ok(SortMode::Alphabetical),
            "reverse" | "za" => Ok(SortMode::Reverse),
            other => Err(format!(
                "Unknown sort mode: {} (expected newest, oldest, alphabetical or reverse)",
                other
            )),
        }
    }
}

/// Dictionary-style comparison: case-insensitive first, then lowercase
/// before uppercase so the order is total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
