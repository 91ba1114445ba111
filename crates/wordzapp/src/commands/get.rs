use crate::commands::helpers::load_words;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{locale_cmp, Session, SortMode, WordEntry};
use crate::store::backend::StorageBackend;
use crate::store::VocabStore;

#[derive(Debug, Clone, Default)]
pub struct WordFilter {
    /// Case-insensitive substring over word, meaning, translation and
    /// example. None or blank matches everything.
    pub search: Option<String>,
    pub sort: SortMode,
}

impl WordFilter {
    pub fn new(search: Option<String>, sort: SortMode) -> Self {
        Self { search, sort }
    }
}

/// Entries matching `query`, in their stored order.
pub fn filter_words(words: &[WordEntry], query: &str) -> Vec<WordEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return words.to_vec();
    }
    words
        .iter()
        .filter(|w| w.matches(&needle))
        .cloned()
        .collect()
}

/// Sorted copy of `words`. The sort is stable, so entries that compare
/// equal keep their relative order.
pub fn sort_words(words: &[WordEntry], mode: SortMode) -> Vec<WordEntry> {
    let mut sorted = words.to_vec();
    match mode {
        SortMode::Newest => sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        SortMode::Oldest => sorted.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
        SortMode::Alphabetical => sorted.sort_by(|a, b| locale_cmp(&a.word, &b.word)),
        SortMode::Reverse => sorted.sort_by(|a, b| locale_cmp(&b.word, &a.word)),
    }
    sorted
}

/// Filter then sort the session user's list.
pub fn run<B: StorageBackend>(
    store: &VocabStore<B>,
    session: &Session,
    filter: WordFilter,
) -> Result<CmdResult> {
    let words = load_words(store, session)?;
    let total = words.len();
    let matched = match filter.search.as_deref() {
        Some(query) => filter_words(&words, query),
        None => words,
    };
    let listed = sort_words(&matched, filter.sort);

    let mut result = CmdResult::default();
    if total == 0 {
        result.add_message(CmdMessage::info(
            "No words saved yet. Add some words to get started!",
        ));
    } else if listed.is_empty() {
        result.add_message(CmdMessage::info("No words match your search."));
    }
    Ok(result.with_listed_words(listed))
}

pub fn count<B: StorageBackend>(store: &VocabStore<B>, session: &Session) -> Result<usize> {
    Ok(load_words(store, session)?.len())
}
