use crate::commands::helpers::{ensure_unique, load_words, save_words, validate_draft};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WordzError};
use crate::model::{Session, WordChanges, WordDraft};
use crate::store::backend::StorageBackend;
use crate::store::VocabStore;
use tracing::debug;

/// Update an entry in place. Id, position, dates and status are kept.
pub fn run<B: StorageBackend>(
    store: &VocabStore<B>,
    session: &Session,
    id: &str,
    changes: WordChanges,
) -> Result<CmdResult> {
    let mut words = load_words(store, session)?;
    let position = words
        .iter()
        .position(|w| w.id == id)
        .ok_or_else(|| WordzError::WordNotFound(id.to_string()))?;

    let current = &words[position];
    let draft = validate_draft(&WordDraft {
        word: changes.word.unwrap_or_else(|| current.word.clone()),
        meaning: changes.meaning.unwrap_or_else(|| current.meaning.clone()),
        translation: changes
            .translation
            .unwrap_or_else(|| current.translation.clone()),
        example: changes.example.unwrap_or_else(|| current.example.clone()),
    })?;
    ensure_unique(&words, &draft.word, Some(id))?;

    let entry = &mut words[position];
    entry.word = draft.word;
    entry.meaning = draft.meaning;
    entry.translation = draft.translation;
    entry.example = draft.example;
    let updated = entry.clone();

    save_words(store, session, words)?;
    debug!("Updated word {} ({})", updated.word, updated.id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Word updated successfully: {}",
        updated.word
    )));
    result.affected_words.push(updated);
    Ok(result)
}
