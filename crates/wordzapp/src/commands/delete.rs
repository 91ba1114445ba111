use crate::commands::helpers::{load_words, save_words};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WordzError};
use crate::model::Session;
use crate::store::backend::StorageBackend;
use crate::store::VocabStore;
use tracing::debug;

pub fn run<B: StorageBackend>(
    store: &VocabStore<B>,
    session: &Session,
    id: &str,
) -> Result<CmdResult> {
    let mut words = load_words(store, session)?;
    let position = words
        .iter()
        .position(|w| w.id == id)
        .ok_or_else(|| WordzError::WordNotFound(id.to_string()))?;

    let removed = words.remove(position);
    save_words(store, session, words)?;
    debug!("Deleted word {} ({})", removed.word, removed.id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Word deleted successfully: {}",
        removed.word
    )));
    result.affected_words.push(removed);
    Ok(result)
}
