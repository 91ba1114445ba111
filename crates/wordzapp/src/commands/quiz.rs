//! Quiz commands: the [`Quiz`] engine wired to the stored list and the
//! persisted completed-word count.

use crate::commands::helpers::load_words;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Session, WordEntry};
use crate::quiz::{Quiz, QuizAnswer};
use crate::store::backend::StorageBackend;
use crate::store::VocabStore;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizStats {
    pub total_words: usize,
    pub completed: u64,
}

/// A fresh idle quiz carrying the persisted count.
pub fn load<B: StorageBackend>(store: &VocabStore<B>) -> Quiz {
    Quiz::with_completed(store.load_quiz_count())
}

pub fn start<B: StorageBackend, R: Rng + ?Sized>(
    store: &VocabStore<B>,
    session: &Session,
    quiz: &mut Quiz,
    rng: &mut R,
) -> Result<WordEntry> {
    let words = load_words(store, session)?;
    let entry = quiz.start(&words, rng)?;
    debug!("Quiz started with {} ({} words)", entry.word, words.len());
    Ok(entry)
}

pub fn reveal(quiz: &mut Quiz) -> Result<QuizAnswer> {
    quiz.reveal()
}

pub fn hide(quiz: &mut Quiz) {
    quiz.hide()
}

/// Advance and persist the new count.
pub fn next<B: StorageBackend, R: Rng + ?Sized>(
    store: &VocabStore<B>,
    session: &Session,
    quiz: &mut Quiz,
    rng: &mut R,
) -> Result<WordEntry> {
    let words = load_words(store, session)?;
    let entry = quiz.next(&words, rng)?;
    store.save_quiz_count(quiz.completed())?;
    debug!("Quiz advanced to {} (completed {})", entry.word, quiz.completed());
    Ok(entry)
}

pub fn reset<B: StorageBackend>(
    store: &VocabStore<B>,
    quiz: &mut Quiz,
    confirmed: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !confirmed {
        result.add_message(CmdMessage::info("Reset cancelled."));
        return Ok(result);
    }
    store.save_quiz_count(0)?;
    quiz.reset();
    info!("Quiz progress reset");
    result.add_message(CmdMessage::success("Quiz progress reset!"));
    Ok(result)
}

pub fn stats<B: StorageBackend>(
    store: &VocabStore<B>,
    session: &Session,
    quiz: &Quiz,
) -> Result<QuizStats> {
    Ok(QuizStats {
        total_words: load_words(store, session)?.len(),
        completed: quiz.completed(),
    })
}
