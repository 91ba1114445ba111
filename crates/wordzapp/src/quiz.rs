//! Quiz state machine.
//!
//! ```text
//! Idle --start--> Hidden <--reveal/hide--> Revealed
//!                   ^                         |
//!                   +---------- next ---------+
//! any --reset--> Idle
//! ```
//!
//! The engine holds no word list of its own. Each draw takes the current
//! list, so edits made between draws are picked up. Randomness comes from
//! the caller.

use crate::error::{Result, WordzError};
use crate::model::WordEntry;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizPhase {
    Idle,
    Hidden,
    Revealed,
}

/// What the reveal shows. Optional parts are present only when non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizAnswer {
    pub meaning: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl QuizAnswer {
    fn from_entry(entry: &WordEntry) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            meaning: entry.meaning.clone(),
            translation: non_empty(&entry.translation),
            example: non_empty(&entry.example),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Quiz {
    current: Option<WordEntry>,
    revealed: bool,
    completed: u64,
}

impl Quiz {
    pub fn with_completed(completed: u64) -> Self {
        Self {
            completed,
            ..Default::default()
        }
    }

    pub fn phase(&self) -> QuizPhase {
        match (&self.current, self.revealed) {
            (None, _) => QuizPhase::Idle,
            (Some(_), false) => QuizPhase::Hidden,
            (Some(_), true) => QuizPhase::Revealed,
        }
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&WordEntry> {
        self.current.as_ref()
    }

    pub fn completed(&self) -> u64 {
        self.completed
    }

    pub fn start<R: Rng + ?Sized>(
        &mut self,
        words: &[WordEntry],
        rng: &mut R,
    ) -> Result<WordEntry> {
        self.draw(words, rng)
    }

    pub fn reveal(&mut self) -> Result<QuizAnswer> {
        let entry = self.current.as_ref().ok_or(WordzError::QuizNotActive)?;
        let answer = QuizAnswer::from_entry(entry);
        self.revealed = true;
        Ok(answer)
    }

    pub fn hide(&mut self) {
        self.revealed = false;
    }

    /// Count the current word as done and draw another. Repeats are allowed.
    pub fn next<R: Rng + ?Sized>(
        &mut self,
        words: &[WordEntry],
        rng: &mut R,
    ) -> Result<WordEntry> {
        if !self.is_active() {
            return Err(WordzError::QuizNotActive);
        }
        if words.is_empty() {
            return Err(WordzError::EmptyList);
        }
        self.completed = self.completed.saturating_add(1);
        self.draw(words, rng)
    }

    pub fn reset(&mut self) {
        self.current = None;
        self.revealed = false;
        self.completed = 0;
    }

    fn draw<R: Rng + ?Sized>(
        &mut self,
        words: &[WordEntry],
        rng: &mut R,
    ) -> Result<WordEntry> {
        if words.is_empty() {
            return Err(WordzError::EmptyList);
        }
        let entry = words[rng.gen_range(0..words.len())].clone();
        self.current = Some(entry.clone());
        self.revealed = false;
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WordDraft;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn words() -> Vec<WordEntry> {
        vec![
            WordEntry::new(WordDraft::new("gato", "cat").with_example("El gato duerme")),
            WordEntry::new(WordDraft::new("perro", "dog").with_translation("dog")),
            WordEntry::new(WordDraft::new("casa", "house")),
        ]
    }

    #[test]
    fn start_on_empty_list_fails() {
        let mut quiz = Quiz::default();
        let mut rng = StdRng::seed_from_u64(1);
        let err = quiz.start(&[], &mut rng).unwrap_err();
        assert!(matches!(err, WordzError::EmptyList));
        assert_eq!(quiz.phase(), QuizPhase::Idle);
    }

    #[test]
    fn draws_always_come_from_the_list() {
        let list = words();
        let mut quiz = Quiz::default();
        let mut rng = StdRng::seed_from_u64(42);
        let first = quiz.start(&list, &mut rng).unwrap();
        assert!(list.contains(&first));
        for _ in 0..50 {
            let drawn = quiz.next(&list, &mut rng).unwrap();
            assert!(list.iter().any(|w| w.id == drawn.id));
        }
        assert_eq!(quiz.completed(), 50);
    }

    #[test]
    fn single_word_list_repeats() {
        let list = vec![WordEntry::new(WordDraft::new("solo", "alone"))];
        let mut quiz = Quiz::default();
        let mut rng = StdRng::seed_from_u64(7);
        quiz.start(&list, &mut rng).unwrap();
        let again = quiz.next(&list, &mut rng).unwrap();
        assert_eq!(again.id, list[0].id);
    }

    #[test]
    fn next_increments_and_hides() {
        let list = words();
        let mut quiz = Quiz::default();
        let mut rng = StdRng::seed_from_u64(3);
        quiz.start(&list, &mut rng).unwrap();
        quiz.reveal().unwrap();
        assert_eq!(quiz.phase(), QuizPhase::Revealed);

        quiz.next(&list, &mut rng).unwrap();
        assert_eq!(quiz.completed(), 1);
        assert_eq!(quiz.phase(), QuizPhase::Hidden);
    }

    #[test]
    fn completed_count_saturates() {
        let mut quiz = Quiz::with_completed(u64::MAX);
        let mut rng = StdRng::seed_from_u64(5);
        quiz.start(&words(), &mut rng).unwrap();
        quiz.next(&words(), &mut rng).unwrap();
        assert_eq!(quiz.completed(), u64::MAX);
    }

    #[test]
    fn next_when_idle_is_rejected() {
        let mut quiz = Quiz::with_completed(4);
        let mut rng = StdRng::seed_from_u64(3);
        let err = quiz.next(&words(), &mut rng).unwrap_err();
        assert!(matches!(err, WordzError::QuizNotActive));
        assert_eq!(quiz.completed(), 4);
    }

    #[test]
    fn next_on_emptied_list_does_not_count() {
        let mut quiz = Quiz::default();
        let mut rng = StdRng::seed_from_u64(3);
        quiz.start(&words(), &mut rng).unwrap();
        let err = quiz.next(&[], &mut rng).unwrap_err();
        assert!(matches!(err, WordzError::EmptyList));
        assert_eq!(quiz.completed(), 0);
    }

    #[test]
    fn reveal_omits_empty_parts() {
        let list = vec![WordEntry::new(WordDraft::new("casa", "house"))];
        let mut quiz = Quiz::default();
        let mut rng = StdRng::seed_from_u64(0);
        quiz.start(&list, &mut rng).unwrap();
        let answer = quiz.reveal().unwrap();
        assert_eq!(answer.meaning, "house");
        assert_eq!(answer.translation, None);
        assert_eq!(answer.example, None);
    }

    #[test]
    fn reveal_includes_present_parts() {
        let list = vec![WordEntry::new(
            WordDraft::new("gato", "cat").with_example("El gato duerme"),
        )];
        let mut quiz = Quiz::default();
        let mut rng = StdRng::seed_from_u64(0);
        quiz.start(&list, &mut rng).unwrap();
        let answer = quiz.reveal().unwrap();
        assert_eq!(answer.example.as_deref(), Some("El gato duerme"));
        assert_eq!(answer.translation, None);
    }

    #[test]
    fn reveal_when_idle_is_rejected() {
        let mut quiz = Quiz::default();
        assert!(matches!(quiz.reveal(), Err(WordzError::QuizNotActive)));
    }

    #[test]
    fn hide_is_idempotent() {
        let mut quiz = Quiz::default();
        let mut rng = StdRng::seed_from_u64(0);
        quiz.start(&words(), &mut rng).unwrap();
        quiz.hide();
        assert_eq!(quiz.phase(), QuizPhase::Hidden);
        quiz.reveal().unwrap();
        quiz.hide();
        quiz.hide();
        assert_eq!(quiz.phase(), QuizPhase::Hidden);
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut quiz = Quiz::with_completed(9);
        let mut rng = StdRng::seed_from_u64(0);
        quiz.start(&words(), &mut rng).unwrap();
        quiz.reset();
        assert_eq!(quiz.phase(), QuizPhase::Idle);
        assert_eq!(quiz.completed(), 0);
        assert!(quiz.current().is_none());
    }
}
