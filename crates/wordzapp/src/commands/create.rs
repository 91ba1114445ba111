use crate::commands::helpers::{ensure_unique, load_words, save_words, validate_draft};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Session, WordDraft, WordEntry};
use crate::store::backend::StorageBackend;
use crate::store::VocabStore;
use tracing::debug;

pub fn run<B: StorageBackend>(
    store: &VocabStore<B>,
    session: &Session,
    draft: WordDraft,
) -> Result<CmdResult> {
    let draft = validate_draft(&draft)?;
    let mut words = load_words(store, session)?;
    ensure_unique(&words, &draft.word, None)?;

    let entry = WordEntry::new(draft);
    // Newest first
    words.insert(0, entry.clone());
    save_words(store, session, words)?;
    debug!("Added word {} ({})", entry.word, entry.id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Word added successfully: {}",
        entry.word
    )));
    result.affected_words.push(entry);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordzError;
    use crate::test_utils::TestEnv;

    #[test]
    fn adds_trimmed_entry_at_front() {
        let env = TestEnv::new();
        env.add("first", "one");
        let res = run(
            &env.store,
            &env.session,
            WordDraft::new("  second ", " two ").with_translation(" zwei "),
        )
        .unwrap();

        let added = &res.affected_words[0];
        assert_eq!(added.word, "second");
        assert_eq!(added.meaning, "two");
        assert_eq!(added.translation, "zwei");
        assert_eq!(added.example, "");

        let words = env.words();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].word, "second");
        assert_eq!(words[1].word, "first");
    }

    #[test]
    fn assigns_unique_ids() {
        let env = TestEnv::new();
        let a = env.add("alpha", "a");
        let b = env.add("beta", "b");
        assert_ne!(a.id, b.id);
        assert!(!a.id.is_empty());
    }

    #[test]
    fn requires_word_and_meaning() {
        let env = TestEnv::new();
        for draft in [
            WordDraft::new("", "meaning"),
            WordDraft::new("word", "   "),
            WordDraft::new(" \t", "\n"),
        ] {
            let err = run(&env.store, &env.session, draft).unwrap_err();
            assert!(matches!(err, WordzError::Validation(_)));
        }
        assert!(env.words().is_empty());
    }

    #[test]
    fn rejects_case_insensitive_duplicate() {
        let env = TestEnv::new();
        env.add("ubiquitous", "present everywhere");
        assert_eq!(env.words().len(), 1);

        let err = run(
            &env.store,
            &env.session,
            WordDraft::new("Ubiquitous", "dup"),
        )
        .unwrap_err();
        match err {
            WordzError::Validation(msg) => assert!(msg.contains("already exists")),
            other => panic!("Expected validation error, got {:?}", other),
        }
        assert_eq!(env.words().len(), 1);
    }

    #[test]
    fn lists_are_per_user() {
        let env = TestEnv::new();
        env.add("mine", "only for tester");

        crate::commands::register::run(&env.store, &env.config, "other", "secret").unwrap();
        let other =
            crate::commands::login::run(&env.store, &env.config, "other", "secret").unwrap();
        // Same word is fine in a different user's list
        run(&env.store, &other, WordDraft::new("mine", "other's copy")).unwrap();

        assert_eq!(env.words().len(), 1);
        assert_eq!(env.words()[0].meaning, "only for tester");
    }

    #[test]
    fn write_failure_is_reported() {
        let env = TestEnv::new();
        env.store.backend().set_simulate_write_error(true);
        let err = run(&env.store, &env.session, WordDraft::new("w", "m")).unwrap_err();
        assert!(matches!(err, WordzError::Store(_)));
        env.store.backend().set_simulate_write_error(false);
        assert!(env.words().is_empty());
    }
}
