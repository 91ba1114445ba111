use crate::error::{Result, WordzError};
use crate::model::{Session, UserDirectory, WordDraft, WordEntry};
use crate::store::backend::StorageBackend;
use crate::store::VocabStore;

/// Load the directory and check that the session's user is still in it.
pub fn load_directory<B: StorageBackend>(
    store: &VocabStore<B>,
    session: &Session,
) -> Result<UserDirectory> {
    let users = store.load_users();
    if !users.contains_key(session.username()) {
        return Err(WordzError::Auth(format!(
            "No such user: {}. Please log in again.",
            session.username()
        )));
    }
    Ok(users)
}

pub fn load_words<B: StorageBackend>(
    store: &VocabStore<B>,
    session: &Session,
) -> Result<Vec<WordEntry>> {
    let mut users = load_directory(store, session)?;
    Ok(users
        .remove(session.username())
        .map(|user| user.words)
        .unwrap_or_default())
}

/// Replace the session user's list and persist the whole directory.
pub fn save_words<B: StorageBackend>(
    store: &VocabStore<B>,
    session: &Session,
    words: Vec<WordEntry>,
) -> Result<()> {
    let mut users = load_directory(store, session)?;
    if let Some(user) = users.get_mut(session.username()) {
        user.words = words;
    }
    store.save_users(&users)
}

/// Trim the draft and check the required fields.
pub fn validate_draft(draft: &WordDraft) -> Result<WordDraft> {
    let draft = draft.trimmed();
    if draft.word.is_empty() || draft.meaning.is_empty() {
        return Err(WordzError::Validation(
            "Please fill in at least the word and meaning fields.".to_string(),
        ));
    }
    Ok(draft)
}

/// Fails when `word` is already in `words`, ignoring case. `except_id`
/// excludes the entry being edited.
pub fn ensure_unique(words: &[WordEntry], word: &str, except_id: Option<&str>) -> Result<()> {
    let clash = words
        .iter()
        .filter(|w| Some(w.id.as_str()) != except_id)
        .any(|w| w.is_same_word(word));
    if clash {
        return Err(WordzError::Validation(
            "This word already exists in your vocabulary!".to_string(),
        ));
    }
    Ok(())
}

/// Resolve what a user typed to an entry id.
///
/// Tried in order: an exact id, a 1-based position in the stored (newest
/// first) list, then the headword ignoring case. Imported ids may be small
/// numbers, so an id match always beats a position.
pub fn resolve_selector(words: &[WordEntry], selector: &str) -> Result<String> {
    let selector = selector.trim();
    if let Some(entry) = words.iter().find(|w| w.id == selector) {
        return Ok(entry.id.clone());
    }
    if let Ok(n) = selector.parse::<usize>() {
        if (1..=words.len()).contains(&n) {
            return Ok(words[n - 1].id.clone());
        }
    }
    words
        .iter()
        .find(|w| w.is_same_word(selector))
        .map(|w| w.id.clone())
        .ok_or_else(|| WordzError::WordNotFound(selector.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestEnv;

    #[test]
    fn selector_by_position() {
        let env = TestEnv::new();
        let older = env.add("older", "1");
        let newer = env.add("newer", "2");
        let words = env.words();
        assert_eq!(resolve_selector(&words, "1").unwrap(), newer.id);
        assert_eq!(resolve_selector(&words, " 2 ").unwrap(), older.id);
    }

    #[test]
    fn selector_by_id_or_word() {
        let env = TestEnv::new();
        let entry = env.add("Gato", "cat");
        let words = env.words();
        assert_eq!(resolve_selector(&words, &entry.id).unwrap(), entry.id);
        assert_eq!(resolve_selector(&words, "gato").unwrap(), entry.id);
    }

    #[test]
    fn selector_out_of_range_falls_through_to_ids() {
        let env = TestEnv::new();
        let mut words = env.words();
        let mut entry = WordEntry::new(WordDraft::new("legacy", "numeric id"));
        entry.id = "1700000000000".to_string();
        words.push(entry);
        assert_eq!(resolve_selector(&words, "1700000000000").unwrap(), "1700000000000");
        assert!(matches!(
            resolve_selector(&words, "5"),
            Err(WordzError::WordNotFound(_))
        ));
    }

    #[test]
    fn selector_prefers_id_over_position() {
        let mut alpha = WordEntry::new(WordDraft::new("alpha", "first"));
        alpha.id = "2".to_string();
        let mut beta = WordEntry::new(WordDraft::new("beta", "second"));
        beta.id = "1".to_string();
        let words = vec![alpha, beta];

        assert_eq!(resolve_selector(&words, "2").unwrap(), "2");
        assert_eq!(resolve_selector(&words, "1").unwrap(), "1");
    }

    #[test]
    fn missing_user_is_an_auth_error() {
        let env = TestEnv::new();
        let ghost = Session::new("ghost");
        assert!(matches!(
            load_words(&env.store, &ghost),
            Err(WordzError::Auth(_))
        ));
    }

    #[test]
    fn validate_draft_trims() {
        let draft = validate_draft(&WordDraft::new(" a ", " b ")).unwrap();
        assert_eq!((draft.word.as_str(), draft.meaning.as_str()), ("a", "b"));
    }
}
