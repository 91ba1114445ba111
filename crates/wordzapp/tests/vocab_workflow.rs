//! End-to-end library workflows over the filesystem backend.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use tempfile::TempDir;
use wordzapp::api::{ImportMode, WordFilter, WordzApi};
use wordzapp::config::WordzConfig;
use wordzapp::error::WordzError;
use wordzapp::init::initialize;
use wordzapp::model::{SortMode, WordChanges, WordDraft};
use wordzapp::store::fs_backend::FsBackend;
use wordzapp::store::{VocabStore, LEGACY_WORDS_KEY, USERS_KEY};

fn fast_config() -> WordzConfig {
    WordzConfig {
        hash_iterations: 1,
        ..Default::default()
    }
}

fn open(dir: &TempDir) -> WordzApi<FsBackend> {
    let store = VocabStore::with_backend(FsBackend::new(dir.path().to_path_buf()));
    WordzApi::new(store, fast_config())
}

#[test]
fn state_survives_a_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut api = open(&dir);
        api.register("alice", "secret").unwrap();
        let session = api.login("alice", "secret").unwrap();
        api.add_word(&session, WordDraft::new("gato", "cat")).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        api.start_quiz_with(&session, &mut rng).unwrap();
        api.next_word_with(&session, &mut rng).unwrap();
    }

    let api = open(&dir);
    let session = api.require_session().unwrap();
    assert_eq!(session.username(), "alice");
    assert_eq!(api.count_words(&session).unwrap(), 1);
    assert_eq!(api.quiz().completed(), 1);
}

#[test]
fn users_are_isolated() {
    let dir = TempDir::new().unwrap();
    let mut api = open(&dir);
    api.register("alice", "secret").unwrap();
    api.register("bob", "hunter2").unwrap();

    let alice = api.login("alice", "secret").unwrap();
    api.add_word(&alice, WordDraft::new("gato", "cat")).unwrap();

    let bob = api.login("bob", "hunter2").unwrap();
    assert_eq!(api.count_words(&bob).unwrap(), 0);
    api.add_word(&bob, WordDraft::new("gato", "a different cat")).unwrap();

    let alice_words = api.list_words(&alice, WordFilter::default()).unwrap();
    assert_eq!(alice_words.listed_words[0].meaning, "cat");
}

#[test]
fn stored_passwords_are_not_cleartext() {
    let dir = TempDir::new().unwrap();
    let mut api = open(&dir);
    api.register("alice", "correct-horse").unwrap();
    let raw = fs::read_to_string(dir.path().join(USERS_KEY)).unwrap();
    assert!(!raw.contains("correct-horse"));
}

#[test]
fn export_then_replace_import_is_identity() {
    let dir = TempDir::new().unwrap();
    let mut api = open(&dir);
    api.register("alice", "secret").unwrap();
    let session = api.login("alice", "secret").unwrap();
    api.add_word(&session, WordDraft::new("gato", "cat").with_example("El gato duerme"))
        .unwrap();
    api.add_word(&session, WordDraft::new("perro", "dog").with_translation("Hund"))
        .unwrap();
    let before = api.list_words(&session, WordFilter::default()).unwrap().listed_words;

    let doc = api.export_words(&session).unwrap();
    let file = dir.path().join(&doc.filename);
    fs::write(&file, &doc.contents).unwrap();

    api.edit_word(&session, "gato", WordChanges::default().meaning("changed"))
        .unwrap();
    api.add_word(&session, WordDraft::new("casa", "house")).unwrap();

    let contents = fs::read(&file).unwrap();
    api.import_words(&session, &contents, ImportMode::Replace).unwrap();
    let after = api.list_words(&session, WordFilter::default()).unwrap().listed_words;
    assert_eq!(after, before);
}

#[test]
fn legacy_storage_is_migrated() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(USERS_KEY),
        r#"[{"username": "bob", "password": "pass1", "createdAt": "2024-01-01T00:00:00Z"}]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join(LEGACY_WORDS_KEY),
        r#"[{"id": "1700000000000", "word": "serene", "meaning": "calm",
             "translation": "", "example": "", "dateAdded": "2023-11-14T22:13:20.000Z",
             "timestamp": 1700000000000, "status": "new"}]"#,
    )
    .unwrap();

    fs::write(dir.path().join("wordz.toml"), "hash_iterations = 1000\n").unwrap();

    let mut ctx = initialize(Some(dir.path().to_path_buf())).unwrap();
    let session = ctx.api.login("bob", "pass1").unwrap();

    let words = ctx.api.list_words(&session, WordFilter::default()).unwrap();
    assert_eq!(words.listed_words.len(), 1);
    assert_eq!(words.listed_words[0].id, "1700000000000");
    assert!(!dir.path().join(LEGACY_WORDS_KEY).exists());

    let raw = fs::read_to_string(dir.path().join(USERS_KEY)).unwrap();
    assert!(!raw.contains("pass1"));

    // The upgraded credential still works
    ctx.api.logout().unwrap();
    assert!(ctx.api.login("bob", "pass1").is_ok());
    assert!(matches!(
        ctx.api.login("bob", "wrong"),
        Err(WordzError::Auth(_))
    ));
}

#[test]
fn list_sorts_and_filters() {
    let dir = TempDir::new().unwrap();
    let mut api = open(&dir);
    api.register("alice", "secret").unwrap();
    let session = api.login("alice", "secret").unwrap();
    for (word, meaning) in [("banana", "fruit"), ("Apple", "fruit"), ("carrot", "vegetable")] {
        api.add_word(&session, WordDraft::new(word, meaning)).unwrap();
    }

    let res = api
        .list_words(
            &session,
            WordFilter::new(Some("FRUIT".into()), SortMode::Alphabetical),
        )
        .unwrap();
    let words: Vec<_> = res.listed_words.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(words, vec!["Apple", "banana"]);
}
