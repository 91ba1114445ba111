use crate::commands::{create, helpers, login, register};
use crate::config::WordzConfig;
use crate::model::{Session, WordDraft, WordEntry};
use crate::store::mem_backend::MemBackend;
use crate::store::VocabStore;

/// An in-memory store with one registered, logged-in user.
pub struct TestEnv {
    pub store: VocabStore<MemBackend>,
    pub config: WordzConfig,
    pub session: Session,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub const USERNAME: &'static str = "tester";
    pub const PASSWORD: &'static str = "secret";

    pub fn new() -> Self {
        let store = VocabStore::with_backend(MemBackend::new());
        let config = WordzConfig {
            hash_iterations: 1,
            ..Default::default()
        };
        register::run(&store, &config, Self::USERNAME, Self::PASSWORD)
            .expect("failed to register test user");
        let session = login::run(&store, &config, Self::USERNAME, Self::PASSWORD)
            .expect("failed to log in test user");
        Self {
            store,
            config,
            session,
        }
    }

    pub fn add(&self, word: &str, meaning: &str) -> WordEntry {
        self.add_draft(WordDraft::new(word, meaning))
    }

    pub fn add_draft(&self, draft: WordDraft) -> WordEntry {
        create::run(&self.store, &self.session, draft)
            .expect("failed to add word")
            .affected_words
            .remove(0)
    }

    pub fn words(&self) -> Vec<WordEntry> {
        helpers::load_words(&self.store, &self.session).expect("failed to load words")
    }
}
