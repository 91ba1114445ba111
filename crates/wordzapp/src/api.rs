//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all wordz operations, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs**: word selectors (`1`, an id, or the word itself)
//!   become entry ids before a command runs
//! - **Owns the quiz**: one [`Quiz`] per API instance, seeded from the
//!   persisted completed count
//!
//! ## Sessions
//!
//! Per-user operations take an explicit [`Session`]. Get one from
//! [`WordzApi::login`] or resolve the persisted one with
//! [`WordzApi::require_session`].
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `WordzApi<FsBackend>`
//! - Testing: `WordzApi<MemBackend>`

use crate::commands::{create, delete, export, get, helpers, import, login, quiz, register, update};
use crate::config::WordzConfig;
use crate::error::{Result, WordzError};
use crate::model::{Session, UserRecord, WordChanges, WordDraft};
use crate::quiz::{Quiz, QuizAnswer};
use crate::store::backend::StorageBackend;
use crate::store::VocabStore;
use rand::Rng;

pub use crate::commands::export::ExportDocument;
pub use crate::commands::get::WordFilter;
pub use crate::commands::import::ImportMode;
pub use crate::commands::quiz::QuizStats;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::model::WordEntry;

pub struct WordzApi<B: StorageBackend> {
    store: VocabStore<B>,
    config: WordzConfig,
    quiz: Quiz,
}

impl<B: StorageBackend> WordzApi<B> {
    pub fn new(store: VocabStore<B>, config: WordzConfig) -> Self {
        let quiz = quiz::load(&store);
        Self {
            store,
            config,
            quiz,
        }
    }

    pub fn config(&self) -> &WordzConfig {
        &self.config
    }

    pub fn store(&self) -> &VocabStore<B> {
        &self.store
    }

    // --- Users ---

    pub fn register(&mut self, username: &str, password: &str) -> Result<CmdResult> {
        register::run(&self.store, &self.config, username, password)
    }

    pub fn login(&mut self, username: &str, password: &str) -> Result<Session> {
        login::run(&self.store, &self.config, username, password)
    }

    pub fn logout(&mut self) -> Result<()> {
        login::logout(&self.store)
    }

    pub fn session(&self) -> Option<Session> {
        login::session(&self.store)
    }

    /// The persisted session, or an auth error asking the user to log in.
    pub fn require_session(&self) -> Result<Session> {
        self.session()
            .ok_or_else(|| WordzError::Auth("Please log in first.".to_string()))
    }

    pub fn current_user(&self) -> Option<UserRecord> {
        login::current_user(&self.store)
    }

    // --- Words ---

    pub fn add_word(&mut self, session: &Session, draft: WordDraft) -> Result<CmdResult> {
        create::run(&self.store, session, draft)
    }

    pub fn delete_word(&mut self, session: &Session, selector: &str) -> Result<CmdResult> {
        let id = self.resolve_word(session, selector)?;
        delete::run(&self.store, session, &id)
    }

    pub fn edit_word(
        &mut self,
        session: &Session,
        selector: &str,
        changes: WordChanges,
    ) -> Result<CmdResult> {
        let id = self.resolve_word(session, selector)?;
        update::run(&self.store, session, &id, changes)
    }

    /// Delete by entry id, without selector resolution.
    pub fn delete_word_by_id(&mut self, session: &Session, id: &str) -> Result<CmdResult> {
        delete::run(&self.store, session, id)
    }

    pub fn edit_word_by_id(
        &mut self,
        session: &Session,
        id: &str,
        changes: WordChanges,
    ) -> Result<CmdResult> {
        update::run(&self.store, session, id, changes)
    }

    /// The session user's list in stored order, newest additions first.
    pub fn all_words(&self, session: &Session) -> Result<Vec<WordEntry>> {
        helpers::load_words(&self.store, session)
    }

    pub fn list_words(&self, session: &Session, filter: WordFilter) -> Result<CmdResult> {
        get::run(&self.store, session, filter)
    }

    /// Search with the configured default sort.
    pub fn search_words(&self, session: &Session, query: &str) -> Result<CmdResult> {
        let filter = WordFilter::new(Some(query.to_string()), self.config.default_sort);
        get::run(&self.store, session, filter)
    }

    pub fn count_words(&self, session: &Session) -> Result<usize> {
        get::count(&self.store, session)
    }

    pub fn get_word(&self, session: &Session, selector: &str) -> Result<WordEntry> {
        let words = helpers::load_words(&self.store, session)?;
        let id = helpers::resolve_selector(&words, selector)?;
        words
            .into_iter()
            .find(|w| w.id == id)
            .ok_or(WordzError::WordNotFound(id))
    }

    fn resolve_word(&self, session: &Session, selector: &str) -> Result<String> {
        let words = helpers::load_words(&self.store, session)?;
        helpers::resolve_selector(&words, selector)
    }

    // --- Quiz ---

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn start_quiz(&mut self, session: &Session) -> Result<WordEntry> {
        self.start_quiz_with(session, &mut rand::thread_rng())
    }

    pub fn start_quiz_with<R: Rng + ?Sized>(
        &mut self,
        session: &Session,
        rng: &mut R,
    ) -> Result<WordEntry> {
        quiz::start(&self.store, session, &mut self.quiz, rng)
    }

    pub fn reveal_answer(&mut self) -> Result<QuizAnswer> {
        quiz::reveal(&mut self.quiz)
    }

    pub fn hide_answer(&mut self) {
        quiz::hide(&mut self.quiz)
    }

    pub fn next_word(&mut self, session: &Session) -> Result<WordEntry> {
        self.next_word_with(session, &mut rand::thread_rng())
    }

    pub fn next_word_with<R: Rng + ?Sized>(
        &mut self,
        session: &Session,
        rng: &mut R,
    ) -> Result<WordEntry> {
        quiz::next(&self.store, session, &mut self.quiz, rng)
    }

    pub fn reset_quiz(&mut self, confirmed: bool) -> Result<CmdResult> {
        quiz::reset(&self.store, &mut self.quiz, confirmed)
    }

    pub fn quiz_stats(&self, session: &Session) -> Result<QuizStats> {
        quiz::stats(&self.store, session, &self.quiz)
    }

    // --- Import / export ---

    pub fn export_words(&self, session: &Session) -> Result<ExportDocument> {
        export::words(&self.store, session)
    }

    pub fn export_user(&self, session: &Session) -> Result<ExportDocument> {
        export::user(&self.store, session)
    }

    pub fn export_all_users(&self) -> Result<ExportDocument> {
        export::all_users(&self.store)
    }

    pub fn import_words(
        &mut self,
        session: &Session,
        contents: &[u8],
        mode: ImportMode,
    ) -> Result<CmdResult> {
        import::run(&self.store, session, contents, mode)
    }
}
