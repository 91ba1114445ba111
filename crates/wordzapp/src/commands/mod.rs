//! # Command Layer
//!
//! This module contains the **core business logic** of wordz. Each command
//! lives in its own submodule and implements plain Rust functions over the
//! domain types.
//!
//! ## Role and Responsibilities
//!
//! - Validate input and enforce list invariants (non-empty word and meaning,
//!   no case-insensitive duplicates)
//! - Read and write through [`VocabStore`](crate::store::VocabStore)
//! - Return structured [`CmdResult`] values with affected words and messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr or prompts
//! - **Confirmation**: destructive commands take a `confirmed` flag; asking
//!   the user is the client's job
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests run
//! against `MemBackend` and seeded random sources.
//!
//! ## Command Modules
//!
//! - [`register`] / [`login`]: user directory and session
//! - [`create`], [`update`], [`delete`], [`get`]: word list management
//! - [`quiz`]: the quiz engine wired to the stored word list
//! - [`export`], [`import`]: JSON backup and restore
//! - [`migrate`]: one-time conversion of legacy storage layouts
//! - [`helpers`]: loading and saving the session user's word list

use crate::model::WordEntry;
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod export;
pub mod get;
pub mod helpers;
pub mod import;
pub mod login;
pub mod migrate;
pub mod quiz;
pub mod register;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Entries created, changed or removed by the command.
    pub affected_words: Vec<WordEntry>,
    /// Entries to display, already filtered and sorted.
    pub listed_words: Vec<WordEntry>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_words(mut self, words: Vec<WordEntry>) -> Self {
        self.affected_words = words;
        self
    }

    pub fn with_listed_words(mut self, words: Vec<WordEntry>) -> Self {
        self.listed_words = words;
        self
    }
}
