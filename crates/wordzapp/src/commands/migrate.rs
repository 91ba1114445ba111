//! One-time conversion of legacy storage layouts.
//!
//! Older versions wrote the user directory as an array of records and kept a
//! single global word list outside any user. Both are folded into the
//! canonical username-keyed directory.

use crate::commands::helpers::{load_words, save_words};
use crate::error::Result;
use crate::model::Session;
use crate::store::backend::StorageBackend;
use crate::store::VocabStore;
use tracing::info;

/// Rewrite an array-shaped users value as the canonical map.
/// Returns true if anything was rewritten.
pub fn directory<B: StorageBackend>(store: &VocabStore<B>) -> Result<bool> {
    let Some(stored) = store.load_stored_directory() else {
        return Ok(false);
    };
    if !stored.is_legacy() {
        return Ok(false);
    }

    let users = stored.into_directory();
    store.save_users(&users)?;
    info!("Migrated legacy user list ({} users)", users.len());
    Ok(true)
}

/// Move the legacy global word list into the session user's list, but only
/// when that list is empty. Returns the number of words moved.
pub fn legacy_words<B: StorageBackend>(store: &VocabStore<B>, session: &Session) -> Result<usize> {
    let current = load_words(store, session)?;
    if !current.is_empty() {
        return Ok(0);
    }

    let legacy = store.load_legacy_words();
    if legacy.is_empty() {
        return Ok(0);
    }

    let count = legacy.len();
    save_words(store, session, legacy)?;
    store.remove_legacy_words()?;
    info!("Migrated {} legacy words to {}", count, session.username());
    Ok(count)
}
