use crate::commands::migrate;
use crate::config::WordzConfig;
use crate::credentials::{constant_time_eq, Credential};
use crate::error::{Result, WordzError};
use crate::model::{Session, UserRecord};
use crate::store::backend::StorageBackend;
use crate::store::VocabStore;
use tracing::{info, warn};

const AUTH_FAILED: &str = "Invalid username or password.";

/// Verify credentials, persist the session key and return the session.
///
/// Records still holding a cleartext password are upgraded to a hashed
/// credential here, and legacy global words are moved into an empty list.
pub fn run<B: StorageBackend>(
    store: &VocabStore<B>,
    config: &WordzConfig,
    username: &str,
    password: &str,
) -> Result<Session> {
    let mut users = store.load_users();
    let user = users
        .get_mut(username)
        .ok_or_else(|| WordzError::Auth(AUTH_FAILED.to_string()))?;

    let verified = if let Some(credential) = &user.credential {
        credential.verify(password)
    } else if let Some(legacy) = &user.legacy_password {
        constant_time_eq(legacy.as_bytes(), password.as_bytes())
    } else {
        false
    };
    if !verified {
        return Err(WordzError::Auth(AUTH_FAILED.to_string()));
    }

    let upgraded = user.credential.is_none();
    if upgraded {
        user.credential = Some(Credential::new(password, config.hash_iterations));
        user.legacy_password = None;
    }

    if upgraded {
        // Not fatal: the cleartext record still authenticates next time.
        match store.save_users(&users) {
            Ok(()) => info!("Upgraded stored password for {}", username),
            Err(e) => warn!("Could not upgrade stored password for {}: {}", username, e),
        }
    }

    // Migrate first so a failed migration leaves nobody logged in.
    let session = Session::new(username);
    migrate::legacy_words(store, &session)?;

    store.save_session(username)?;
    info!("Logged in as {}", username);
    Ok(session)
}

pub fn logout<B: StorageBackend>(store: &VocabStore<B>) -> Result<()> {
    store.clear_session()
}

/// The persisted session, if it names a user that still exists.
pub fn session<B: StorageBackend>(store: &VocabStore<B>) -> Option<Session> {
    let username = store.load_session()?;
    if store.load_users().contains_key(&username) {
        Some(Session::new(username))
    } else {
        None
    }
}

/// Look up the persisted session, then the directory. No side effects.
pub fn current_user<B: StorageBackend>(store: &VocabStore<B>) -> Option<UserRecord> {
    let username = store.load_session()?;
    store.load_users().remove(&username)
}
