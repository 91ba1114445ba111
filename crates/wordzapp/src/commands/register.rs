use crate::commands::{CmdMessage, CmdResult};
use crate::config::WordzConfig;
use crate::credentials::Credential;
use crate::error::{Result, WordzError};
use crate::model::UserRecord;
use crate::store::backend::StorageBackend;
use crate::store::VocabStore;
use tracing::info;

pub fn run<B: StorageBackend>(
    store: &VocabStore<B>,
    config: &WordzConfig,
    username: &str,
    password: &str,
) -> Result<CmdResult> {
    if username.chars().count() < config.min_username_length {
        return Err(WordzError::Validation(format!(
            "Username must be at least {} characters long!",
            config.min_username_length
        )));
    }
    if password.chars().count() < config.min_password_length {
        return Err(WordzError::Validation(format!(
            "Password must be at least {} characters long!",
            config.min_password_length
        )));
    }

    let mut users = store.load_users();
    if users.contains_key(username) {
        return Err(WordzError::Validation(
            "Username already exists! Please choose a different username.".to_string(),
        ));
    }

    let credential = Credential::new(password, config.hash_iterations);
    users.insert(
        username.to_string(),
        UserRecord::new(username.to_string(), credential),
    );
    store.save_users(&users)?;
    info!("Registered user {}", username);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Registration successful!"));
    Ok(result)
}
