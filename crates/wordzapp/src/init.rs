//! # Data Directory and Startup
//!
//! All state lives in one data directory, one file per storage key.
//!
//! ## Resolution
//!
//! 1. An explicit `data_override` (the CLI's `--data` flag).
//! 2. The `WORDZ_DATA` environment variable, mainly so tests can isolate
//!    their state.
//! 3. The OS data directory from [`directories::ProjectDirs`].
//!
//! [`initialize`] also loads [`WordzConfig`] from that directory and runs the
//! directory migration, so every client starts from the canonical layout.

use crate::api::WordzApi;
use crate::commands::migrate;
use crate::config::WordzConfig;
use crate::error::{Result, WordzError};
use crate::store::fs_backend::FsBackend;
use crate::store::VocabStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{debug, warn};

pub const DATA_ENV: &str = "WORDZ_DATA";

pub struct WordzContext {
    pub api: WordzApi<FsBackend>,
    pub data_dir: PathBuf,
}

impl WordzContext {
    pub fn config(&self) -> &WordzConfig {
        self.api.config()
    }
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "wordz", "wordz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| WordzError::Config("Could not determine data directory".to_string()))
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<WordzContext> {
    let data_dir = resolve_data_dir(data_override)?;
    debug!("Using data directory {}", data_dir.display());

    let config = WordzConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!("Falling back to default config: {}", e);
        WordzConfig::default()
    });

    let store = VocabStore::with_backend(FsBackend::new(data_dir.clone()));
    if let Err(e) = migrate::directory(&store) {
        warn!("Could not migrate user directory: {}", e);
    }

    Ok(WordzContext {
        api: WordzApi::new(store, config),
        data_dir,
    })
}
