//! # Configuration
//!
//! Wordz configuration is managed by [`confique`], which handles layered
//! loading from a TOML file, environment variables and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `WORDZ_MIN_PASSWORD_LENGTH`, etc.
//! 2. **Config file**: `wordz.toml` in the data directory.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `min_username_length` | `3` | Shortest accepted username (characters) |
//! | `min_password_length` | `4` | Shortest accepted password (characters) |
//! | `hash_iterations` | `100000` | PBKDF2 rounds for new credentials |
//! | `default_sort` | `newest` | Order used by `wordz list` without `--sort` |

use crate::error::{Result, WordzError};
use crate::model::SortMode;
use confique::{Config, Layer};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILENAME: &str = "wordz.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WordzConfig {
    /// Shortest accepted username, in characters.
    #[config(default = 3, env = "WORDZ_MIN_USERNAME_LENGTH")]
    pub min_username_length: usize,

    /// Shortest accepted password, in characters.
    #[config(default = 4, env = "WORDZ_MIN_PASSWORD_LENGTH")]
    pub min_password_length: usize,

    /// PBKDF2 iteration count used when hashing new passwords.
    #[config(default = 100000, env = "WORDZ_HASH_ITERATIONS")]
    pub hash_iterations: u32,

    /// Sort order used when listing without an explicit mode.
    #[config(default = "newest", env = "WORDZ_DEFAULT_SORT")]
    pub default_sort: SortMode,
}

/// The `#[config(default = ...)]` values, with no file or environment.
impl Default for WordzConfig {
    fn default() -> Self {
        Self::from_layer(<Self as Config>::Layer::default_values())
            .expect("every WordzConfig field has a default")
    }
}

impl WordzConfig {
    /// Load from the environment and `<dir>/wordz.toml`. A missing file is
    /// not an error.
    pub fn load(dir: &Path) -> Result<Self> {
        WordzConfig::builder()
            .env()
            .file(dir.join(CONFIG_FILENAME))
            .load()
            .map_err(|e| WordzError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WordzConfig::default();
        assert_eq!(config.min_username_length, 3);
        assert_eq!(config.min_password_length, 4);
        assert_eq!(config.hash_iterations, 100_000);
        assert_eq!(config.default_sort, SortMode::Newest);
    }

    #[test]
    fn test_default_matches_empty_load() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = WordzConfig::builder()
            .file(dir.path().join(CONFIG_FILENAME))
            .load()
            .unwrap();
        assert_eq!(loaded, WordzConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            "min_password_length = 8\ndefault_sort = \"alphabetical\"\n",
        )
        .unwrap();

        let config = WordzConfig::load(dir.path()).unwrap();
        assert_eq!(config.min_password_length, 8);
        assert_eq!(config.default_sort, SortMode::Alphabetical);
        assert_eq!(config.min_username_length, 3);
    }

    #[test]
    fn test_serializes_to_toml() {
        let text = toml::to_string(&WordzConfig::default()).unwrap();
        assert!(text.contains("min_username_length = 3"));
        assert!(text.contains("default_sort = \"newest\""));
    }
}
