use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordzError {
    /// Missing, short or duplicate input fields.
    #[error("{0}")]
    Validation(String),

    /// Unknown user or password mismatch. Both produce the same message.
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Word not found: {0}")]
    WordNotFound(String),

    #[error("No words to quiz on. Add some words first!")]
    EmptyList,

    #[error("No quiz is active. Start a quiz first.")]
    QuizNotActive,

    #[error("Invalid import format: {0}")]
    Format(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WordzError>;
