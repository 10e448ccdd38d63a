//! Error handling for the resume chat application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeChatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Resume load error: {0}")]
    ResumeLoad(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Chat session failed: {0}")]
    Session(String),
}

pub type Result<T> = std::result::Result<T, ResumeChatError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeChatError {
    fn from(err: anyhow::Error) -> Self {
        ResumeChatError::Session(err.to_string())
    }
}
