//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("Session id cannot be empty")]
    EmptySessionId,

    #[error("Upload file name cannot be empty")]
    EmptyFileName,

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Unknown output format: {0}")]
    UnknownOutputFormat(String),
}
