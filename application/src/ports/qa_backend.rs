//! Question-answering backend port
//!
//! Defines the interface for the two backend calls: document upload and
//! question asking. The HTTP adapter lives in the infrastructure layer.

use async_trait::async_trait;
use docqa_domain::{Answer, Question, SessionId, UploadFile, UploadReceipt};
use thiserror::Error;

/// Errors that can occur while talking to the backend
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Non-2xx response. `message` is the body's `error` field when present.
    #[error("HTTP error! status: {status}{}", .message.as_deref().map(|m| format!(" ({m})")).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

impl BackendError {
    /// The server-provided error text, if the backend sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            BackendError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Gateway to the question-answering backend
#[async_trait]
pub trait QaBackend: Send + Sync {
    /// Upload a document and open a session scoped to it
    async fn upload(&self, file: &UploadFile) -> Result<UploadReceipt, BackendError>;

    /// Ask a question, scoped to `session` when one exists
    async fn ask(
        &self,
        question: &Question,
        session: Option<&SessionId>,
    ) -> Result<Answer, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_with_message() {
        let err = BackendError::Status {
            status: 400,
            message: Some("Question is required.".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "HTTP error! status: 400 (Question is required.)"
        );
        assert_eq!(err.server_message(), Some("Question is required."));
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_status_display_without_message() {
        let err = BackendError::Status {
            status: 502,
            message: None,
        };
        assert_eq!(err.to_string(), "HTTP error! status: 502");
        assert!(BackendError::Timeout.server_message().is_none());
    }
}
