//! Error types for the HTTP adapter

use docqa_application::BackendError;
use thiserror::Error;

/// Errors raised while building the HTTP client
#[derive(Error, Debug)]
pub enum HttpBackendError {
    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Map a transport-level reqwest failure onto the port's error type
pub(crate) fn from_transport(error: reqwest::Error) -> BackendError {
    if error.is_timeout() {
        BackendError::Timeout
    } else if error.is_decode() {
        BackendError::InvalidResponse(error.to_string())
    } else {
        BackendError::ConnectionError(error.to_string())
    }
}
