//! Infrastructure layer for docqa
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBackendConfig, FileChatConfig, FileConfig,
    FileLoggingConfig, FileOutputConfig, FileReplConfig,
};
pub use http::{
    backend::{DEFAULT_BASE_URL, HttpBackendConfig, HttpQaBackend},
    error::HttpBackendError,
};
pub use logging::JsonlConversationLogger;
