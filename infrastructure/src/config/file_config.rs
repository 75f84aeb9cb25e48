//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use crate::http::backend::{DEFAULT_BASE_URL, HttpBackendConfig};
use docqa_application::ChatBehavior;
use docqa_domain::{Locale, OutputFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("base_url must start with http:// or https:// (got {0:?})")]
    InvalidBaseUrl(String),
}

/// Raw backend configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Root of the backend API; `upload/` and `ask/` are resolved against it
    pub base_url: String,
    /// Request timeout in seconds (no timeout when unset)
    pub timeout_seconds: Option<u64>,
    /// Custom User-Agent header
    pub user_agent: Option<String>,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
            user_agent: None,
        }
    }
}

impl FileBackendConfig {
    pub fn to_http_config(&self) -> HttpBackendConfig {
        let mut config = HttpBackendConfig::new(&self.base_url)
            .with_timeout(self.timeout_seconds.map(Duration::from_secs));
        if let Some(agent) = &self.user_agent {
            config = config.with_user_agent(agent);
        }
        config
    }
}

/// Raw chat configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Locale for fixed chat strings (ko, ja, en)
    pub locale: Locale,
    /// Hide sources on apology replies when the backend sends no flag
    pub legacy_no_answer_markers: bool,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            legacy_no_answer_markers: true,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show a spinner while waiting for the backend
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of questions, answers and uploads
    pub conversation_file: Option<PathBuf>,
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub backend: FileBackendConfig,
    pub chat: FileChatConfig,
    pub output: FileOutputConfig,
    pub repl: FileReplConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(0) = self.backend.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        let url = self.backend.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigValidationError::InvalidBaseUrl(
                self.backend.base_url.clone(),
            ));
        }

        Ok(())
    }

    pub fn chat_behavior(&self) -> ChatBehavior {
        ChatBehavior::default()
            .with_locale(self.chat.locale)
            .with_legacy_no_answer_markers(self.chat.legacy_no_answer_markers)
    }
}
