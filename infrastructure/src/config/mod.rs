//! Configuration file loading for docqa
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. `DOCQA_*` environment variables (`DOCQA_BACKEND__BASE_URL=...`)
//! 3. Project root: `./docqa.toml` or `./.docqa.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/docqa/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBackendConfig, FileChatConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
