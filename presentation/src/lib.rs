//! Presentation layer for docqa
//!
//! This crate contains CLI definitions, output formatters,
//! the terminal chat view and the interactive chat REPL.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, DocumentReadError, ReplCommand, TerminalChatView, read_document};
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::spinner::WaitSpinner;
