//! Interactive chat module
//!
//! Provides a readline-based chat against the document QA backend and the
//! terminal implementation of the chat view.

mod document;
mod repl;
mod terminal_view;

pub use document::{DocumentReadError, read_document};
pub use repl::{ChatRepl, ReplCommand};
pub use terminal_view::TerminalChatView;
