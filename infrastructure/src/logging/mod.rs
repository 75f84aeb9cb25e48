//! Transcript logging.
//!
//! Provides [`JsonlConversationLogger`], which appends one JSON object per
//! conversation event and implements the
//! [`ConversationLogger`](docqa_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
