//! Application layer for docqa
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ChatBehavior;
pub use ports::{
    chat_view::{ChatView, MemoryChatView, MessageHandle, RenderedMessage},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    qa_backend::{BackendError, QaBackend},
};
pub use use_cases::ask_question::{AskQuestionError, AskQuestionInput, AskQuestionUseCase};
pub use use_cases::chat_controller::{ChatController, SubmitOutcome};
pub use use_cases::submit_guard::{SubmitGuard, SubmitPermit};
pub use use_cases::upload_document::{UploadDocumentError, UploadDocumentUseCase};
