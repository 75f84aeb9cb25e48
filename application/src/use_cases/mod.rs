//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod ask_question;
pub mod chat_controller;
pub mod submit_guard;
pub mod upload_document;
