//! Application-level configuration.
//!
//! - [`ChatBehavior`]: locale and source display settings for the chat handlers

pub mod chat_behavior;

pub use chat_behavior::ChatBehavior;
