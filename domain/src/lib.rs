//! Domain layer for docqa
//!
//! This crate contains the value objects shared by every other layer.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Session**: an opaque identifier handed out by the backend after a
//!   document upload. Every later question is scoped to it.
//! - **Message**: a display-only record with a [`Sender`]. Messages are
//!   rendered and forgotten; the view is the only store.
//! - **Answer**: the backend's reply plus the source passages it cites.
//!   [`SourcePolicy`] decides whether those sources are shown.

pub mod config;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use config::{Locale, OutputFormat};
pub use core::{error::DomainError, question::Question};
pub use session::{
    entities::{Message, Sender, SessionId},
    response::{Answer, UploadReceipt},
    source_policy::SourcePolicy,
    upload::UploadFile,
};
