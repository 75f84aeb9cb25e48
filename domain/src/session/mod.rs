//! Document session domain.
//!
//! - [`entities::SessionId`]: identifier returned by a successful upload
//! - [`entities::Message`]: a single rendered chat message
//! - [`response::Answer`]: the backend reply to a question
//! - [`source_policy::SourcePolicy`]: whether an answer's sources are shown

pub mod entities;
pub mod response;
pub mod source_policy;
pub mod upload;
