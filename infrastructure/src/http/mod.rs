//! HTTP adapter for the question-answering backend.
//!
//! - [`backend::HttpQaBackend`]: implements [`QaBackend`](docqa_application::QaBackend) with reqwest
//! - [`error::HttpBackendError`]: client construction errors
//! - `wire`: request/response bodies as they appear on the wire

pub mod backend;
pub mod error;
mod wire;
