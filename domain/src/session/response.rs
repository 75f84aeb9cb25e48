//! Backend response value objects

use crate::session::entities::SessionId;
use serde::{Deserialize, Deserializer, Serialize};

/// Reply to a question
///
/// `sources` are the retrieved passages the answer was built from, in the
/// order the backend ranked them. `answer_found` is the backend's explicit
/// statement of whether the documents contained an answer; older backends
/// omit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sources: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_found: Option<bool>,
}

impl Answer {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            sources: Vec::new(),
            answer_found: None,
        }
    }

    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_answer_found(mut self, found: bool) -> Self {
        self.answer_found = Some(found);
        self
    }
}

/// `"sources": null` reads the same as a missing field
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reply to a successful document upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub message: String,
    pub session_id: SessionId,
}
