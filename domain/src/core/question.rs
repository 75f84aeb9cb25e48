//! Question value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question typed by the user (Value Object)
///
/// Always trimmed and never empty. Submitting blank input never gets
/// as far as constructing one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a new question, returning None for blank input
    pub fn try_new(content: impl AsRef<str>) -> Option<Self> {
        let trimmed = content.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Question {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Question::try_new(s).ok_or(DomainError::EmptyQuestion)
    }
}

impl TryFrom<&str> for Question {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Question::try_new(s).ok_or(DomainError::EmptyQuestion)
    }
}

impl From<Question> for String {
    fn from(q: Question) -> Self {
        q.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_is_trimmed() {
        let q = Question::try_new("  What is the refund policy?\n").unwrap();
        assert_eq!(q.content(), "What is the refund policy?");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(Question::try_new("").is_none());
        assert!(Question::try_new("   ").is_none());
        assert!(Question::try_new("\t\n").is_none());
    }

    #[test]
    fn test_try_from_reports_domain_error() {
        let err = Question::try_from("  ").unwrap_err();
        assert_eq!(err, DomainError::EmptyQuestion);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let q = Question::try_new("hello").unwrap();
        assert_eq!(serde_json::to_string(&q).unwrap(), "\"hello\"");
    }
}
