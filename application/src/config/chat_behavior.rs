//! Chat behavior: settings the chat handlers read on every submission.

use docqa_domain::{Locale, SourcePolicy};
use serde::{Deserialize, Serialize};

/// Behavior of the upload and chat handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatBehavior {
    /// Locale for placeholder, error and header strings.
    pub locale: Locale,
    /// Hide sources for replies containing a no-answer phrase when the
    /// backend does not send `answer_found`.
    pub legacy_no_answer_markers: bool,
}

impl Default for ChatBehavior {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            legacy_no_answer_markers: true,
        }
    }
}

impl ChatBehavior {
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_legacy_no_answer_markers(mut self, enabled: bool) -> Self {
        self.legacy_no_answer_markers = enabled;
        self
    }

    pub fn source_policy(&self) -> SourcePolicy {
        SourcePolicy::new(self.locale).with_legacy_markers(self.legacy_no_answer_markers)
    }
}
