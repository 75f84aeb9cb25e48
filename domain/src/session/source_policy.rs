//! Source display policy
//!
//! Decides whether the sources block is attached to an answer. The
//! backend's `answer_found` flag wins when present. Without it, a reply
//! containing one of the locale's no-answer phrases hides its sources,
//! unless that fallback is switched off.

use crate::config::Locale;
use crate::session::response::Answer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePolicy {
    locale: Locale,
    legacy_markers: bool,
}

impl SourcePolicy {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            legacy_markers: true,
        }
    }

    /// Enable or disable the no-answer phrase fallback
    pub fn with_legacy_markers(mut self, enabled: bool) -> Self {
        self.legacy_markers = enabled;
        self
    }

    pub fn should_show_sources(&self, answer: &Answer) -> bool {
        if answer.sources.is_empty() {
            return false;
        }
        match answer.answer_found {
            Some(found) => found,
            None if self.legacy_markers => !self.looks_unanswered(&answer.answer),
            None => true,
        }
    }

    fn looks_unanswered(&self, text: &str) -> bool {
        self.locale
            .no_answer_markers()
            .iter()
            .any(|marker| text.contains(marker))
    }
}

impl Default for SourcePolicy {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sourced(text: &str) -> Answer {
        Answer::new(text).with_sources(vec!["passage one".to_string()])
    }

    #[test]
    fn test_no_sources_never_shown() {
        let policy = SourcePolicy::new(Locale::Ko);
        assert!(!policy.should_show_sources(&Answer::new("답변")));
        assert!(!policy.should_show_sources(&Answer::new("답변").with_answer_found(true)));
    }

    #[test]
    fn test_flag_takes_precedence() {
        let policy = SourcePolicy::new(Locale::Ko);
        // Flag says found even though the text contains the apology phrase
        assert!(policy.should_show_sources(&sourced("죄송합니다만 답은 3입니다").with_answer_found(true)));
        assert!(!policy.should_show_sources(&sourced("환불은 7일 이내").with_answer_found(false)));
    }

    #[test]
    fn test_legacy_marker_hides_sources() {
        let policy = SourcePolicy::new(Locale::Ko);
        assert!(!policy.should_show_sources(&sourced(
            "죄송합니다. 주어진 문서의 내용에 대해서만 답변할 수 있습니다."
        )));
        assert!(policy.should_show_sources(&sourced("환불은 7일 이내에 가능합니다.")));
    }

    #[test]
    fn test_markers_are_locale_specific() {
        let policy = SourcePolicy::new(Locale::Ja);
        assert!(!policy.should_show_sources(&sourced(
            "申し訳ありませんが、与えられたドキュメントの内容についてのみお答えできます"
        )));
        assert!(policy.should_show_sources(&sourced("죄송합니다")));
    }

    #[test]
    fn test_legacy_markers_disabled() {
        let policy = SourcePolicy::new(Locale::Ko).with_legacy_markers(false);
        assert!(policy.should_show_sources(&sourced("죄송합니다")));
    }
}
