//! Console output formatter for chat messages and answers

use colored::Colorize;
use docqa_application::ChatBehavior;
use docqa_domain::{Answer, UploadReceipt};

/// Formats answers and chat lines for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Answer text, followed by the sources block when the behavior's
    /// source policy allows it
    pub fn format_answer(answer: &Answer, behavior: &ChatBehavior) -> String {
        let mut output = answer.answer.clone();
        output.push('\n');

        if behavior.source_policy().should_show_sources(answer) {
            output.push_str(&Self::format_sources(
                behavior.locale.sources_header(),
                &answer.sources,
            ));
        }

        output
    }

    /// Format as JSON
    pub fn format_json(answer: &Answer) -> String {
        serde_json::to_string_pretty(answer).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn format_receipt(receipt: &UploadReceipt) -> String {
        format!(
            "{} {}",
            receipt.message,
            format!("(session: {})", receipt.session_id).dimmed()
        )
    }

    pub fn format_receipt_json(receipt: &UploadReceipt) -> String {
        serde_json::to_string_pretty(receipt).unwrap_or_else(|_| "{}".to_string())
    }

    /// Numbered list of sources under a header
    pub fn format_sources(header: &str, sources: &[String]) -> String {
        let mut output = format!("\n{}\n", header.cyan().bold());
        for (i, source) in sources.iter().enumerate() {
            let label = format!("[{}]", i + 1);
            let body = Self::indent(source.trim(), &" ".repeat(label.len() + 3));
            output.push_str(&format!(
                "  {} {}\n",
                label.yellow(),
                body.trim_start()
            ));
        }
        output
    }

    pub fn format_bot(text: &str) -> String {
        format!("{} {}", "bot>".cyan().bold(), text)
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docqa_domain::{Locale, SessionId};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_answer_with_sources() {
        plain();
        let answer = Answer::new("Seven days.")
            .with_sources(vec!["Refunds are accepted\nwithin 7 days.".to_string(), "FAQ".to_string()]);
        let behavior = ChatBehavior::default().with_locale(Locale::En);

        let output = ConsoleFormatter::format_answer(&answer, &behavior);
        assert_eq!(
            output,
            "Seven days.\n\nSources:\n  [1] Refunds are accepted\n      within 7 days.\n  [2] FAQ\n"
        );
    }

    #[test]
    fn test_answer_without_sources() {
        plain();
        let output = ConsoleFormatter::format_answer(&Answer::new("42"), &ChatBehavior::default());
        assert_eq!(output, "42\n");
    }

    #[test]
    fn test_apology_hides_sources() {
        plain();
        let answer = Answer::new("죄송합니다. 문서에 없는 내용입니다.")
            .with_sources(vec!["p.1".to_string()]);
        let output = ConsoleFormatter::format_answer(&answer, &ChatBehavior::default());
        assert!(!output.contains("참고 자료:"));
    }

    #[test]
    fn test_json_omits_missing_flag() {
        let json = ConsoleFormatter::format_json(&Answer::new("a"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["answer"], "a");
        assert!(value.get("answer_found").is_none());
    }

    #[test]
    fn test_receipt() {
        plain();
        let receipt = UploadReceipt {
            message: "Uploaded.".to_string(),
            session_id: SessionId::new("s-1").unwrap(),
        };
        assert_eq!(
            ConsoleFormatter::format_receipt(&receipt),
            "Uploaded. (session: s-1)"
        );
    }
}
