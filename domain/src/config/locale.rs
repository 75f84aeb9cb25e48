//! Locale value object
//!
//! The chat shows a handful of fixed strings (placeholder, error, sources
//! header). Each locale carries its own copy, plus the phrases a backend
//! without an `answer_found` flag uses when it could not answer.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ko,
    Ja,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::Ja => "ja",
            Locale::En => "en",
        }
    }

    /// Placeholder shown while an answer is being generated
    pub fn pending_answer(&self) -> &'static str {
        match self {
            Locale::Ko => "답변을 생성 중입니다...",
            Locale::Ja => "回答を生成中です...",
            Locale::En => "Generating an answer...",
        }
    }

    /// Replaces the placeholder when a question fails
    pub fn ask_failed(&self) -> &'static str {
        match self {
            Locale::Ko => "오류가 발생했습니다. 잠시 후 다시 시도해주세요.",
            Locale::Ja => "エラーが発生しました。しばらくしてから再度お試しください。",
            Locale::En => "Something went wrong. Please try again later.",
        }
    }

    pub fn sources_header(&self) -> &'static str {
        match self {
            Locale::Ko => "참고 자료:",
            Locale::Ja => "参考資料:",
            Locale::En => "Sources:",
        }
    }

    pub fn uploading(&self) -> &'static str {
        match self {
            Locale::Ko => "파일을 업로드하는 중입니다...",
            Locale::Ja => "ファイルをアップロードしています...",
            Locale::En => "Uploading file...",
        }
    }

    pub fn upload_failed(&self) -> &'static str {
        match self {
            Locale::Ko => "파일 업로드에 실패했습니다.",
            Locale::Ja => "ファイルのアップロードに失敗しました。",
            Locale::En => "File upload failed.",
        }
    }

    /// Phrases that mark a "could not answer from the documents" reply
    pub fn no_answer_markers(&self) -> &'static [&'static str] {
        match self {
            Locale::Ko => &["죄송합니다"],
            Locale::Ja => &["申し訳ありません"],
            Locale::En => &["Sorry", "sorry"],
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" | "kr" | "korean" => Ok(Locale::Ko),
            "ja" | "jp" | "japanese" => Ok(Locale::Ja),
            "en" | "english" => Ok(Locale::En),
            other => Err(DomainError::UnknownLocale(other.to_string())),
        }
    }
}
