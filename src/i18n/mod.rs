//! Supported languages and their labels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when parsing a language code
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    #[error("Unsupported language: {0:?} (expected one of: ko, en)")]
    Unsupported(String),
}

/// A content language. The blog is written in exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ko,
    En,
}

impl Language {
    /// Every supported language, in build order
    pub const ALL: [Language; 2] = [Language::Ko, Language::En];

    /// Short code used in directory names and URLs
    pub fn code(self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }

    /// The counterpart language, used for translation lookups
    pub fn other(self) -> Language {
        match self {
            Language::Ko => Language::En,
            Language::En => Language::Ko,
        }
    }

    /// Parse a code, falling back to `default` for empty or unknown input
    pub fn from_code_or(code: &str, default: Language) -> Language {
        match code.parse() {
            Ok(lang) => lang,
            Err(e) => {
                if !code.is_empty() {
                    tracing::debug!("{}, using {}", e, default);
                }
                default
            }
        }
    }

    /// Label of the synthetic tag that stands for "every post"
    pub fn all_tag_label(self) -> &'static str {
        match self {
            Language::Ko => "전체",
            Language::En => "All",
        }
    }

    /// Human readable name used in generated documents
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Ko => "Korean (한국어)",
            Language::En => "English",
        }
    }

    /// "N posts" label
    pub fn posts_count(self, n: usize) -> String {
        match self {
            Language::Ko => format!("{}개의 포스트", n),
            Language::En if n == 1 => "1 post".to_string(),
            Language::En => format!("{} posts", n),
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Ko
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" => Ok(Language::Ko),
            "en" => Ok(Language::En),
            _ => Err(LanguageError::Unsupported(s.to_string())),
        }
    }
}
