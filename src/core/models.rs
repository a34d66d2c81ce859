//! Core data models for translation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::errors::{Result, TranslationError};

/// Fixed source/target language pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguagePair {
    pub source: &'static str,
    pub target: &'static str,
}

impl LanguagePair {
    /// Pair code in the `src|tgt` form MyMemory expects
    pub fn langpair(&self) -> String {
        format!("{}|{}", self.source, self.target)
    }
}

/// The only pair this translator serves
pub const LANGUAGE_PAIR: LanguagePair = LanguagePair {
    source: "es",
    target: "en",
};

/// Translation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationRequest {
    source_text: String,
}

impl TranslationRequest {
    /// Trim the input and reject it when nothing is left
    pub fn new(text: impl AsRef<str>) -> Result<Self> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TranslationError::EmptyInput);
        }

        Ok(Self {
            source_text: trimmed.to_string(),
        })
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }
}

/// Where the raw text of a result came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum TranslationSource {
    /// A remote provider, by name
    Provider(String),
    /// The local demo-mode stub
    Stub,
}

impl TranslationSource {
    pub fn is_stub(&self) -> bool {
        matches!(self, TranslationSource::Stub)
    }
}

impl fmt::Display for TranslationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationSource::Provider(name) => write!(f, "{}", name),
            TranslationSource::Stub => write!(f, "stub"),
        }
    }
}

/// Translation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    pub text: String,
    pub source: TranslationSource,
    pub translated_at: DateTime<Utc>,
}

impl TranslationResult {
    pub fn new(text: String, source: TranslationSource) -> Self {
        Self {
            text,
            source,
            translated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_is_trimmed() {
        let request = TranslationRequest::new("  Hola mundo \n").unwrap();
        assert_eq!(request.source_text(), "Hola mundo");
    }

    #[test]
    fn test_blank_request_rejected() {
        assert!(matches!(
            TranslationRequest::new(" \t\n"),
            Err(TranslationError::EmptyInput)
        ));
        assert!(matches!(
            TranslationRequest::new(""),
            Err(TranslationError::EmptyInput)
        ));
    }

    #[test]
    fn test_langpair_code() {
        assert_eq!(LANGUAGE_PAIR.langpair(), "es|en");
    }

    #[test]
    fn test_source_display() {
        assert_eq!(TranslationSource::Provider("libretranslate".into()).to_string(), "libretranslate");
        assert_eq!(TranslationSource::Stub.to_string(), "stub");
        assert!(TranslationSource::Stub.is_stub());
    }
}
