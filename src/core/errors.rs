//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Source text was blank after trimming
    #[error("Source text is empty")]
    EmptyInput,

    /// A single provider could not produce a translation
    #[error("Provider {provider} unavailable: {message}")]
    ProviderUnavailable {
        provider: String,
        message: String,
    },

    /// Every provider in the fallback chain failed
    #[error("All translation providers failed")]
    AllProvidersExhausted,

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl TranslationError {
    /// Build a `ProviderUnavailable` error for the named provider
    pub fn unavailable(provider: impl Into<String>, message: impl Into<String>) -> Self {
        TranslationError::ProviderUnavailable {
            provider: provider.into(),
            message: message.into(),
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
