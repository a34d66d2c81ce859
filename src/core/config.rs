//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::core::errors::{Result, TranslationError};

/// Default LibreTranslate endpoint
pub const DEFAULT_LIBRETRANSLATE_URL: &str = "https://libretranslate.com/translate";

/// Default MyMemory endpoint
pub const DEFAULT_MYMEMORY_URL: &str = "https://api.mymemory.translated.net/get";

/// Default per-provider timeout
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Configuration for translator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    pub libretranslate_url: String,
    pub libretranslate_api_key: Option<String>,
    pub mymemory_url: String,
    /// Contact address MyMemory uses to grant a larger free quota
    pub mymemory_email: Option<String>,
    pub timeout_ms: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            libretranslate_url: DEFAULT_LIBRETRANSLATE_URL.to_string(),
            libretranslate_api_key: None,
            mymemory_url: DEFAULT_MYMEMORY_URL.to_string(),
            mymemory_email: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl TranslatorConfig {
    /// Overlay environment variables on top of the current values
    pub fn apply_env(self) -> Result<Self> {
        self.apply_vars(env_var)
    }

    /// Overlay values looked up by variable name
    pub fn apply_vars<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("LIBRETRANSLATE_URL") {
            self.libretranslate_url = url;
        }
        if let Some(key) = lookup("LIBRETRANSLATE_API_KEY") {
            self.libretranslate_api_key = Some(key);
        }
        if let Some(url) = lookup("MYMEMORY_URL") {
            self.mymemory_url = url;
        }
        if let Some(email) = lookup("MYMEMORY_EMAIL") {
            self.mymemory_email = Some(email);
        }
        if let Some(timeout) = lookup("REQUEST_TIMEOUT_MS") {
            self.timeout_ms = timeout
                .trim()
                .parse::<u64>()
                .map_err(|e| TranslationError::ConfigError {
                    message: format!("REQUEST_TIMEOUT_MS must be an integer: {}", e),
                })?;
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().apply_env()
    }

    /// Defaults, then the `TRANSLATOR_CONFIG` file if set, then the environment
    pub fn from_sources() -> Result<Self> {
        match env_var("TRANSLATOR_CONFIG") {
            Some(path) => {
                debug!("Loading configuration from {}", path);
                Self::from_file(&path)?.apply_env()
            }
            None => Self::from_env(),
        }
    }

    /// Load and validate configuration
    pub fn load() -> Result<Self> {
        let config = Self::from_sources()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        validate_url("libretranslate_url", &self.libretranslate_url)?;
        validate_url("mymemory_url", &self.mymemory_url)?;

        if self.timeout_ms == 0 {
            return Err(TranslationError::ConfigError {
                message: "timeout_ms must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Non-fatal problems worth reporting once when a translator is built
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.libretranslate_api_key.is_none() {
            warnings.push(
                "No LibreTranslate API key configured; the public instance may reject requests"
                    .to_string(),
            );
        }
        warnings
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn validate_url(field: &str, value: &str) -> Result<()> {
    let parsed = reqwest::Url::parse(value).map_err(|e| TranslationError::ConfigError {
        message: format!("{} is not a valid URL ({}): {}", field, value, e),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(TranslationError::ConfigError {
            message: format!("{} must use http or https, got {}", field, scheme),
        }),
    }
}
