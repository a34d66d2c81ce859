//! LibreTranslate adapter (JSON POST)

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::core::errors::{Result, TranslationError};
use crate::core::models::LANGUAGE_PAIR;
use crate::providers::TranslationProvider;

const PROVIDER_NAME: &str = "libretranslate";

#[derive(Debug, Serialize)]
struct LibreRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

/// Adapter for a LibreTranslate `/translate` endpoint
#[derive(Debug, Clone)]
pub struct LibreTranslateProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl LibreTranslateProvider {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        }
    }

    fn unavailable(message: impl Into<String>) -> TranslationError {
        TranslationError::unavailable(PROVIDER_NAME, message)
    }
}

#[async_trait]
impl TranslationProvider for LibreTranslateProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn translate(&self, text: &str) -> Result<String> {
        let body = LibreRequest {
            q: text,
            source: LANGUAGE_PAIR.source,
            target: LANGUAGE_PAIR.target,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        debug!("POST {} ({} chars)", self.endpoint, text.chars().count());

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| Self::unavailable(format!("network error: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            // LibreTranslate reports failures as {"error": "..."}
            let message = serde_json::from_str::<serde_json::Value>(&error_text)
                .ok()
                .and_then(|v| v["error"].as_str().map(str::to_string))
                .unwrap_or(error_text);
            return Err(Self::unavailable(format!("HTTP {}: {}", status.as_u16(), message)));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Self::unavailable(format!("invalid response body: {}", e)))?;

        json["translatedText"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| Self::unavailable("no translatedText in response"))
    }
}
