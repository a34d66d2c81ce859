//! MyMemory adapter (query-string GET)

use async_trait::async_trait;
use tracing::debug;

use crate::core::errors::{Result, TranslationError};
use crate::core::models::LANGUAGE_PAIR;
use crate::providers::TranslationProvider;

const PROVIDER_NAME: &str = "mymemory";

/// In-body status MyMemory reports for a usable translation
const SUCCESS_STATUS: f64 = 200.0;

/// Adapter for the MyMemory `/get` endpoint
#[derive(Debug, Clone)]
pub struct MyMemoryProvider {
    client: reqwest::Client,
    endpoint: String,
    email: Option<String>,
}

impl MyMemoryProvider {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>, email: Option<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            email,
        }
    }

    fn unavailable(message: impl Into<String>) -> TranslationError {
        TranslationError::unavailable(PROVIDER_NAME, message)
    }
}

#[async_trait]
impl TranslationProvider for MyMemoryProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn translate(&self, text: &str) -> Result<String> {
        let langpair = LANGUAGE_PAIR.langpair();
        let mut query = vec![("q", text), ("langpair", langpair.as_str())];
        if let Some(email) = &self.email {
            query.push(("de", email.as_str()));
        }

        debug!("GET {} ({} chars)", self.endpoint, text.chars().count());

        let response = self
            .client
            .get(&self.endpoint)
            .query(&query)
            .send()
            .await
            .map_err(|e| Self::unavailable(format!("network error: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Self::unavailable(format!("HTTP {}: {}", status.as_u16(), error_text)));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Self::unavailable(format!("invalid response body: {}", e)))?;

        // HTTP 200 is not enough: quota and validation failures come back in the body.
        // Any JSON number equal to 200 counts; a string does not.
        if json["responseStatus"].as_f64() != Some(SUCCESS_STATUS) {
            let details = json["responseDetails"].as_str().unwrap_or("translation failed");
            return Err(Self::unavailable(format!(
                "responseStatus {}: {}",
                json["responseStatus"], details
            )));
        }

        json["responseData"]["translatedText"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| Self::unavailable("no responseData.translatedText in response"))
    }
}
