//! HTTP API server implementation

use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::client::FallbackTranslator;
use crate::core::errors::TranslationError;
use crate::core::models::{TranslationRequest, TranslationSource, LANGUAGE_PAIR};

/// Application state
#[derive(Clone)]
pub struct AppState {
    translator: Arc<FallbackTranslator>,
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

/// Provider chain response
#[derive(Serialize)]
struct ProvidersResponse {
    source_lang: String,
    target_lang: String,
    providers: Vec<String>,
}

/// Translation request body
#[derive(Deserialize)]
pub struct TranslateRequest {
    pub text: String,
}

/// Translation response body
#[derive(Serialize)]
pub struct TranslateResponse {
    pub translation: String,
    /// `provider` or `stub`
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    pub translated_at: DateTime<Utc>,
}

/// Error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

/// Health check handler
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// List the provider chain in priority order
async fn get_providers(State(state): State<Arc<AppState>>) -> Json<ProvidersResponse> {
    Json(ProvidersResponse {
        source_lang: LANGUAGE_PAIR.source.to_string(),
        target_lang: LANGUAGE_PAIR.target.to_string(),
        providers: state.translator.provider_names(),
    })
}

/// Translation handler
async fn translate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request = TranslationRequest::new(&payload.text).map_err(|e| {
        warn!("Rejected translation request: {}", e);
        (StatusCode::BAD_REQUEST, Json(error_body(&e)))
    })?;

    let result = state.translator.translate(&request).await;

    let (source, provider) = match result.source {
        TranslationSource::Provider(name) => ("provider".to_string(), Some(name)),
        TranslationSource::Stub => ("stub".to_string(), None),
    };

    Ok(Json(TranslateResponse {
        translation: result.text,
        source,
        provider,
        translated_at: result.translated_at,
    }))
}

fn error_body(error: &TranslationError) -> ErrorResponse {
    let code = match error {
        TranslationError::EmptyInput => "empty_input",
        _ => "translation_error",
    };

    ErrorResponse {
        error: ErrorDetail {
            message: error.to_string(),
            code: Some(code.to_string()),
            r#type: Some("invalid_request_error".to_string()),
        },
    }
}

/// Build the API router around a translator
pub fn router(translator: Arc<FallbackTranslator>) -> Router {
    let state = Arc::new(AppState { translator });

    Router::new()
        .route("/", get(health_check))
        .route("/v1/providers", get(get_providers))
        .route("/translate", post(translate))
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(host: String, port: u16, translator: FallbackTranslator) -> anyhow::Result<()> {
    let app = router(Arc::new(translator));

    // Bind address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::Result;
    use crate::providers::TranslationProvider;
    use assert_json_diff::{assert_json_eq, assert_json_include};
    use async_trait::async_trait;
    use serde_json::json;
    use std::time::Duration;

    struct Fixed(Option<&'static str>);

    #[async_trait]
    impl TranslationProvider for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn translate(&self, _text: &str) -> Result<String> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| TranslationError::unavailable("fixed", "down"))
        }
    }

    async fn spawn_app(reply: Option<&'static str>) -> String {
        let providers: Vec<Arc<dyn TranslationProvider>> = vec![Arc::new(Fixed(reply))];
        let translator = FallbackTranslator::with_providers(providers, Duration::from_secs(1));
        let app = router(Arc::new(translator));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_health_check() {
        let base = spawn_app(Some("hello")).await;
        let body: serde_json::Value = reqwest::get(base.as_str()).await.unwrap().json().await.unwrap();

        assert_json_include!(actual: body, expected: json!({"status": "ok", "service": "formal-translator"}));
    }

    #[tokio::test]
    async fn test_providers_listing() {
        let base = spawn_app(Some("hello")).await;
        let body: serde_json::Value = reqwest::get(format!("{}/v1/providers", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_json_eq!(
            body,
            json!({"source_lang": "es", "target_lang": "en", "providers": ["fixed"]})
        );
    }

    #[tokio::test]
    async fn test_translate_success() {
        let base = spawn_app(Some("yeah, we don't know")).await;
        let response = reqwest::Client::new()
            .post(format!("{}/translate", base))
            .json(&json!({"text": "  sí, no sabemos  "}))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_json_include!(
            actual: body,
            expected: json!({
                "translation": "Yeah, we do not know",
                "source": "provider",
                "provider": "fixed"
            })
        );
    }

    #[tokio::test]
    async fn test_translate_falls_back_to_stub() {
        let base = spawn_app(None).await;
        let body: serde_json::Value = reqwest::Client::new()
            .post(format!("{}/translate", base))
            .json(&json!({"text": "Hola"}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["source"], "stub");
        assert!(body.get("provider").is_none());
        assert!(body["translation"]
            .as_str()
            .unwrap()
            .starts_with("[Demo Mode] Translation: Hola"));
    }

    #[tokio::test]
    async fn test_blank_text_is_rejected() {
        let base = spawn_app(Some("unused")).await;
        let response = reqwest::Client::new()
            .post(format!("{}/translate", base))
            .json(&json!({"text": "   \n"}))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 400);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_json_eq!(
            body,
            json!({
                "error": {
                    "message": "Source text is empty",
                    "code": "empty_input",
                    "type": "invalid_request_error"
                }
            })
        );
    }
}
