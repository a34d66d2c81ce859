//! Fallback translation client
//!
//! Providers are tried one at a time in priority order. The first success is
//! formalized and returned; when every provider fails the demo-mode stub is
//! formalized instead, so callers always receive text.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::formalizer::formalize;
use crate::core::models::{TranslationRequest, TranslationResult, TranslationSource};
use crate::core::stub::stub_translation;
use crate::providers::{LibreTranslateProvider, MyMemoryProvider, TranslationProvider};

/// Translation client with ordered provider fallback
#[derive(Clone)]
pub struct FallbackTranslator {
    providers: Vec<Arc<dyn TranslationProvider>>,
    timeout: Duration,
}

impl std::fmt::Debug for FallbackTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackTranslator")
            .field("providers", &self.provider_names())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl FallbackTranslator {
    /// Build the default chain: LibreTranslate, then MyMemory
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config.validate()?;
        for warning in config.warnings() {
            warn!("{}", warning);
        }

        let timeout = config.timeout();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .build()?;

        let providers: Vec<Arc<dyn TranslationProvider>> = vec![
            Arc::new(LibreTranslateProvider::new(
                client.clone(),
                config.libretranslate_url,
                config.libretranslate_api_key,
            )),
            Arc::new(MyMemoryProvider::new(
                client,
                config.mymemory_url,
                config.mymemory_email,
            )),
        ];

        Ok(Self::with_providers(providers, timeout))
    }

    /// Build a chain from arbitrary providers, highest priority first
    pub fn with_providers(providers: Vec<Arc<dyn TranslationProvider>>, timeout: Duration) -> Self {
        Self { providers, timeout }
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = TranslatorConfig::from_sources()?;
        Self::new(config)
    }

    /// Translate a validated request
    pub async fn translate(&self, request: &TranslationRequest) -> TranslationResult {
        self.perform_translation(request.source_text()).await
    }

    /// Translate text; never fails, degrading to the stub
    pub async fn perform_translation(&self, source_text: &str) -> TranslationResult {
        match self.first_success(source_text).await {
            Ok((provider, raw)) => {
                info!("Translated with {}", provider);
                TranslationResult::new(formalize(&raw), TranslationSource::Provider(provider))
            }
            Err(e) => {
                warn!("{}, using demo-mode stub", e);
                TranslationResult::new(formalize(&stub_translation(source_text)), TranslationSource::Stub)
            }
        }
    }

    /// Names of the configured providers in priority order
    pub fn provider_names(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.name().to_string()).collect()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn first_success(&self, source_text: &str) -> Result<(String, String)> {
        for provider in &self.providers {
            match self.call_provider(provider.as_ref(), source_text).await {
                Ok(raw) => return Ok((provider.name().to_string(), raw)),
                Err(e) => {
                    warn!("{}, trying next provider", e);
                    continue;
                }
            }
        }

        Err(TranslationError::AllProvidersExhausted)
    }

    async fn call_provider(&self, provider: &dyn TranslationProvider, source_text: &str) -> Result<String> {
        debug!("Requesting translation from {}", provider.name());

        match tokio::time::timeout(self.timeout, provider.translate(source_text)).await {
            Ok(result) => result,
            Err(_) => Err(TranslationError::unavailable(
                provider.name(),
                format!("timed out after {:?}", self.timeout),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted provider that counts its calls
    struct ScriptedProvider {
        name: &'static str,
        reply: Option<&'static str>,
        delay: Duration,
        calls: AtomicUsize,
    }

    impl ScriptedProvider {
        fn ok(name: &'static str, reply: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                reply: Some(reply),
                delay: Duration::ZERO,
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(name: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                reply: None,
                delay: Duration::ZERO,
                calls: AtomicUsize::new(0),
            })
        }

        fn slow(name: &'static str, reply: &'static str, delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                name,
                reply: Some(reply),
                delay,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TranslationProvider for ScriptedProvider {
        fn name(&self) -> &str {
            self.name
        }

        async fn translate(&self, _text: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.reply
                .map(str::to_string)
                .ok_or_else(|| TranslationError::unavailable(self.name, "scripted failure"))
        }
    }

    fn chain(providers: &[Arc<ScriptedProvider>]) -> FallbackTranslator {
        let providers = providers
            .iter()
            .map(|p| p.clone() as Arc<dyn TranslationProvider>)
            .collect();
        FallbackTranslator::with_providers(providers, Duration::from_millis(200))
    }

    #[tokio::test]
    async fn test_first_success_wins() {
        let a = ScriptedProvider::ok("a", "we can't stay");
        let b = ScriptedProvider::ok("b", "unused");
        let translator = chain(&[a.clone(), b.clone()]);

        let result = translator.perform_translation("No podemos quedarnos").await;

        assert_eq!(result.text, "We cannot stay");
        assert_eq!(result.source, TranslationSource::Provider("a".to_string()));
        assert_eq!(a.calls(), 1);
        assert_eq!(b.calls(), 0);
    }

    #[tokio::test]
    async fn test_falls_back_to_second_provider() {
        let a = ScriptedProvider::failing("a");
        let b = ScriptedProvider::ok("b", "don't worry");
        let translator = chain(&[a.clone(), b.clone()]);

        let result = translator.perform_translation("no te preocupes").await;

        assert_eq!(result.text, "Do not worry");
        assert_eq!(result.text, formalize("don't worry"));
        assert_eq!(result.source, TranslationSource::Provider("b".to_string()));
        assert_eq!(a.calls(), 1);
        assert_eq!(b.calls(), 1);
    }

    #[tokio::test]
    async fn test_all_failures_use_formalized_stub() {
        let a = ScriptedProvider::failing("a");
        let b = ScriptedProvider::failing("b");
        let translator = chain(&[a, b]);

        let result = translator.perform_translation("Hola").await;

        assert_eq!(result.text, formalize(&stub_translation("Hola")));
        assert!(result.source.is_stub());
    }

    #[tokio::test]
    async fn test_stub_output_is_formalized() {
        let translator = chain(&[ScriptedProvider::failing("a")]);

        let result = translator.perform_translation("hola. que tal, vale ok gracias").await;

        assert!(result
            .text
            .starts_with("[Demo Mode] Translation: hola. Que tal, vale acceptable gracias\n\nNote:"));
    }

    #[tokio::test]
    async fn test_slow_provider_times_out() {
        let a = ScriptedProvider::slow("a", "too late", Duration::from_secs(5));
        let b = ScriptedProvider::ok("b", "in time");
        let translator = chain(&[a.clone(), b.clone()]);

        let result = translator.perform_translation("Hola").await;

        assert_eq!(result.text, "In time");
        assert_eq!(a.calls(), 1);
        assert_eq!(b.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_chain_uses_stub() {
        let translator = FallbackTranslator::with_providers(vec![], Duration::from_secs(1));
        let result = translator.perform_translation("Hola").await;
        assert!(result.source.is_stub());
    }

    #[test]
    fn test_default_chain_order() {
        let translator = FallbackTranslator::new(TranslatorConfig::default()).unwrap();
        assert_eq!(translator.provider_names(), vec!["libretranslate", "mymemory"]);
        assert_eq!(translator.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = TranslatorConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        assert!(FallbackTranslator::new(config).is_err());
    }
}
