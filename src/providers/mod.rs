//! Translation provider adapters
//!
//! Each adapter turns one external service's request/response shape into the
//! uniform [`TranslationProvider`] contract. Any failure surfaces as
//! [`TranslationError::ProviderUnavailable`](crate::core::errors::TranslationError::ProviderUnavailable)
//! and never as partial text.

pub mod libre;
pub mod mymemory;

use async_trait::async_trait;

use crate::core::errors::Result;

pub use libre::LibreTranslateProvider;
pub use mymemory::MyMemoryProvider;

/// Translation provider interface
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Short identifier used in logs and results
    fn name(&self) -> &str;

    /// Translate text over the fixed language pair
    async fn translate(&self, text: &str) -> Result<String>;
}
