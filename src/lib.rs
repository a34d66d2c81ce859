//! Formal Translator - Spanish to English translation with formal rewriting
//!
//! Text is sent through an ordered chain of free translation providers
//! (LibreTranslate, then MyMemory). The first successful result is rewritten
//! into a more formal register; when every provider fails a demo-mode stub is
//! returned instead, so translation never fails from the caller's side.

#![forbid(unsafe_code)]

pub mod cli;
pub mod core;
pub mod providers;
pub mod server;

// Re-export key types for convenience
pub use crate::core::{
    client::FallbackTranslator,
    config::TranslatorConfig,
    errors::TranslationError,
    formalizer::{formalize, FormalizationRule, Formalizer, FORMALIZATION_RULES},
    models::{TranslationRequest, TranslationResult, TranslationSource, LANGUAGE_PAIR},
    session::{RequestTicket, TranslationSession},
    stub::stub_translation,
};

pub use providers::{LibreTranslateProvider, MyMemoryProvider, TranslationProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
