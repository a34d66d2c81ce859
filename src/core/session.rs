//! Latest-request-wins sequencing for interactive front ends

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::core::client::FallbackTranslator;
use crate::core::models::TranslationResult;

/// Identifier handed out for each request a session starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Wraps a translator so that only the newest request's result is delivered
#[derive(Debug, Clone)]
pub struct TranslationSession {
    translator: Arc<FallbackTranslator>,
    latest: Arc<AtomicU64>,
}

impl TranslationSession {
    pub fn new(translator: Arc<FallbackTranslator>) -> Self {
        Self {
            translator,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Start a new request, superseding every earlier ticket
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Translate, returning `None` if a newer request started meanwhile
    pub async fn translate_latest(&self, source_text: &str) -> Option<TranslationResult> {
        let ticket = self.begin();
        let result = self.translator.perform_translation(source_text).await;

        if self.is_current(ticket) {
            Some(result)
        } else {
            debug!("Discarding stale result for request {}", ticket.id());
            None
        }
    }
}
