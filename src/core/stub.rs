//! Local demo-mode translator used when every provider is down

/// Explanatory text appended after the echoed input
pub const STUB_NOTE: &str = "Note: Please configure a translation API key for full functionality. \
This application is designed to provide formal, elegant English translations with appropriate \
synonyms and natural language.";

/// Deterministic placeholder that echoes the source text
pub fn stub_translation(source_text: &str) -> String {
    format!("[Demo Mode] Translation: {}\n\n{}", source_text, STUB_NOTE)
}
