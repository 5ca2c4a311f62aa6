use booksum_llm::{BookSummarizer, CompletionProvider};
use std::sync::Arc;

/// Shared application state
///
/// Built once before the server starts; handlers only read from it.
pub struct AppState {
    /// Summarizer wrapping the process-wide provider handle
    pub summarizer: BookSummarizer,
}

impl AppState {
    /// Create new application state around an already configured provider
    pub fn new(model: impl Into<String>, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            summarizer: BookSummarizer::new(provider, model),
        }
    }
}
