use booksum_common::{BookSumError, Result, SummaryRequest};
use std::sync::Arc;
use tracing::{info, warn};

use crate::llm_trait::CompletionProvider;
use crate::prompts::{book_prompt, SYSTEM_PROMPT};
use crate::types::{ChatCompletionRequest, ChatMessage};

/// Turns a book title and author into a summary with one provider call
#[derive(Clone)]
pub struct BookSummarizer {
    provider: Arc<dyn CompletionProvider>,
    model: String,
}

impl BookSummarizer {
    /// Create new summarizer
    pub fn new(provider: Arc<dyn CompletionProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Model name sent with every request
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the chat request for one book
    pub fn build_request(&self, request: &SummaryRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(book_prompt(&request.book_name, &request.author)),
            ],
        }
    }

    /// Summarize a book.
    ///
    /// Exactly one provider call is made. A response without usable text in
    /// its first choice is reported as [`BookSumError::EmptyCompletion`].
    pub async fn summarize(&self, request: &SummaryRequest) -> Result<String> {
        info!(
            book = %request.book_name,
            author = %request.author,
            "Requesting book summary"
        );

        let response = self.provider.complete(self.build_request(request)).await?;

        match response.first_text() {
            Some(text) => {
                info!("Summary generated - Length: {} chars", text.len());
                Ok(text.to_string())
            }
            None => {
                warn!(
                    "Provider returned {} choice(s) without text",
                    response.choices.len()
                );
                Err(BookSumError::EmptyCompletion)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatCompletionResponse;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct ScriptedProvider {
        reply: Option<ChatCompletionResponse>,
        seen: Mutex<Vec<ChatCompletionRequest>>,
    }

    impl ScriptedProvider {
        fn new(reply: Option<ChatCompletionResponse>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl CompletionProvider for ScriptedProvider {
        async fn complete(&self, request: ChatCompletionRequest) -> Result<ChatCompletionResponse> {
            self.seen.lock().unwrap().push(request);
            self.reply
                .clone()
                .ok_or_else(|| BookSumError::llm("connection reset"))
        }
    }

    fn dune() -> SummaryRequest {
        SummaryRequest {
            book_name: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
        }
    }

    #[tokio::test]
    async fn test_summarize_sends_fixed_prompt() {
        let provider = ScriptedProvider::new(Some(ChatCompletionResponse::with_text(
            "Dune is a science fiction novel...",
        )));
        let summarizer = BookSummarizer::new(provider.clone(), "gpt-3.5-turbo");

        let summary = summarizer.summarize(&dune()).await.unwrap();
        assert_eq!(summary, "Dune is a science fiction novel...");

        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].model, "gpt-3.5-turbo");
        assert_eq!(seen[0].messages[0], ChatMessage::system(SYSTEM_PROMPT));
        assert_eq!(
            seen[0].messages[1],
            ChatMessage::user("Summarize the book \"Dune\" by Frank Herbert.")
        );
    }

    #[tokio::test]
    async fn test_empty_completion_is_error() {
        let provider = ScriptedProvider::new(Some(ChatCompletionResponse {
            choices: Vec::new(),
        }));
        let summarizer = BookSummarizer::new(provider.clone(), "gpt-3.5-turbo");

        let err = summarizer.summarize(&dune()).await.unwrap_err();
        assert!(matches!(err, BookSumError::EmptyCompletion));
        assert_eq!(provider.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_provider_failure_is_not_retried() {
        let provider = ScriptedProvider::new(None);
        let summarizer = BookSummarizer::new(provider.clone(), "gpt-3.5-turbo");

        let err = summarizer.summarize(&dune()).await.unwrap_err();
        assert!(matches!(err, BookSumError::Llm(_)));
        assert_eq!(provider.seen.lock().unwrap().len(), 1);
    }
}
