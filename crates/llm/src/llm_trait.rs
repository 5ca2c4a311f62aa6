use crate::types::{ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use booksum_common::Result;

/// Common trait for chat-completion providers
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send one chat completion request; implementations must not retry
    async fn complete(&self, request: ChatCompletionRequest) -> Result<ChatCompletionResponse>;
}
