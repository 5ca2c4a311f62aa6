use async_trait::async_trait;
use booksum_common::{AppConfig, BookSumError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::llm_trait::CompletionProvider;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse};

/// OpenAI-compatible chat-completion client
///
/// Built once at startup and shared behind an `Arc`; it holds no mutable state.
#[derive(Clone)]
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    timeout: Duration,
    client: Client,
}

impl OpenAiClient {
    /// Create new client
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BookSumError::config(format!("Failed to create HTTP client: {}", e)))?;

        info!("LLM client initialized: {} (timeout {:?})", base_url, timeout);
        Ok(Self {
            base_url,
            api_key: api_key.into(),
            timeout,
            client,
        })
    }

    /// Create client from application configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            config.require_api_key()?,
            config.openai_base_url.clone(),
            Duration::from_secs(config.llm_timeout_secs),
        )
    }

    /// Chat completions URL
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn describe_send_error(&self, err: &reqwest::Error) -> String {
        if err.is_timeout() {
            format!("request timed out after {:?}", self.timeout)
        } else if err.is_connect() {
            format!("could not connect to provider: {}", err)
        } else {
            format!("failed to send request: {}", err)
        }
    }
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, request: ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        let url = self.completions_url();

        debug!(
            "Sending chat completion request - Model: {}, Messages: {}",
            request.model,
            request.messages.len()
        );

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let reason = self.describe_send_error(&e);
                error!(error = %e, "Failed to reach LLM provider");
                BookSumError::llm(reason)
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            error!(status, body = %message, "LLM provider returned an error status");
            return Err(BookSumError::llm(format!("API error: {} - {}", status, message)));
        }

        let body: ChatCompletionResponse = resp
            .json()
            .await
            .map_err(|e| BookSumError::llm(format!("Failed to parse response: {}", e)))?;

        debug!("Received {} choice(s) from provider", body.choices.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatMessage;

    #[test]
    fn test_completions_url_strips_trailing_slash() {
        let client =
            OpenAiClient::new("sk-test", "https://api.openai.com/v1/", Duration::from_secs(5))
                .unwrap();
        assert_eq!(
            client.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_from_config_requires_api_key() {
        let config = AppConfig::default();
        assert!(matches!(
            OpenAiClient::from_config(&config),
            Err(BookSumError::Config(_))
        ));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let client =
            OpenAiClient::new("sk-secret", "http://localhost:1", Duration::from_secs(1)).unwrap();
        assert!(!format!("{:?}", client).contains("sk-secret"));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_llm_error() {
        // Port 9 (discard) is not listening on loopback in test environments
        let client =
            OpenAiClient::new("sk-test", "http://127.0.0.1:9/v1", Duration::from_secs(2)).unwrap();
        let request = ChatCompletionRequest {
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![ChatMessage::user("hello")],
        };
        let err = client.complete(request).await.unwrap_err();
        assert!(matches!(err, BookSumError::Llm(_)));
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn test_silent_provider_times_out_as_llm_error() {
        // Accepts the connection but never writes a response
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
        });

        let client = OpenAiClient::new(
            "sk-test",
            format!("http://{}/v1", addr),
            Duration::from_millis(200),
        )
        .unwrap();
        let request = ChatCompletionRequest {
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![ChatMessage::user("hello")],
        };
        let err = client.complete(request).await.unwrap_err();
        server.abort();

        assert!(matches!(err, BookSumError::Llm(ref reason) if reason.contains("timed out")));
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.client_message(), "Error generating summary");
    }
}
