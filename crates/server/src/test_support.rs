use async_trait::async_trait;
use booksum_common::{AppConfig, BookSumError, Result};
use booksum_llm::{ChatCompletionRequest, ChatCompletionResponse, ChatRole, CompletionProvider};
use std::sync::{Arc, Mutex};

use crate::state::AppState;

/// Provider double that records every request it receives
pub struct RecordingProvider {
    reply: std::result::Result<String, String>,
    requests: Mutex<Vec<ChatCompletionRequest>>,
}

impl RecordingProvider {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(reason.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn user_prompts(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .flat_map(|r| r.messages.iter())
            .filter(|m| m.role == ChatRole::User)
            .map(|m| m.content.clone())
            .collect()
    }
}

#[async_trait]
impl CompletionProvider for RecordingProvider {
    async fn complete(&self, request: ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Ok(text) => Ok(ChatCompletionResponse::with_text(text.clone())),
            Err(reason) => Err(BookSumError::llm(reason.clone())),
        }
    }
}

pub fn test_state(provider: Arc<RecordingProvider>) -> Arc<AppState> {
    Arc::new(AppState::new(AppConfig::default().llm_model, provider))
}
