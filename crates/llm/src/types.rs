use serde::{Deserialize, Serialize};

/// Speaker of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

/// One chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Chat completion request (`POST /chat/completions`)
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// Model name (e.g., "gpt-3.5-turbo")
    pub model: String,

    /// Conversation, system instruction first
    pub messages: Vec<ChatMessage>,
}

/// Message inside a returned choice; `content` may be null
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// A single candidate completion
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChoiceMessage,
}

/// Chat completion response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Candidate completions
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

impl ChatCompletionResponse {
    /// Build a response holding a single completion
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            choices: vec![ChatChoice {
                message: ChoiceMessage {
                    content: Some(text.into()),
                },
            }],
        }
    }

    /// Text of the first candidate, if it carries any non-blank content
    pub fn first_text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .filter(|text| !text.trim().is_empty())
    }
}
