//! booksum LLM integration
//!
//! OpenAI-compatible chat-completion client and book summarization

mod client;
mod llm_trait;
mod prompts;
mod summarize;
mod types;

pub use client::OpenAiClient;
pub use llm_trait::CompletionProvider;
pub use prompts::{book_prompt, SYSTEM_PROMPT};
pub use summarize::BookSummarizer;
pub use types::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatRole, ChoiceMessage,
};
