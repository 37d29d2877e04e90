//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait and an OpenAI implementation. This is the seam to
//! the external LLM provider: the dispatch pipeline only sees "messages in, text out".
//! Tests substitute scripted implementations; production uses [`OpenAILlmClient`].

use anyhow::Result;
use async_trait::async_trait;

mod config;
mod openai_llm;

pub use config::EnvLlmConfig;
pub use openai_llm::OpenAILlmClient;

/// Role of a chat message sent to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// One chat message (role + content) in provider-neutral form.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// LLM completion interface: a blocking round trip from the pipeline's perspective.
/// Used for action resolution and for result formatting.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model reply text for the given messages.
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String>;

    /// Completion with an explicit output token cap for this call. The default
    /// ignores the cap and delegates to [`complete`](Self::complete); provider
    /// implementations override it.
    async fn complete_with_max_tokens(
        &self,
        messages: Vec<ChatMessage>,
        max_tokens: u32,
    ) -> Result<String> {
        let _ = max_tokens;
        self.complete(messages).await
    }
}
