//! OpenAI implementation of [`LlmClient`] via async-openai.

use std::sync::Arc;

use anyhow::Result;
use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use tracing::instrument;

use crate::{ChatMessage, LlmClient, MessageRole};

const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_MAX_TOKENS: u32 = 500;
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// [`LlmClient`] backed by an OpenAI-compatible chat completions API.
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: Arc<Client<async_openai::config::OpenAIConfig>>,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAILlmClient {
    pub fn new(api_key: String) -> Self {
        let config = async_openai::config::OpenAIConfig::new().with_api_key(api_key);
        Self::with_client(Client::with_config(config))
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let config = async_openai::config::OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        Self::with_client(Client::with_config(config))
    }

    pub fn with_client(client: Client<async_openai::config::OpenAIConfig>) -> Self {
        Self {
            client: Arc::new(client),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    async fn request(&self, messages: Vec<ChatMessage>, max_tokens: u32) -> Result<String> {
        let openai_messages = messages
            .iter()
            .map(to_openai_message)
            .collect::<Result<Vec<_>>>()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(openai_messages)
            .max_tokens(max_tokens)
            .temperature(self.temperature)
            .build()?;

        let response = self.client.chat().create(request).await?;

        if let Some(choice) = response.choices.first() {
            Ok(choice.message.content.clone().unwrap_or_default())
        } else {
            anyhow::bail!("No response from OpenAI");
        }
    }
}

/// Converts a provider-neutral [`ChatMessage`] into OpenAI request format.
fn to_openai_message(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage> {
    let content = msg.content.clone();
    let openai_msg: ChatCompletionRequestMessage = match msg.role {
        MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
            .content(content)
            .build()?
            .into(),
    };
    Ok(openai_msg)
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, messages))]
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String> {
        self.request(messages, self.max_tokens).await
    }

    #[instrument(skip(self, messages))]
    async fn complete_with_max_tokens(
        &self,
        messages: Vec<ChatMessage>,
        max_tokens: u32,
    ) -> Result<String> {
        self.request(messages, max_tokens).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = OpenAILlmClient::new("dummy_key".to_string());
        assert_eq!(client.model, DEFAULT_MODEL);
        assert_eq!(client.max_tokens, DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn test_builder_overrides() {
        let client = OpenAILlmClient::with_base_url(
            "dummy_key".to_string(),
            "http://localhost:1234/v1".to_string(),
        )
        .with_model("gpt-4o-mini".to_string())
        .with_max_tokens(150);
        assert_eq!(client.model, "gpt-4o-mini");
        assert_eq!(client.max_tokens, 150);
    }

    #[test]
    fn test_to_openai_message_roles() {
        assert!(to_openai_message(&ChatMessage::system("s")).is_ok());
        assert!(to_openai_message(&ChatMessage::user("u")).is_ok());
        assert!(to_openai_message(&ChatMessage::assistant("a")).is_ok());
    }
}
