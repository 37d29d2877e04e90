//! LLM configuration loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

use crate::OpenAILlmClient;

/// Env-based config for an OpenAI-compatible API.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub openai_api_key: String,
    pub openai_base_url: Option<String>,
    pub model: String,
}

impl EnvLlmConfig {
    /// Loads OPENAI_API_KEY (required), OPENAI_BASE_URL and MODEL (optional).
    pub fn from_env() -> Result<Self> {
        let openai_api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
        let openai_base_url = env::var("OPENAI_BASE_URL").ok().filter(|s| !s.is_empty());
        let model = env::var("MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());
        Ok(Self {
            openai_api_key,
            openai_base_url,
            model,
        })
    }

    /// Builds an [`OpenAILlmClient`] from this config.
    pub fn build_client(&self) -> OpenAILlmClient {
        let client = match &self.openai_base_url {
            Some(base_url) => OpenAILlmClient::with_base_url(
                self.openai_api_key.clone(),
                base_url.clone(),
            ),
            None => OpenAILlmClient::new(self.openai_api_key.clone()),
        };
        client.with_model(self.model.clone())
    }
}
