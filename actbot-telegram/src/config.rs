//! Minimal Telegram config: token, optional API URL, optional log path.
//! Loaded from BOT_TOKEN, TELEGRAM_API_URL, LOG_FILE environment variables.

use anyhow::Result;
use std::env;

pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: Option<String>,
}

impl TelegramConfig {
    /// Loads from env: BOT_TOKEN required, TELEGRAM_API_URL and LOG_FILE optional.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(None)
    }

    /// Loads from env; an explicit token takes precedence over BOT_TOKEN.
    pub fn from_env_with(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").ok();
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    /// Builds the bot, pointing it at the configured API server when one is set.
    /// An unparseable TELEGRAM_API_URL is a hard error, not a silent fallback.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match &self.telegram_api_url {
            Some(url) => Ok(bot.set_api_url(url.parse()?)),
            None => Ok(bot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_token_wins() {
        let config = TelegramConfig::from_env_with(Some("test_token".to_string())).unwrap();
        assert_eq!(config.bot_token, "test_token");
    }

    /// **Test: a configured API URL ends up on the constructed bot.**
    #[test]
    fn test_build_bot_applies_api_url() {
        let config = TelegramConfig {
            bot_token: "test_token".to_string(),
            telegram_api_url: Some("https://tg.example.com".to_string()),
            log_file: None,
        };
        let bot = config.build_bot().unwrap();
        assert_eq!(bot.api_url().as_str(), "https://tg.example.com/");
    }

    /// **Test: an unparseable API URL is rejected at construction time.**
    #[test]
    fn test_build_bot_rejects_bad_api_url() {
        let config = TelegramConfig {
            bot_token: "test_token".to_string(),
            telegram_api_url: Some("not a url".to_string()),
            log_file: None,
        };
        assert!(config.build_bot().is_err());
    }
}
