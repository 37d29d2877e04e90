//! # actbot-telegram
//!
//! Telegram layer: minimal config and a long-poll runner that translates each incoming
//! text message into a pipeline turn and relays the reply back to the chat. Handles
//! only Telegram connectivity; all conversation logic lives in llm-adapter.

mod config;
mod runner;

pub use config::TelegramConfig;
pub use runner::run_bot;
