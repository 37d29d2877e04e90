//! Long-poll runner: each incoming text message becomes one pipeline turn; the reply
//! is sent back to the originating chat. Non-text messages are logged and skipped.

use std::sync::Arc;

use llm_adapter::LlmAdapter;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

/// Runs the Telegram bot with the given pipeline until the process stops.
/// A turn that fails inside the pipeline still produces a reply; only a failure to
/// deliver the reply is logged as an error. One bad message never stops the loop.
#[instrument(skip(bot, adapter))]
pub async fn run_bot(bot: teloxide::Bot, adapter: Arc<LlmAdapter>) -> anyhow::Result<()> {
    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let adapter = adapter.clone();

        async move {
            let sender = msg
                .from
                .as_ref()
                .map(|u| u.id.0 as i64)
                .unwrap_or_default();
            let chat_id = msg.chat.id;

            let Some(text) = msg.text() else {
                info!(sender, chat_id = chat_id.0, "Received non-text message, skipping");
                return Ok(());
            };
            info!(sender, chat_id = chat_id.0, message_content = %text, "Received message");

            let text = text.to_string();
            tokio::spawn(async move {
                let turn = adapter.chat(&text).await;
                info!(
                    sender,
                    chat_id = chat_id.0,
                    action = turn.action.as_deref().unwrap_or("-"),
                    succeeded = turn.succeeded(),
                    "step: turn processed"
                );
                if let Err(e) = bot.send_message(chat_id, turn.reply).await {
                    error!(sender, chat_id = chat_id.0, error = %e, "Failed to send reply");
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
