//! Telegram Bot API notifier

use crate::config::FileTelegramConfig;
use airwatch_application::ports::notifier::{Notifier, NotifyError};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Telegram rejects messages longer than this many characters.
pub const TELEGRAM_MAX_CHARS: usize = 4096;

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
}

/// Sends the report to one chat via `sendMessage` with Markdown formatting.
pub struct TelegramNotifier {
    client: reqwest::Client,
    api_base: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(
        api_base: impl Into<String>,
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;
        Ok(Self {
            client,
            api_base: api_base.into(),
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        })
    }

    /// Build from configuration; `NotConfigured` when credentials are missing
    /// or delivery is disabled.
    pub fn from_config(config: &FileTelegramConfig) -> Result<Self, NotifyError> {
        let (token, chat) = config.credentials().ok_or_else(|| {
            NotifyError::NotConfigured(
                "TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID are required".to_string(),
            )
        })?;
        Self::new(
            config.api_base.clone(),
            token,
            chat,
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn send_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_base.trim_end_matches('/'),
            self.bot_token
        )
    }
}

/// Cut `text` to Telegram's limit on a character boundary.
fn clamp_message(text: &str) -> &str {
    match text.char_indices().nth(TELEGRAM_MAX_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn channel(&self) -> &str {
        "telegram"
    }

    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        let payload = SendMessage {
            chat_id: &self.chat_id,
            text: clamp_message(text),
            parse_mode: "Markdown",
        };

        // The URL embeds the bot token; keep it out of error messages.
        let response = self
            .client
            .post(self.send_url())
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotifyError::Delivery(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Telegram message delivered to chat {}", self.chat_id);
        Ok(())
    }
}
