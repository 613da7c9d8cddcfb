//! Telegram configuration from TOML (`[telegram]` section)

use serde::{Deserialize, Serialize};

pub const DEFAULT_TELEGRAM_API: &str = "https://api.telegram.org";

/// Raw Telegram configuration from TOML
///
/// Credentials usually come from `TELEGRAM_BOT_TOKEN` and
/// `TELEGRAM_CHAT_ID` rather than the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTelegramConfig {
    pub enabled: bool,
    pub api_base: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
    pub timeout_secs: u64,
}

impl Default for FileTelegramConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_base: DEFAULT_TELEGRAM_API.to_string(),
            bot_token: None,
            chat_id: None,
            timeout_secs: 10,
        }
    }
}

impl FileTelegramConfig {
    /// Token and chat id, when delivery is enabled and both are present.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        if !self.enabled {
            return None;
        }
        match (self.bot_token.as_deref(), self.chat_id.as_deref()) {
            (Some(token), Some(chat)) if !token.is_empty() && !chat.is_empty() => {
                Some((token, chat))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_both() {
        let mut config = FileTelegramConfig {
            bot_token: Some("123:abc".to_string()),
            ..Default::default()
        };
        assert!(config.credentials().is_none());

        config.chat_id = Some("42".to_string());
        assert_eq!(config.credentials(), Some(("123:abc", "42")));

        config.enabled = false;
        assert!(config.credentials().is_none());
    }
}
