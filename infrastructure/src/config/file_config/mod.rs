//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application
//! parameters at wiring time.

mod health;
mod reasoning;
mod station;
mod storage;
mod telegram;

pub use health::FileHealthConfig;
pub use reasoning::{DEFAULT_MODEL, DEFAULT_REASONING_URL, FileReasoningConfig};
pub use station::{DEFAULT_STATION_URL, FileStationConfig};
pub use storage::{FileLoggingConfig, FileStorageConfig};
pub use telegram::{DEFAULT_TELEGRAM_API, FileTelegramConfig};

use airwatch_application::PipelineParams;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variables consulted when a credential is missing from the file.
pub const GROQ_API_KEY_VAR: &str = "GROQ_API_KEY";
pub const TELEGRAM_BOT_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Longest accepted aggregation window (one week).
pub const MAX_WINDOW_MINUTES: i64 = 7 * 24 * 60;
/// Largest accepted clock skew, in either direction.
pub const MAX_CLOCK_SKEW_HOURS: i64 = 48;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("{0} cannot be 0")]
    ZeroTimeout(&'static str),

    #[error("reasoning.max_tool_turns cannot be 0")]
    ZeroRoundBudget,

    #[error("station.limit cannot be 0")]
    ZeroFetchLimit,

    #[error("station.window_minutes must be positive")]
    EmptyWindow,

    #[error("station.window_minutes {0} exceeds one week (10080)")]
    WindowTooLong(i64),

    #[error("station.clock_skew_hours {0} is outside -48..=48")]
    ClockSkewOutOfRange(i64),

    #[error("station.utc_offset_hours {0} is outside -23..=23")]
    InvalidOffset(i32),

    #[error(
        "health.critical_battery_voltage ({critical}) must be below health.low_battery_voltage ({low})"
    )]
    InvertedBatteryThresholds { low: f64, critical: f64 },

    #[error("{0} cannot be empty")]
    EmptyValue(&'static str),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Station API and windowing
    pub station: FileStationConfig,
    /// Reasoning service and loop bounds
    pub reasoning: FileReasoningConfig,
    /// Device health thresholds
    pub health: FileHealthConfig,
    /// Notification channel
    pub telegram: FileTelegramConfig,
    /// Event store and evaluation log locations
    pub storage: FileStorageConfig,
    /// Diagnostic log file
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.station.timeout_secs == 0 {
            issues.push(ConfigValidationError::ZeroTimeout("station.timeout_secs"));
        }
        if self.reasoning.timeout_secs == 0 {
            issues.push(ConfigValidationError::ZeroTimeout("reasoning.timeout_secs"));
        }
        if self.telegram.timeout_secs == 0 {
            issues.push(ConfigValidationError::ZeroTimeout("telegram.timeout_secs"));
        }
        if self.reasoning.max_tool_turns == 0 {
            issues.push(ConfigValidationError::ZeroRoundBudget);
        }
        if self.station.limit == 0 {
            issues.push(ConfigValidationError::ZeroFetchLimit);
        }
        if self.station.window_minutes <= 0 {
            issues.push(ConfigValidationError::EmptyWindow);
        } else if self.station.window_minutes > MAX_WINDOW_MINUTES {
            issues.push(ConfigValidationError::WindowTooLong(
                self.station.window_minutes,
            ));
        }
        if !(-MAX_CLOCK_SKEW_HOURS..=MAX_CLOCK_SKEW_HOURS).contains(&self.station.clock_skew_hours) {
            issues.push(ConfigValidationError::ClockSkewOutOfRange(
                self.station.clock_skew_hours,
            ));
        }
        if self.station.station_offset().is_none() {
            issues.push(ConfigValidationError::InvalidOffset(
                self.station.utc_offset_hours,
            ));
        }
        if self.health.critical_battery_voltage >= self.health.low_battery_voltage {
            issues.push(ConfigValidationError::InvertedBatteryThresholds {
                low: self.health.low_battery_voltage,
                critical: self.health.critical_battery_voltage,
            });
        }
        if self.station.base_url.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyValue("station.base_url"));
        }
        if self.reasoning.base_url.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyValue("reasoning.base_url"));
        }
        if self.reasoning.model.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyValue("reasoning.model"));
        }

        issues
    }

    /// Fill missing credentials from the conventional environment variables.
    ///
    /// Values already set (file or `AIRWATCH_*`) win.
    pub fn apply_credential_fallbacks<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if self.reasoning.api_key.is_none() {
            self.reasoning.api_key = lookup(GROQ_API_KEY_VAR);
        }
        if self.telegram.bot_token.is_none() {
            self.telegram.bot_token = lookup(TELEGRAM_BOT_TOKEN_VAR);
        }
        if self.telegram.chat_id.is_none() {
            self.telegram.chat_id = lookup(TELEGRAM_CHAT_ID_VAR);
        }
    }

    pub fn pipeline_params(&self) -> PipelineParams {
        let mut params = PipelineParams::default()
            .with_window(self.station.window())
            .with_clock_skew(self.station.clock_skew())
            .with_health(self.health.thresholds());
        if let Some(offset) = self.station.station_offset() {
            params = params.with_station_offset(offset);
        }
        params
    }

    /// Copy with secrets masked, for `--show-config`.
    pub fn redacted(&self) -> Self {
        let mask = |v: &Option<String>| v.as_ref().map(|_| "********".to_string());
        let mut copy = self.clone();
        copy.reasoning.api_key = mask(&self.reasoning.api_key);
        copy.telegram.bot_token = mask(&self.telegram.bot_token);
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[station]
limit = 50
clock_skew_hours = 12

[reasoning]
model = "llama-3.1-8b-instant"
max_tool_turns = 4

[health]
max_internal_temp = 55.0

[telegram]
enabled = false

[storage]
events_path = "/var/lib/airwatch/events.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.station.limit, 50);
        assert_eq!(config.station.clock_skew_hours, 12);
        assert_eq!(config.reasoning.model, "llama-3.1-8b-instant");
        assert_eq!(config.reasoning.max_tool_turns, 4);
        assert_eq!(config.health.max_internal_temp, 55.0);
        assert!(!config.telegram.enabled);
        assert_eq!(
            config.storage.events_path.to_string_lossy(),
            "/var/lib/airwatch/events.jsonl"
        );
        // untouched fields keep defaults
        assert_eq!(config.station.window_minutes, 60);
        assert_eq!(config.health.low_battery_voltage, 3.6);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let mut config = FileConfig::default();
        config.reasoning.timeout_secs = 0;
        config.reasoning.max_tool_turns = 0;
        config.station.limit = 0;
        config.health.critical_battery_voltage = 3.7;

        let issues = config.validate();
        assert_eq!(issues.len(), 4);
        assert!(issues.contains(&ConfigValidationError::ZeroTimeout("reasoning.timeout_secs")));
        assert!(issues.contains(&ConfigValidationError::ZeroRoundBudget));
        assert!(issues.contains(&ConfigValidationError::ZeroFetchLimit));
        assert!(matches!(
            issues.last(),
            Some(ConfigValidationError::InvertedBatteryThresholds { .. })
        ));
    }

    #[test]
    fn test_validate_bounds_window_and_skew() {
        let mut config = FileConfig::default();
        config.station.window_minutes = i64::MAX;
        config.station.clock_skew_hours = i64::MIN;

        let issues = config.validate();
        assert_eq!(
            issues,
            vec![
                ConfigValidationError::WindowTooLong(i64::MAX),
                ConfigValidationError::ClockSkewOutOfRange(i64::MIN),
            ]
        );

        config.station.window_minutes = MAX_WINDOW_MINUTES;
        config.station.clock_skew_hours = MAX_CLOCK_SKEW_HOURS;
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_credential_fallbacks_do_not_override() {
        let mut config = FileConfig::default();
        config.telegram.chat_id = Some("from-file".to_string());

        config.apply_credential_fallbacks(|name| match name {
            GROQ_API_KEY_VAR => Some("gsk_test".to_string()),
            TELEGRAM_CHAT_ID_VAR => Some("from-env".to_string()),
            TELEGRAM_BOT_TOKEN_VAR => Some("  ".to_string()),
            _ => None,
        });

        assert_eq!(config.reasoning.api_key.as_deref(), Some("gsk_test"));
        assert_eq!(config.telegram.chat_id.as_deref(), Some("from-file"));
        assert!(config.telegram.bot_token.is_none());
    }

    #[test]
    fn test_pipeline_params_from_station() {
        let mut config = FileConfig::default();
        config.station.window_minutes = 30;
        config.station.utc_offset_hours = 0;

        let params = config.pipeline_params();
        assert_eq!(params.window, Duration::minutes(30));
        assert_eq!(params.clock_skew, Duration::hours(13));
        assert_eq!(params.station_offset.local_minus_utc(), 0);
    }

    #[test]
    fn test_redacted_masks_secrets() {
        let mut config = FileConfig::default();
        config.reasoning.api_key = Some("gsk_secret".to_string());

        let shown = toml::to_string(&config.redacted()).unwrap();
        assert!(!shown.contains("gsk_secret"));
        assert!(shown.contains("********"));
    }
}
