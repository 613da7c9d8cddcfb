//! Configuration file loading for airwatch
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `AIRWATCH_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./airwatch.toml` or `./.airwatch.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/airwatch/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_MODEL, DEFAULT_REASONING_URL, DEFAULT_STATION_URL,
    DEFAULT_TELEGRAM_API, FileConfig, FileHealthConfig, FileLoggingConfig, FileReasoningConfig,
    FileStationConfig, FileStorageConfig, FileTelegramConfig, GROQ_API_KEY_VAR,
    TELEGRAM_BOT_TOKEN_VAR, TELEGRAM_CHAT_ID_VAR,
};
pub use loader::ConfigLoader;
