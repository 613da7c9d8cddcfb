//! File locations from TOML (`[storage]` and `[logging]` sections)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// JSONL file of relevant events
    pub events_path: PathBuf,
    /// JSONL evaluation log, one record per run
    pub interactions_path: PathBuf,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            events_path: PathBuf::from("data/relevant_events.jsonl"),
            interactions_path: PathBuf::from("logs/eval_log.jsonl"),
        }
    }
}

/// Diagnostic log settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for the daily rolling log file; `None` logs to stderr only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    pub file_prefix: String,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            dir: Some(PathBuf::from("logs")),
            file_prefix: "airwatch.log".to_string(),
        }
    }
}
