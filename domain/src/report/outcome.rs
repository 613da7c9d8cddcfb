use super::snapshot::StationSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message of the error outcome when the window holds no readings.
pub const NO_DATA_MESSAGE: &str = "No data fetched";

/// Result of one pipeline pass, tagged by `status`.
///
/// Acquisition failures and empty windows both become `Error`; consumers
/// see data either way and never an exception.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PipelineOutcome {
    Ok(StationSnapshot),
    Error {
        message: String,
        timestamp: DateTime<Utc>,
    },
}

impl PipelineOutcome {
    pub fn no_data(timestamp: DateTime<Utc>) -> Self {
        PipelineOutcome::Error {
            message: NO_DATA_MESSAGE.to_string(),
            timestamp,
        }
    }

    pub fn error(message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        PipelineOutcome::Error {
            message: message.into(),
            timestamp,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, PipelineOutcome::Ok(_))
    }

    pub fn snapshot(&self) -> Option<&StationSnapshot> {
        match self {
            PipelineOutcome::Ok(snapshot) => Some(snapshot),
            PipelineOutcome::Error { .. } => None,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            PipelineOutcome::Ok(snapshot) => snapshot.timestamp,
            PipelineOutcome::Error { timestamp, .. } => *timestamp,
        }
    }
}
