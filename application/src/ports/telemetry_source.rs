//! Telemetry source port
//!
//! The acquisition adapter behind the aggregation pipeline.

use airwatch_domain::Reading;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Network or decode failure while fetching readings.
#[derive(Error, Debug)]
pub enum AcquisitionError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Station returned status {0}")]
    Status(u16),

    #[error("Could not decode station payload: {0}")]
    Decode(String),
}

#[async_trait]
pub trait TelemetrySource: Send + Sync {
    /// Readings whose labeled timestamp is at or after `since`, in the
    /// order the station returned them.
    async fn fetch_window(&self, since: DateTime<Utc>) -> Result<Vec<Reading>, AcquisitionError>;
}
