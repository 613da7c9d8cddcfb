//! HTTP acquisition adapter for the station timeseries API.
//!
//! The endpoint returns the `limit` most recent readings in long format:
//!
//! ```json
//! [{"time": "2026-03-02T07:55:00Z", "device_id": "sima-se", "sensor_id": "pm25", "value": 18.2}]
//! ```
//!
//! The station labels local time as UTC, so the labeled timestamps lag
//! true UTC by the configured clock skew. The caller already folds the
//! skew into `since`; this adapter only compares labels.

use airwatch_application::ports::telemetry_source::{AcquisitionError, TelemetrySource};
use airwatch_domain::Reading;
use airwatch_domain::telemetry::retain_since;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::{debug, warn};

/// Station API client.
pub struct HttpTelemetrySource {
    client: reqwest::Client,
    base_url: String,
    limit: u32,
}

impl HttpTelemetrySource {
    pub fn new(
        base_url: impl Into<String>,
        limit: u32,
        timeout: Duration,
    ) -> Result<Self, AcquisitionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("airwatch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AcquisitionError::Http(e.to_string()))?;
        Ok(Self::with_client(client, base_url, limit))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>, limit: u32) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            limit,
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

/// Decode a station payload.
pub fn decode_readings(body: &str) -> Result<Vec<Reading>, AcquisitionError> {
    serde_json::from_str(body).map_err(|e| AcquisitionError::Decode(e.to_string()))
}

#[async_trait]
impl TelemetrySource for HttpTelemetrySource {
    async fn fetch_window(&self, since: DateTime<Utc>) -> Result<Vec<Reading>, AcquisitionError> {
        debug!("Fetching {} readings from {}", self.limit, self.base_url);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("limit", self.limit)])
            .send()
            .await
            .map_err(|e| {
                warn!("Station request failed: {}", e);
                AcquisitionError::Http(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Station returned {}", status);
            return Err(AcquisitionError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AcquisitionError::Http(e.to_string()))?;
        let readings = decode_readings(&body)?;
        let fetched = readings.len();
        let window = retain_since(readings, since);

        debug!(
            "Station returned {} readings, {} inside the window since {}",
            fetched,
            window.len(),
            since
        );
        Ok(window)
    }
}
