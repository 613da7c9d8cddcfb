//! Run Pipeline use case.
//!
//! One pass of acquisition → aggregation → classification for the window
//! ending at a given instant. Never fails: acquisition errors and empty
//! windows both become [`PipelineOutcome::Error`].

use crate::config::PipelineParams;
use crate::ports::telemetry_source::TelemetrySource;
use airwatch_domain::{AggregationError, PipelineOutcome, StationSnapshot};
use airwatch_domain::report::NO_DATA_MESSAGE;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct RunPipelineUseCase {
    source: Arc<dyn TelemetrySource>,
    params: PipelineParams,
}

impl RunPipelineUseCase {
    pub fn new(source: Arc<dyn TelemetrySource>, params: PipelineParams) -> Self {
        Self { source, params }
    }

    pub fn params(&self) -> &PipelineParams {
        &self.params
    }

    pub async fn execute(&self, now: DateTime<Utc>) -> PipelineOutcome {
        let since = self.params.window_start(now);
        debug!("Fetching station window since {}", since);

        let readings = match self.source.fetch_window(since).await {
            Ok(readings) => readings,
            Err(e) => {
                warn!("Station acquisition failed: {}", e);
                return PipelineOutcome::error(format!("{NO_DATA_MESSAGE}: {e}"), now);
            }
        };

        match StationSnapshot::build(now, &readings, &self.params.health) {
            Ok(snapshot) => {
                info!(
                    "Aggregated {} readings into {} environmental and {} device summaries",
                    snapshot.samples_fetched,
                    snapshot.environmental.len(),
                    snapshot.device.len()
                );
                PipelineOutcome::Ok(snapshot)
            }
            Err(AggregationError::EmptyWindow) => {
                warn!("No readings in window since {}", since);
                PipelineOutcome::no_data(now)
            }
        }
    }
}
