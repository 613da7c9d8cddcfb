//! Station reports built from one aggregation window.
//!
//! [`StationSnapshot`] is the full result of a successful pipeline pass.
//! [`PipelineOutcome`] wraps it with the `status` tag consumers switch on,
//! and [`AirQualityReport`] is the trimmed view handed to the reasoning
//! service by the report tool.

pub mod outcome;
pub mod snapshot;

pub use outcome::{NO_DATA_MESSAGE, PipelineOutcome};
pub use snapshot::{AirQualityReport, StationSnapshot};
