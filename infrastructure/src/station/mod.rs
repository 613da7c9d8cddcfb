//! Station acquisition adapter

mod client;

pub use client::{HttpTelemetrySource, decode_readings};
