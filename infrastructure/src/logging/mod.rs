//! Logging infrastructure: the interaction (evaluation) log.
//!
//! Provides [`JsonlInteractionLogger`], a JSONL file writer that implements
//! the [`InteractionLogger`](airwatch_application::InteractionLogger) port,
//! and [`read_recent`] for inspecting the tail of the log.

mod jsonl_logger;

pub use jsonl_logger::{JsonlInteractionLogger, read_recent};
