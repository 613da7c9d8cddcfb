//! Infrastructure layer for airwatch
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the station HTTP client, the reasoning
//! gateway, event storage, the interaction log, notifiers and
//! configuration file loading.

pub mod config;
pub mod logging;
pub mod notify;
pub mod reasoning;
pub mod station;
pub mod storage;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileHealthConfig, FileLoggingConfig,
    FileReasoningConfig, FileStationConfig, FileStorageConfig, FileTelegramConfig,
};
pub use logging::{JsonlInteractionLogger, read_recent};
pub use notify::{StdoutNotifier, TelegramNotifier};
pub use reasoning::{OpenAiCompatibleGateway, ReasoningEndpoint};
pub use station::HttpTelemetrySource;
pub use storage::{InMemoryEventStore, JsonlEventStore};
pub use tools::JsonSchemaToolConverter;
