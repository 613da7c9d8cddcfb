//! Reasoning service adapter (OpenAI-compatible chat completions)

mod gateway;
pub mod types;

pub use gateway::{OpenAiCompatibleGateway, ReasoningEndpoint};
