//! Conversation domain.
//!
//! - [`entities::Message`]: one system, user, assistant or tool message
//! - [`entities::Conversation`]: append-only message log owned by one loop run
//! - [`response::LlmResponse`]: a structured reply from the reasoning service

pub mod entities;
pub mod response;
