//! Tool schema rendering for the reasoning service
//!
//! The tool registry itself is the closed `ToolKind` enum in the domain and
//! the handlers live in the application's `StationToolExecutor`; this module
//! only serializes the registry into the wire format.

mod schema;

pub use schema::JsonSchemaToolConverter;
