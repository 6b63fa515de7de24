//! Event Sink Implementations
//!
//! Provides concrete implementations of PublishEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - TracingEventSink: diagnostic logging

mod json;
mod tracing;

pub use self::tracing::TracingEventSink;
pub use json::JsonEventSink;
