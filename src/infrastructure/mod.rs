//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations
//! - `events/` - Publish event sinks (NDJSON, tracing)
//! - `lock` - Per-project advisory publish lock

pub mod events;
pub mod fs;
pub mod lock;

pub use events::{JsonEventSink, TracingEventSink};
pub use fs::LocalFs;
pub use lock::PublishLock;
