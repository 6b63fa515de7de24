//! Publish Event Port
//!
//! Observable interface for publish operations.
//! Drives progress output, NDJSON event streams, and diagnostic logging.

use std::path::PathBuf;

/// Event emitted while a tree is being published
#[derive(Debug, Clone, PartialEq)]
pub enum PublishEvent {
    /// Publish of one source tree started
    Started {
        source: PathBuf,
        destination: PathBuf,
        policy: String,
    },

    /// Plan computed, nothing written yet
    Planned { files: usize, directories: usize },

    /// A destination directory was created
    DirectoryCreated { path: PathBuf },

    /// File was copied
    FileCopied { index: usize, path: PathBuf },

    /// File was left alone
    FileSkipped {
        index: usize,
        path: PathBuf,
        reason: String,
    },

    /// File could not be published
    FileError {
        index: usize,
        path: PathBuf,
        error: String,
    },

    /// Publish finished (successfully or not)
    Completed {
        copied_count: usize,
        skipped_count: usize,
        error_count: usize,
    },
}

/// Trait for receiving publish events
///
/// Implementations:
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `TracingEventSink`: forwards to `tracing`
/// - `NoopEventSink`: silent operation
pub trait PublishEventSink: Send + Sync {
    /// Handle a publish event
    fn on_event(&self, event: PublishEvent);

    /// Whether this sink wants per-file events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PublishEventSink for NoopEventSink {
    fn on_event(&self, _event: PublishEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
