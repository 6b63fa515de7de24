//! Tracing Event Sink
//!
//! Forwards publish events to `tracing`, so `-v` and `RUST_LOG` control how
//! much of a publish shows up in diagnostic output.

use crate::domain::ports::{PublishEvent, PublishEventSink};

/// Event sink that logs through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl PublishEventSink for TracingEventSink {
    fn on_event(&self, event: PublishEvent) {
        match event {
            PublishEvent::Started {
                source,
                destination,
                policy,
            } => tracing::info!(
                source = %source.display(),
                destination = %destination.display(),
                %policy,
                "publish started"
            ),
            PublishEvent::Planned { files, directories } => {
                tracing::debug!(files, directories, "publish planned")
            }
            PublishEvent::DirectoryCreated { path } => {
                tracing::trace!(path = %path.display(), "directory created")
            }
            PublishEvent::FileCopied { index, path } => {
                tracing::debug!(index, path = %path.display(), "copied")
            }
            PublishEvent::FileSkipped {
                index,
                path,
                reason,
            } => tracing::debug!(index, path = %path.display(), %reason, "skipped"),
            PublishEvent::FileError { index, path, error } => {
                tracing::warn!(index, path = %path.display(), %error, "copy failed")
            }
            PublishEvent::Completed {
                copied_count,
                skipped_count,
                error_count,
            } => tracing::info!(
                copied = copied_count,
                skipped = skipped_count,
                errors = error_count,
                "publish completed"
            ),
        }
    }

    fn wants_detailed_events(&self) -> bool {
        tracing::enabled!(tracing::Level::DEBUG)
    }
}
