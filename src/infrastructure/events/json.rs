//! JSON Event Sink
//!
//! Outputs publish events as NDJSON for CI/automation consumption.

use crate::domain::ports::{PublishEvent, PublishEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    command: &'static str,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl PublishEventSink for JsonEventSink {
    fn on_event(&self, event: PublishEvent) {
        let command = self.command;
        let json = match event {
            PublishEvent::Started {
                source,
                destination,
                policy,
            } => serde_json::json!({
                "event": "start",
                "command": command,
                "source": source.display().to_string(),
                "destination": destination.display().to_string(),
                "policy": policy,
            }),

            PublishEvent::Planned { files, directories } => serde_json::json!({
                "event": "planned",
                "command": command,
                "files": files,
                "directories": directories,
            }),

            PublishEvent::DirectoryCreated { path } => serde_json::json!({
                "event": "directory_created",
                "command": command,
                "path": path.display().to_string(),
            }),

            PublishEvent::FileCopied { index, path } => serde_json::json!({
                "event": "item_copied",
                "command": command,
                "index": index,
                "path": path.display().to_string(),
            }),

            PublishEvent::FileSkipped {
                index,
                path,
                reason,
            } => serde_json::json!({
                "event": "item_skipped",
                "command": command,
                "index": index,
                "path": path.display().to_string(),
                "reason": reason,
            }),

            PublishEvent::FileError { index, path, error } => serde_json::json!({
                "event": "item_error",
                "command": command,
                "index": index,
                "path": path.display().to_string(),
                "error": error,
            }),

            PublishEvent::Completed {
                copied_count,
                skipped_count,
                error_count,
            } => {
                let status = if error_count == 0 {
                    "success"
                } else {
                    "partial"
                };
                serde_json::json!({
                    "event": "complete",
                    "command": command,
                    "status": status,
                    "copied": copied_count,
                    "skipped": skipped_count,
                    "errors": error_count,
                })
            }
        };

        self.write_event(json);
    }
}
