//! Tree Publisher
//!
//! Publishes one source tree into one destination root:
//! 1. Check preconditions (source is a directory, destination parent exists)
//! 2. Plan the tree (read-only traversal)
//! 3. Execute the plan entry by entry, applying the conflict policy
//!
//! Already-copied files are never rolled back. A rerun converges: overwritten
//! files are copied again, skipped files stay untouched.

use std::path::Path;
use std::sync::Arc;

use crate::domain::ports::{FileSystem, NoopEventSink, PublishEvent, PublishEventSink};
use crate::domain::services::{PlanEntry, Planner, PublishPlan};
use crate::domain::value_objects::{ConflictPolicy, FileDecision};
use crate::error::{PublisherError, PublisherResult};

use super::options::PublishOptions;
use super::result::PublishResult;

/// The copy/merge engine shared by the asset and config publishers
pub struct TreePublisher<FS>
where
    FS: FileSystem,
{
    file_system: FS,
    event_sink: Arc<dyn PublishEventSink>,
    options: PublishOptions,
}

impl<FS> TreePublisher<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS) -> Self {
        Self {
            file_system,
            event_sink: Arc::new(NoopEventSink),
            options: PublishOptions::default(),
        }
    }

    pub fn with_event_sink(mut self, event_sink: Arc<dyn PublishEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    pub fn with_options(mut self, options: PublishOptions) -> Self {
        self.options = options;
        self
    }

    pub fn file_system(&self) -> &FS {
        &self.file_system
    }

    pub fn options(&self) -> &PublishOptions {
        &self.options
    }

    /// Build the plan for `source_root` without touching the destination
    pub fn plan(&self, source_root: &Path, destination_root: &Path) -> PublisherResult<PublishPlan> {
        Planner::plan(&self.file_system, source_root, destination_root)
    }

    /// Publish `source_root` into `destination_root` under `policy`
    pub fn publish(
        &self,
        source_root: &Path,
        destination_root: &Path,
        policy: ConflictPolicy,
    ) -> PublishResult {
        self.event_sink.on_event(PublishEvent::Started {
            source: source_root.to_path_buf(),
            destination: destination_root.to_path_buf(),
            policy: policy.to_string(),
        });

        let outcome = self
            .check_destination_parent(destination_root)
            .and_then(|()| self.plan(source_root, destination_root));

        match outcome {
            Ok(plan) => self.execute(&plan, policy),
            Err(error) => {
                let mut result = PublishResult::failed(error);
                result.dry_run = self.options.dry_run;
                self.emit_completed(&result);
                result
            }
        }
    }

    /// Execute a previously computed plan
    pub fn execute(&self, plan: &PublishPlan, policy: ConflictPolicy) -> PublishResult {
        let mut result = PublishResult::new();
        result.dry_run = self.options.dry_run;
        let detailed = self.event_sink.wants_detailed_events();

        self.event_sink.on_event(PublishEvent::Planned {
            files: plan.file_count(),
            directories: plan.directory_count(),
        });

        if let Err(error) = self.ensure_directory(plan.destination_root(), &mut result) {
            result.record_error(error);
            self.emit_completed(&result);
            return result;
        }

        let mut file_index = 0;
        for entry in plan.entries() {
            let outcome = if entry.is_dir() {
                self.ensure_directory(&entry.destination, &mut result)
            } else {
                let index = file_index;
                file_index += 1;
                self.publish_file(index, entry, policy, &mut result, detailed)
            };

            if let Err(error) = outcome {
                result.record_error(error);
                if self.options.is_fail_fast() {
                    break;
                }
            }
        }

        self.emit_completed(&result);
        result
    }

    fn publish_file(
        &self,
        index: usize,
        entry: &PlanEntry,
        policy: ConflictPolicy,
        result: &mut PublishResult,
        detailed: bool,
    ) -> PublisherResult<()> {
        let copy_failed = |reason: String| PublisherError::CopyFailed {
            relative: entry.relative.as_path().to_path_buf(),
            reason,
        };

        if self.file_system.is_dir(&entry.destination) {
            let error = copy_failed("destination is a directory".to_string());
            self.emit_file_error(index, entry, &error, detailed);
            return Err(error);
        }

        let exists = self.file_system.file_exists(&entry.destination);
        match policy.decide(exists) {
            FileDecision::Skip => {
                result.record_skip();
                if detailed {
                    self.event_sink.on_event(PublishEvent::FileSkipped {
                        index,
                        path: entry.relative.as_path().to_path_buf(),
                        reason: "destination exists".to_string(),
                    });
                }
                Ok(())
            }
            FileDecision::Copy => {
                if !self.options.dry_run {
                    if let Err(e) = self
                        .file_system
                        .copy_file(&entry.source, &entry.destination)
                    {
                        let error = copy_failed(e.to_string());
                        self.emit_file_error(index, entry, &error, detailed);
                        return Err(error);
                    }
                }
                result.record_copy(entry.destination.clone());
                if detailed {
                    self.event_sink.on_event(PublishEvent::FileCopied {
                        index,
                        path: entry.relative.as_path().to_path_buf(),
                    });
                }
                Ok(())
            }
        }
    }

    /// Create `path` (and parents) unless it is already a directory
    fn ensure_directory(&self, path: &Path, result: &mut PublishResult) -> PublisherResult<()> {
        if self.file_system.is_dir(path) {
            return Ok(());
        }
        if self.file_system.exists(path) {
            return Err(PublisherError::DestinationUnwritable {
                path: path.to_path_buf(),
                reason: "a file is in the way".to_string(),
            });
        }
        if !self.options.dry_run {
            self.file_system
                .create_dir_all(path)
                .map_err(|e| PublisherError::DestinationUnwritable {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
        }
        result.record_dir(path.to_path_buf());
        self.event_sink.on_event(PublishEvent::DirectoryCreated {
            path: path.to_path_buf(),
        });
        Ok(())
    }

    /// The destination root may be missing, its parent may not.
    ///
    /// Dry runs skip this: callers do not create namespaced parents then.
    fn check_destination_parent(&self, destination_root: &Path) -> PublisherResult<()> {
        if self.options.dry_run {
            return Ok(());
        }
        match destination_root.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.file_system.is_dir(parent) => {
                Err(PublisherError::DestinationUnwritable {
                    path: destination_root.to_path_buf(),
                    reason: format!("parent directory {} does not exist", parent.display()),
                })
            }
            _ => Ok(()),
        }
    }

    fn emit_file_error(
        &self,
        index: usize,
        entry: &PlanEntry,
        error: &PublisherError,
        detailed: bool,
    ) {
        if detailed {
            self.event_sink.on_event(PublishEvent::FileError {
                index,
                path: entry.relative.as_path().to_path_buf(),
                error: error.to_string(),
            });
        }
    }

    fn emit_completed(&self, result: &PublishResult) {
        self.event_sink.on_event(PublishEvent::Completed {
            copied_count: result.copied,
            skipped_count: result.skipped,
            error_count: result.error_count(),
        });
    }
}
