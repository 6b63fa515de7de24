//! Publish Result
//!
//! Outcome of publishing one source tree.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{PublisherError, PublisherResult};

/// Result of a publish operation
///
/// Errors are captured here instead of being returned, so a caller walking
/// many packages can keep going after one fails.
#[derive(Debug, Default)]
pub struct PublishResult {
    /// Number of files copied (or, in a dry run, that would be copied)
    pub copied: usize,
    /// Number of files left alone because the destination already existed
    pub skipped: usize,
    /// Destination files actually written
    pub written: BTreeSet<PathBuf>,
    /// Destination directories created
    pub created_dirs: Vec<PathBuf>,
    /// Whether this result comes from a dry run
    pub dry_run: bool,
    errors: Vec<PublisherError>,
}

impl PublishResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Result for a tree that had nothing to publish
    pub fn empty() -> Self {
        Self::default()
    }

    /// Result that failed before any work was done
    pub fn failed(error: PublisherError) -> Self {
        let mut result = Self::default();
        result.record_error(error);
        result
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// The first error encountered, if any
    pub fn first_error(&self) -> Option<&PublisherError> {
        self.errors.first()
    }

    pub fn errors(&self) -> &[PublisherError] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Relative path of the file behind the first error
    pub fn failed_path(&self) -> Option<&Path> {
        self.first_error().and_then(PublisherError::relative_path)
    }

    pub(crate) fn record_copy(&mut self, destination: PathBuf) {
        self.copied += 1;
        if !self.dry_run {
            self.written.insert(destination);
        }
    }

    pub(crate) fn record_skip(&mut self) {
        self.skipped += 1;
    }

    pub(crate) fn record_dir(&mut self, destination: PathBuf) {
        self.created_dirs.push(destination);
    }

    pub(crate) fn record_error(&mut self, error: PublisherError) {
        self.errors.push(error);
    }

    /// Turn a failed result into its first error
    pub fn into_result(mut self) -> PublisherResult<Self> {
        if self.errors.is_empty() {
            Ok(self)
        } else {
            Err(self.errors.remove(0))
        }
    }
}
