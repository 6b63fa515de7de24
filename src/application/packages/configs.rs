//! Config Publisher
//!
//! Copies a package's `config` directory (or `src/config`) into the
//! application's config directory. Files already present are user-owned and
//! are never replaced; missing files and directories are still created.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::publish::{PublishResult, TreePublisher};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{ConflictPolicy, FilePolicy, PackageName, PackagePath};
use crate::error::PublisherResult;

use super::target::PublishTarget;
use super::use_case::PackagePublisher;

pub struct ConfigPublisher<FS>
where
    FS: FileSystem,
{
    inner: PackagePublisher<FS>,
}

impl<FS> ConfigPublisher<FS>
where
    FS: FileSystem,
{
    pub fn new(
        engine: Arc<TreePublisher<FS>>,
        vendor_root: impl Into<PathBuf>,
        config_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            inner: PackagePublisher::new(engine, vendor_root, PublishTarget::configs(config_root)),
        }
    }

    pub fn with_namespaced(self, namespaced: bool) -> Self {
        Self {
            inner: self.inner.with_namespaced(namespaced),
        }
    }

    /// Use `MergeDirectory(SkipIfExists)` instead of plain `SkipIfExists`
    pub fn merging(self) -> Self {
        Self {
            inner: self
                .inner
                .with_policy(ConflictPolicy::MergeDirectory(FilePolicy::SkipIfExists)),
        }
    }

    pub fn policy(&self) -> ConflictPolicy {
        self.inner.target().policy()
    }

    /// The shared use case this publisher is configured from
    pub fn publisher(&self) -> &PackagePublisher<FS> {
        &self.inner
    }

    pub fn publish_package(&self, name: &str) -> PublisherResult<PublishResult> {
        self.inner.publish_package(name)
    }

    pub fn publish_all(&self) -> BTreeMap<PackageName, PublishResult> {
        self.inner.publish_all()
    }

    pub fn packages(&self) -> Vec<PackagePath> {
        self.inner.packages()
    }
}
