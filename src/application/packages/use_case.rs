//! Package Publisher
//!
//! Resolves a package's sub-tree and hands it to the shared engine. Asset and
//! config publishing are both this use case with a different `PublishTarget`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::publish::{PublishResult, TreePublisher};
use crate::domain::ports::FileSystem;
use crate::domain::services::PackageEnumerator;
use crate::domain::value_objects::{ConflictPolicy, PackageName, PackagePath};
use crate::error::{PublisherError, PublisherResult};

use super::target::PublishTarget;

/// Publishes package sub-trees from a vendor root into one destination
pub struct PackagePublisher<FS>
where
    FS: FileSystem,
{
    engine: Arc<TreePublisher<FS>>,
    vendor_root: PathBuf,
    target: PublishTarget,
}

impl<FS> PackagePublisher<FS>
where
    FS: FileSystem,
{
    pub fn new(
        engine: Arc<TreePublisher<FS>>,
        vendor_root: impl Into<PathBuf>,
        target: PublishTarget,
    ) -> Self {
        Self {
            engine,
            vendor_root: vendor_root.into(),
            target,
        }
    }

    pub fn with_namespaced(mut self, namespaced: bool) -> Self {
        self.target = self.target.with_namespaced(namespaced);
        self
    }

    pub fn with_policy(mut self, policy: ConflictPolicy) -> Self {
        self.target = self.target.with_policy(policy);
        self
    }

    pub fn target(&self) -> &PublishTarget {
        &self.target
    }

    pub fn vendor_root(&self) -> &Path {
        &self.vendor_root
    }

    /// Installed packages, ordered by name
    pub fn packages(&self) -> Vec<PackagePath> {
        PackageEnumerator::new(self.engine.file_system())
            .list(&self.vendor_root)
            .collect()
    }

    pub fn destination_for(&self, name: &PackageName) -> PathBuf {
        self.target.destination_for(name)
    }

    /// First existing sub-tree of `package` this target publishes
    pub fn source_for(&self, package: &PackagePath) -> Option<PathBuf> {
        let fs = self.engine.file_system();
        self.target
            .subtrees()
            .map(|relative| package.subtree(relative))
            .find(|path| fs.is_dir(path))
    }

    /// Publish one package by name.
    ///
    /// A package without the sub-tree is an empty success. Any recorded
    /// error, including a partial copy, is returned as the error.
    pub fn publish_package(&self, name: &str) -> PublisherResult<PublishResult> {
        self.run_package(name)?.into_result()
    }

    /// Publish one package by name, keeping partial progress.
    ///
    /// Only a bad or unknown name is an `Err`; copy failures stay in the
    /// result next to the counts of what was already written.
    pub fn run_package(&self, name: &str) -> PublisherResult<PublishResult> {
        let package = self.resolve(name)?;
        Ok(self.publish_resolved(&package))
    }

    /// Publish an explicit source directory as if it were `name`'s sub-tree
    pub fn publish_from(&self, name: &str, source: &Path) -> PublisherResult<PublishResult> {
        self.run_from(name, source)?.into_result()
    }

    /// [`publish_from`](Self::publish_from) that keeps partial progress
    pub fn run_from(&self, name: &str, source: &Path) -> PublisherResult<PublishResult> {
        let name = PackageName::parse(name).map_err(|e| PublisherError::invalid_package(name, e))?;
        if !self.engine.file_system().is_dir(source) {
            return Err(PublisherError::SourceNotFound {
                path: source.to_path_buf(),
            });
        }
        Ok(self.publish_tree(&name, source))
    }

    /// Publish every installed package that has the sub-tree.
    ///
    /// A failing package does not stop the others; inspect each result.
    pub fn publish_all(&self) -> BTreeMap<PackageName, PublishResult> {
        let enumerator = PackageEnumerator::new(self.engine.file_system());
        let mut results = BTreeMap::new();
        for package in enumerator.list(&self.vendor_root) {
            let Some(source) = self.source_for(&package) else {
                tracing::trace!(package = %package.name, "nothing to publish");
                continue;
            };
            let result = self.publish_tree(&package.name, &source);
            results.insert(package.name, result);
        }
        results
    }

    fn resolve(&self, name: &str) -> PublisherResult<PackagePath> {
        let parsed =
            PackageName::parse(name).map_err(|e| PublisherError::invalid_package(name, e))?;
        PackageEnumerator::new(self.engine.file_system())
            .find(&self.vendor_root, &parsed)
            .ok_or_else(|| PublisherError::InvalidPackageName {
                name: parsed.to_string(),
                reason: format!("not installed in {}", self.vendor_root.display()),
            })
    }

    fn publish_resolved(&self, package: &PackagePath) -> PublishResult {
        match self.source_for(package) {
            Some(source) => self.publish_tree(&package.name, &source),
            None => {
                tracing::debug!(package = %package.name, "package has nothing to publish");
                let mut result = PublishResult::empty();
                result.dry_run = self.engine.options().dry_run;
                result
            }
        }
    }

    fn publish_tree(&self, name: &PackageName, source: &Path) -> PublishResult {
        let destination = self.destination_for(name);
        if let Err(error) = self.prepare_destination(&destination) {
            return PublishResult::failed(error);
        }

        let result = self
            .engine
            .publish(source, &destination, self.target.policy());
        if let Some(error) = result.first_error() {
            tracing::warn!(package = %name, error = %error, "publish failed");
        } else {
            tracing::debug!(
                package = %name,
                copied = result.copied,
                skipped = result.skipped,
                "published"
            );
        }
        result
    }

    /// Create `<root>/packages/<vendor>` so the engine finds the parent it expects.
    ///
    /// The root itself must already exist.
    fn prepare_destination(&self, destination: &Path) -> PublisherResult<()> {
        let root = self.target.destination_root();
        if !self.target.is_namespaced() || self.engine.options().dry_run {
            return Ok(());
        }
        let fs = self.engine.file_system();
        if !fs.is_dir(root) {
            return Err(PublisherError::DestinationUnwritable {
                path: root.to_path_buf(),
                reason: "directory does not exist".to_string(),
            });
        }
        match destination.parent() {
            Some(parent) if !fs.is_dir(parent) => {
                fs.create_dir_all(parent)
                    .map_err(|e| PublisherError::DestinationUnwritable {
                        path: parent.to_path_buf(),
                        reason: e.to_string(),
                    })
            }
            _ => Ok(()),
        }
    }
}
