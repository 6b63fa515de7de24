//! Asset Publisher
//!
//! Copies a package's `public` directory into the application's public
//! directory. Assets belong to the package, so existing files are replaced.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::publish::{PublishResult, TreePublisher};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{PackageName, PackagePath};
use crate::error::PublisherResult;

use super::target::PublishTarget;
use super::use_case::PackagePublisher;

pub struct AssetPublisher<FS>
where
    FS: FileSystem,
{
    inner: PackagePublisher<FS>,
}

impl<FS> AssetPublisher<FS>
where
    FS: FileSystem,
{
    pub fn new(
        engine: Arc<TreePublisher<FS>>,
        vendor_root: impl Into<PathBuf>,
        public_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            inner: PackagePublisher::new(engine, vendor_root, PublishTarget::assets(public_root)),
        }
    }

    /// Publish into `<public>/packages/<package>` (the default) or straight into `<public>`
    pub fn with_namespaced(self, namespaced: bool) -> Self {
        Self {
            inner: self.inner.with_namespaced(namespaced),
        }
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
