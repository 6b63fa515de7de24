//! Publish Lock
//!
//! Advisory lock that serializes publish runs against one application.
//! The lock is held until the guard is dropped. The base directory must exist.

use std::fs::File;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{PublisherError, PublisherResult};

/// Lock file name, relative to the project base
pub const LOCK_FILE: &str = ".vendorpub.lock";

/// Guard for an exclusive publish lock
#[derive(Debug)]
pub struct PublishLock {
    file: File,
    path: PathBuf,
}

impl PublishLock {
    /// Block until the lock for `base` is ours
    pub fn acquire(base: &Path) -> PublisherResult<Self> {
        Self::take(base, |file| file.lock_exclusive())
    }

    /// Take the lock for `base` or fail immediately if someone else holds it
    pub fn try_acquire(base: &Path) -> PublisherResult<Self> {
        Self::take(base, |file| file.try_lock_exclusive())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn take<F>(base: &Path, lock: F) -> PublisherResult<Self>
    where
        F: FnOnce(&File) -> std::io::Result<()>,
    {
        let path = base.join(LOCK_FILE);
        let file = File::create(&path).map_err(|source| PublisherError::LockFailed {
            path: path.clone(),
            source,
        })?;
        lock(&file).map_err(|source| PublisherError::LockFailed {
            path: path.clone(),
            source,
        })?;
        tracing::trace!(path = %path.display(), "publish lock acquired");
        Ok(Self { file, path })
    }
}

impl Drop for PublishLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}
