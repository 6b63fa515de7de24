//! Package enumeration
//!
//! Lists installed packages below a vendor root. Both layouts are supported:
//!
//! - flat: `vendor/<package>`
//! - namespaced: `vendor/<vendor>/<package>`
//!
//! A top-level directory is a package when it contains one of
//! [`PACKAGE_MARKERS`]; otherwise it is a vendor namespace and its
//! subdirectories are the packages.

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{is_valid_segment, PackageName, PackagePath};

/// Entries whose presence marks a directory as a package root
pub const PACKAGE_MARKERS: &[&str] = &["public", "config", "src", "composer.json"];

/// Lists packages through the `FileSystem` port
pub struct PackageEnumerator<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
}

impl<'a, FS: FileSystem + ?Sized> PackageEnumerator<'a, FS> {
    pub fn new(fs: &'a FS) -> Self {
        Self { fs }
    }

    /// Lazily list packages under `vendor_root`, ordered by name.
    ///
    /// Calling this again re-reads the directory, so the sequence is
    /// restartable. A missing vendor root yields nothing.
    pub fn list(&self, vendor_root: &Path) -> Packages<'a, FS> {
        Packages {
            fs: self.fs,
            vendor_root: vendor_root.to_path_buf(),
            top: None,
            namespace: None,
        }
    }

    /// Locate one package by name, under the same rules [`list`](Self::list) applies.
    ///
    /// A bare name must be a package root; `vendor/package` must sit below a
    /// namespace, not inside another package.
    pub fn find(&self, vendor_root: &Path, name: &PackageName) -> Option<PackagePath> {
        let package = PackagePath::in_vendor(vendor_root, name.clone());
        if !self.fs.is_dir(&package.path) {
            return None;
        }
        let listed = match name.vendor() {
            Some(vendor) => !is_package_root(self.fs, &vendor_root.join(vendor)),
            None => is_package_root(self.fs, &package.path),
        };
        listed.then_some(package)
    }
}

fn is_package_root<FS: FileSystem + ?Sized>(fs: &FS, dir: &Path) -> bool {
    PACKAGE_MARKERS
        .iter()
        .any(|marker| fs.exists(&dir.join(marker)))
}

/// Lazy, finite sequence of packages returned by [`PackageEnumerator::list`]
pub struct Packages<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
    vendor_root: PathBuf,
    top: Option<std::vec::IntoIter<String>>,
    namespace: Option<(String, std::vec::IntoIter<String>)>,
}

impl<FS: FileSystem + ?Sized> Packages<'_, FS> {
    fn sorted_subdirs(&self, dir: &Path) -> Vec<String> {
        let mut names = match self.fs.list_dir(dir) {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!(path = %dir.display(), error = %e, "cannot list vendor directory");
                return Vec::new();
            }
        };
        names.retain(|name| {
            let path = dir.join(name);
            if !self.fs.is_dir(&path) {
                return false;
            }
            if is_valid_segment(name) {
                return true;
            }
            if !name.starts_with('.') {
                tracing::debug!(
                    path = %path.display(),
                    "skipping directory with unsupported package name"
                );
            }
            false
        });
        names.sort();
        names
    }

    fn package(&self, name: &str) -> Option<PackagePath> {
        PackageName::parse(name)
            .ok()
            .map(|name| PackagePath::in_vendor(&self.vendor_root, name))
    }
}

impl<FS: FileSystem + ?Sized> Iterator for Packages<'_, FS> {
    type Item = PackagePath;

    fn next(&mut self) -> Option<PackagePath> {
        if self.top.is_none() {
            let names = if self.fs.is_dir(&self.vendor_root) {
                self.sorted_subdirs(&self.vendor_root)
            } else {
                Vec::new()
            };
            self.top = Some(names.into_iter());
        }

        loop {
            if self.namespace.is_some() {
                let nested = self.namespace.as_mut().and_then(|(vendor, children)| {
                    children.next().map(|child| format!("{}/{}", vendor, child))
                });
                match nested {
                    Some(name) => {
                        if let Some(package) = self.package(&name) {
                            return Some(package);
                        }
                        continue;
                    }
                    None => self.namespace = None,
                }
            }

            let name = self.top.as_mut()?.next()?;
            let dir = self.vendor_root.join(&name);
            if is_package_root(self.fs, &dir) {
                if let Some(package) = self.package(&name) {
                    return Some(package);
                }
            } else {
                let children = self.sorted_subdirs(&dir);
                self.namespace = Some((name, children.into_iter()));
            }
        }
    }
}
