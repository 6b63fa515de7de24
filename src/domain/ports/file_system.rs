//! FileSystem port - abstraction over the file I/O the publisher needs
//!
//! The publishing engine only ever talks to this trait, so it can run
//! against the local disk, an in-memory mock, or a fault-injecting wrapper.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File or directory not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Attach a path to an error converted from `std::io::Error`.
    ///
    /// `From<io::Error>` has no path to work with, so callers that know it
    /// fill it in here.
    pub fn at(self, path: &Path) -> Self {
        match self {
            FsError::NotFound(p) if p.as_os_str().is_empty() => FsError::NotFound(path.into()),
            FsError::PermissionDenied(p) if p.as_os_str().is_empty() => {
                FsError::PermissionDenied(path.into())
            }
            other => other,
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(PathBuf::new()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(PathBuf::new()),
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - the local disk
/// - mock file systems in tests
pub trait FileSystem {
    /// Check if anything (file or directory) exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Check if `path` is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if `path` is an existing regular file
    fn file_exists(&self, path: &Path) -> bool;

    /// List the entry names of a directory, in no particular order
    fn list_dir(&self, path: &Path) -> FsResult<Vec<String>>;

    /// Create directory and parents; succeeds if it already exists
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Copy `src` to `dst` byte-for-byte, replacing `dst` if present
    fn copy_file(&self, src: &Path, dst: &Path) -> FsResult<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn file_exists(&self, path: &Path) -> bool {
        (**self).file_exists(path)
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<String>> {
        (**self).list_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        (**self).create_dir_all(path)
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> FsResult<()> {
        (**self).copy_file(src, dst)
    }
}
