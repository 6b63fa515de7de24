//! Error types for vendorpub
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;
use crate::domain::value_objects::{PackageNameError, PathError};

/// Result type alias for publisher operations
pub type PublisherResult<T> = Result<T, PublisherError>;

/// Main error type for publisher operations
#[derive(Error, Debug)]
pub enum PublisherError {
    /// Source tree (package or sub-tree) does not exist
    #[error("source not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// A destination directory or file could not be created
    #[error("destination not writable: {path}: {reason}")]
    DestinationUnwritable { path: PathBuf, reason: String },

    /// Copying a single file failed
    #[error("failed to copy {relative}: {reason}")]
    CopyFailed { relative: PathBuf, reason: String },

    /// An explicitly requested package is not installed or has a bad name
    #[error("invalid package name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },

    /// A source entry would resolve outside its root
    #[error("path '{path}' escapes publish root '{root}'")]
    PathEscape { path: PathBuf, root: PathBuf },

    /// Directory listing failed while building a plan
    #[error("failed to read directory {path}: {source}")]
    ListFailed {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Source tree nests deeper than the traversal limit (usually a symlink loop)
    #[error("source tree too deep at {path}")]
    TraversalTooDeep { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// The per-project publish lock could not be taken
    #[error("failed to lock {path}: {source}")]
    LockFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PublisherError {
    /// Relative path of the file the error is about, when there is one
    pub fn relative_path(&self) -> Option<&std::path::Path> {
        match self {
            PublisherError::CopyFailed { relative, .. } => Some(relative),
            PublisherError::PathEscape { path, .. } => Some(path),
            _ => None,
        }
    }

    pub(crate) fn invalid_package(name: &str, err: PackageNameError) -> Self {
        PublisherError::InvalidPackageName {
            name: name.to_string(),
            reason: err.to_string(),
        }
    }

    pub(crate) fn from_path_error(err: PathError, path: PathBuf, root: PathBuf) -> Self {
        match err {
            PathError::EscapesBoundary { path, root } => PublisherError::PathEscape { path, root },
            _ => PublisherError::PathEscape { path, root },
        }
    }
}
