//! Safe Path Value Object
//!
//! A validated relative path that can be joined onto a root without leaving it:
//! - No traversal components (`..`)
//! - Not absolute, no drive prefix
//! - Non-empty, `.` components removed

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Error when path validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path contains traversal components (..)
    ContainsTraversal,
    /// Path escapes the root boundary
    EscapesBoundary { path: PathBuf, root: PathBuf },
    /// Path is absolute when relative is required
    AbsoluteNotAllowed,
    /// Path is empty
    Empty,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::ContainsTraversal => {
                write!(f, "path contains traversal components (..)")
            }
            PathError::EscapesBoundary { path, root } => {
                write!(
                    f,
                    "path '{}' escapes boundary '{}'",
                    path.display(),
                    root.display()
                )
            }
            PathError::AbsoluteNotAllowed => {
                write!(f, "absolute paths are not allowed")
            }
            PathError::Empty => {
                write!(f, "path is empty")
            }
        }
    }
}

impl std::error::Error for PathError {}

/// A validated safe relative path
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SafePath(PathBuf);

impl SafePath {
    /// Create a new SafePath after validation
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(PathError::Empty);
        }

        let mut normalized = PathBuf::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => normalized.push(part),
                Component::CurDir => {}
                Component::ParentDir => return Err(PathError::ContainsTraversal),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(PathError::AbsoluteNotAllowed)
                }
            }
        }

        if normalized.as_os_str().is_empty() {
            return Err(PathError::Empty);
        }

        Ok(Self(normalized))
    }

    /// Validate `path` and join it onto `root`.
    ///
    /// The check is lexical: the result is always `root` followed by normal
    /// components only, so it is a descendant of `root` by construction.
    pub fn resolve_under<P: AsRef<Path>, R: AsRef<Path>>(
        path: P,
        root: R,
    ) -> Result<PathBuf, PathError> {
        let root = root.as_ref();
        let safe = Self::new(path.as_ref()).map_err(|e| match e {
            PathError::ContainsTraversal | PathError::AbsoluteNotAllowed => {
                PathError::EscapesBoundary {
                    path: path.as_ref().to_path_buf(),
                    root: root.to_path_buf(),
                }
            }
            other => other,
        })?;
        Ok(root.join(safe.0))
    }

    /// Get the inner path
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Convert to PathBuf
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }

    /// Join with another path component
    pub fn join<P: AsRef<Path>>(&self, path: P) -> Result<SafePath, PathError> {
        SafePath::new(self.0.join(path))
    }

    /// Path with forward slashes, independent of platform
    pub fn to_slash_string(&self) -> String {
        self.0
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for SafePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_slash_string())
    }
}

impl AsRef<Path> for SafePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}
