//! Package value objects
//!
//! A package is addressed either as `name` or, in a namespaced vendor
//! layout, as `vendor/name`.

use std::fmt;
use std::path::{Path, PathBuf};

/// Name of an installed package (`widgets` or `acme/widgets`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageName(String);

/// Why a package name was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageNameError {
    Empty,
    TooManySegments,
    InvalidSegment(String),
}

impl fmt::Display for PackageNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageNameError::Empty => write!(f, "package name is empty"),
            PackageNameError::TooManySegments => {
                write!(f, "package name must be 'name' or 'vendor/name'")
            }
            PackageNameError::InvalidSegment(seg) => {
                write!(f, "invalid package name segment '{}'", seg)
            }
        }
    }
}

impl std::error::Error for PackageNameError {}

impl PackageName {
    pub fn parse(raw: &str) -> Result<Self, PackageNameError> {
        let raw = raw.trim().trim_matches('/');
        if raw.is_empty() {
            return Err(PackageNameError::Empty);
        }

        let segments: Vec<&str> = raw.split('/').collect();
        if segments.len() > 2 {
            return Err(PackageNameError::TooManySegments);
        }

        for segment in &segments {
            if !is_valid_segment(segment) {
                return Err(PackageNameError::InvalidSegment((*segment).to_string()));
            }
        }

        Ok(Self(segments.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Relative path of the package below a vendor (or destination) root
    pub fn relative_path(&self) -> PathBuf {
        self.0.split('/').collect()
    }

    /// Vendor namespace, if the name has one
    pub fn vendor(&self) -> Option<&str> {
        self.0.split_once('/').map(|(vendor, _)| vendor)
    }
}

/// Segments are plain directory names: no separators, no leading dot
pub(crate) fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.starts_with('.')
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PackageName {
    type Err = PackageNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// One installed package: its name and root directory
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackagePath {
    pub name: PackageName,
    pub path: PathBuf,
}

impl PackagePath {
    pub fn new(name: PackageName, path: impl Into<PathBuf>) -> Self {
        Self {
            name,
            path: path.into(),
        }
    }

    /// Locate `name` below `vendor_root`
    pub fn in_vendor(vendor_root: &Path, name: PackageName) -> Self {
        let path = vendor_root.join(name.relative_path());
        Self { name, path }
    }

    /// Directory of a publishable sub-tree, e.g. `public` or `config`
    pub fn subtree(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }
}
