//! Publish Target
//!
//! Where a package publisher reads from and writes to.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ConflictPolicy, PackageName};

/// Directory that namespaced destinations live under
pub const PACKAGES_DIR: &str = "packages";

/// Package sub-tree candidates for assets
pub const ASSET_SUBTREES: &[&str] = &["public"];

/// Package sub-tree candidates for configuration, first match wins
pub const CONFIG_SUBTREES: &[&str] = &["config", "src/config"];

/// Source sub-trees, destination root and conflict policy of one publisher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishTarget {
    subtrees: Vec<String>,
    destination_root: PathBuf,
    policy: ConflictPolicy,
    namespaced: bool,
}

impl PublishTarget {
    pub fn new(
        subtrees: &[&str],
        destination_root: impl Into<PathBuf>,
        policy: ConflictPolicy,
    ) -> Self {
        Self {
            subtrees: subtrees.iter().map(|s| s.to_string()).collect(),
            destination_root: destination_root.into(),
            policy,
            namespaced: true,
        }
    }

    /// `public` sub-trees into the public directory, always overwriting
    pub fn assets(public_root: impl Into<PathBuf>) -> Self {
        Self::new(ASSET_SUBTREES, public_root, ConflictPolicy::Overwrite)
    }

    /// `config` sub-trees into the config directory, never overwriting
    pub fn configs(config_root: impl Into<PathBuf>) -> Self {
        Self::new(CONFIG_SUBTREES, config_root, ConflictPolicy::SkipIfExists)
    }

    pub fn with_namespaced(mut self, namespaced: bool) -> Self {
        self.namespaced = namespaced;
        self
    }

    pub fn with_policy(mut self, policy: ConflictPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn subtrees(&self) -> impl Iterator<Item = &str> {
        self.subtrees.iter().map(String::as_str)
    }

    pub fn destination_root(&self) -> &Path {
        &self.destination_root
    }

    pub fn policy(&self) -> ConflictPolicy {
        self.policy
    }

    pub fn is_namespaced(&self) -> bool {
        self.namespaced
    }

    /// Destination directory for `package`
    ///
    /// `<root>/packages/<package>` when namespaced, `<root>` otherwise.
    pub fn destination_for(&self, package: &PackageName) -> PathBuf {
        if self.namespaced {
            self.destination_root
                .join(PACKAGES_DIR)
                .join(package.relative_path())
        } else {
            self.destination_root.clone()
        }
    }

    /// Whether this target can ever replace an existing file
    pub fn overwrites(&self) -> bool {
        self.policy.replaces_existing()
    }
}
