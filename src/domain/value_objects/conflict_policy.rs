//! Conflict policy value object - what happens when a destination file exists
//!
//! - `Overwrite`: always replace
//! - `SkipIfExists`: only fill gaps
//! - `MergeDirectory`: descend into existing directories and apply a file-level policy

use serde::{Deserialize, Serialize};

/// Per-file rule used inside `MergeDirectory`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilePolicy {
    Overwrite,
    SkipIfExists,
}

/// Rule governing whether an existing destination file is replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictPolicy {
    /// Always replace the destination file
    Overwrite,
    /// Never replace, only create missing files
    SkipIfExists,
    /// Recurse into existing directories, deciding per file
    MergeDirectory(FilePolicy),
}

/// Decision for a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileDecision {
    Copy,
    Skip,
}

impl ConflictPolicy {
    /// Decide what to do with one file given whether its destination exists
    pub fn decide(&self, destination_exists: bool) -> FileDecision {
        match (self.file_policy(), destination_exists) {
            (_, false) => FileDecision::Copy,
            (FilePolicy::Overwrite, true) => FileDecision::Copy,
            (FilePolicy::SkipIfExists, true) => FileDecision::Skip,
        }
    }

    /// File-level rule this policy boils down to
    pub fn file_policy(&self) -> FilePolicy {
        match self {
            ConflictPolicy::Overwrite => FilePolicy::Overwrite,
            ConflictPolicy::SkipIfExists => FilePolicy::SkipIfExists,
            ConflictPolicy::MergeDirectory(inner) => *inner,
        }
    }

    /// Whether existing destination files can ever be replaced
    pub fn replaces_existing(&self) -> bool {
        self.file_policy() == FilePolicy::Overwrite
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictPolicy::Overwrite => "overwrite",
            ConflictPolicy::SkipIfExists => "skip-if-exists",
            ConflictPolicy::MergeDirectory(FilePolicy::Overwrite) => "merge-directory(overwrite)",
            ConflictPolicy::MergeDirectory(FilePolicy::SkipIfExists) => {
                "merge-directory(skip-if-exists)"
            }
        }
    }
}

impl std::fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
