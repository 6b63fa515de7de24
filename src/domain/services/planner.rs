//! Publish planning service
//!
//! Walks a source tree through the `FileSystem` port and maps every entry
//! onto the destination root. Nothing is written here; the plan is complete
//! before the first mutation happens.

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::SafePath;
use crate::error::{PublisherError, PublisherResult};

/// Nesting limit for source trees; deeper trees are almost always symlink loops
pub const MAX_DEPTH: usize = 64;

/// Kind of a planned entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One source entry mapped onto the destination root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    /// Path relative to both roots
    pub relative: SafePath,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub kind: EntryKind,
}

impl PlanEntry {
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Ordered (source, destination) pairs for one source tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishPlan {
    source_root: PathBuf,
    destination_root: PathBuf,
    entries: Vec<PlanEntry>,
}

impl PublishPlan {
    /// Plan with no entries (nothing to publish)
    pub fn empty(source_root: impl Into<PathBuf>, destination_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            destination_root: destination_root.into(),
            entries: Vec::new(),
        }
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn destination_root(&self) -> &Path {
        &self.destination_root
    }

    /// All entries in traversal order (parents before children)
    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(|e| e.is_file())
    }

    pub fn directories(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(|e| e.is_dir())
    }

    pub fn file_count(&self) -> usize {
        self.files().count()
    }

    pub fn directory_count(&self) -> usize {
        self.directories().count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add an entry; `SafePath` keeps it under both roots
    pub fn push(&mut self, relative: SafePath, kind: EntryKind) {
        let source = self.source_root.join(relative.as_path());
        let destination = self.destination_root.join(relative.as_path());
        self.entries.push(PlanEntry {
            relative,
            source,
            destination,
            kind,
        });
    }
}

/// Builds publish plans
pub struct Planner;

impl Planner {
    /// Plan publishing `source_root` into `destination_root`.
    ///
    /// Entries are depth-first with siblings sorted by name, which is the
    /// lexicographic order of their relative paths compared component-wise.
    pub fn plan<FS: FileSystem + ?Sized>(
        fs: &FS,
        source_root: &Path,
        destination_root: &Path,
    ) -> PublisherResult<PublishPlan> {
        if !fs.is_dir(source_root) {
            return Err(PublisherError::SourceNotFound {
                path: source_root.to_path_buf(),
            });
        }

        let mut plan = PublishPlan::empty(source_root, destination_root);
        Self::visit(fs, source_root, None, 0, &mut plan)?;
        Ok(plan)
    }

    fn visit<FS: FileSystem + ?Sized>(
        fs: &FS,
        dir: &Path,
        prefix: Option<&SafePath>,
        depth: usize,
        plan: &mut PublishPlan,
    ) -> PublisherResult<()> {
        if depth > MAX_DEPTH {
            return Err(PublisherError::TraversalTooDeep {
                path: dir.to_path_buf(),
            });
        }

        let mut names = fs
            .list_dir(dir)
            .map_err(|source| PublisherError::ListFailed {
                path: dir.to_path_buf(),
                source: source.at(dir),
            })?;
        names.sort();

        for name in names {
            let relative = match prefix {
                Some(prefix) => prefix.join(&name),
                None => SafePath::new(&name),
            }
            .map_err(|e| {
                let attempted = prefix
                    .map(|p| p.as_path().join(&name))
                    .unwrap_or_else(|| PathBuf::from(&name));
                PublisherError::from_path_error(e, attempted, plan.source_root.clone())
            })?;

            // `join` normalizes away `.`, so a name like "." would point back at
            // the directory itself.
            if relative.as_path().components().count() != depth + 1 {
                return Err(PublisherError::PathEscape {
                    path: relative.into_path_buf(),
                    root: plan.source_root.clone(),
                });
            }

            let source = dir.join(&name);
            if fs.is_dir(&source) {
                plan.push(relative.clone(), EntryKind::Directory);
                Self::visit(fs, &source, Some(&relative), depth + 1, plan)?;
            } else if fs.file_exists(&source) {
                plan.push(relative, EntryKind::File);
            } else {
                tracing::debug!(path = %source.display(), "skipping special or dangling entry");
            }
        }

        Ok(())
    }
}
