//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs;
use std::io;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Copies are atomic: content lands in a temp file next to the destination
/// and is renamed into place, so an interrupted publish never leaves a
/// half-written file behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| FsError::from(e).at(path))? {
            let entry = entry.map_err(|e| FsError::from(e).at(path))?;
            let name = entry.file_name().into_string().map_err(|raw| {
                FsError::Other(format!(
                    "non UTF-8 file name in {}: {:?}",
                    path.display(),
                    raw
                ))
            })?;
            names.push(name);
        }
        Ok(names)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::create_dir_all(path).map_err(|e| FsError::from(e).at(path))
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> FsResult<()> {
        let parent = dst
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut input = fs::File::open(src).map_err(|e| FsError::from(e).at(src))?;
        let permissions = input
            .metadata()
            .map_err(|e| FsError::from(e).at(src))?
            .permissions();

        let mut staged = NamedTempFile::new_in(parent).map_err(|e| FsError::from(e).at(dst))?;
        io::copy(&mut input, staged.as_file_mut()).map_err(|e| FsError::from(e).at(dst))?;
        staged
            .as_file()
            .set_permissions(permissions)
            .map_err(|e| FsError::from(e).at(dst))?;

        staged
            .persist(dst)
            .map_err(|e| FsError::from(e.error).at(dst))?;
        Ok(())
    }
}
