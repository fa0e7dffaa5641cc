//! Filesystem port used by [`MeshStore`](crate::MeshStore).
//!
//! The disk adapter backs the CLI; the in-memory adapter lets geometry and
//! format code be exercised without touching the real filesystem.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Minimal filesystem trait for whole-file mesh reads and writes.
///
/// # Examples
/// ```
/// use mesh_io::{FileSystem, InMemoryFilesystem};
/// use std::path::Path;
/// let fs = InMemoryFilesystem::default();
/// assert!(fs.read_to_string(Path::new("points")).is_err());
/// ```
pub trait FileSystem {
    /// Reads an entire file into memory.
    fn read_to_string(&self, path: &Path) -> Result<String, FileSystemError>;

    /// Creates or replaces a file with `contents`.
    fn write(&mut self, path: &Path, contents: &str) -> Result<(), FileSystemError>;
}

/// Error raised when filesystem operations fail.
#[derive(Debug, Error)]
pub enum FileSystemError {
    /// The requested path could not be found.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Any other operating system failure.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileSystemError {
    fn from_io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Adapter over the process filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFilesystem;

impl FileSystem for DiskFilesystem {
    fn read_to_string(&self, path: &Path) -> Result<String, FileSystemError> {
        fs::read_to_string(path).map_err(|e| FileSystemError::from_io(path, e))
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<(), FileSystemError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| FileSystemError::from_io(parent, e))?;
        }
        fs::write(path, contents).map_err(|e| FileSystemError::from_io(path, e))
    }
}

/// In-memory filesystem intended for tests.
///
/// # Examples
/// ```
/// use mesh_io::{FileSystem, InMemoryFilesystem};
/// use std::path::Path;
/// let mut fs = InMemoryFilesystem::default();
/// fs.insert("points", "0 0 1\n");
/// assert_eq!(fs.read_to_string(Path::new("points")).unwrap(), "0 0 1\n");
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryFilesystem {
    files: HashMap<PathBuf, String>,
}

impl InMemoryFilesystem {
    /// Inserts or replaces a file entry.
    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }

    /// Returns a file's contents, if present.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }
}

impl FileSystem for InMemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> Result<String, FileSystemError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FileSystemError::NotFound {
                path: path.to_path_buf(),
            })
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<(), FileSystemError> {
        self.insert(path, contents);
        Ok(())
    }
}
