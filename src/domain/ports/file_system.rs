//! FileSystem port - abstraction over the model directories
//!
//! Lets the use cases scan, copy and mirror model files without depending
//! on a concrete implementation (local disk, in-memory for tests).

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
    Io(PathBuf, std::io::Error),
}

impl FsError {
    /// Classify an I/O error that happened on `path`
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(path.to_path_buf(), err),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound(p) | FsError::PermissionDenied(p) | FsError::Io(p, _) => p,
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(path, err) => write!(f, "I/O error on {}: {}", path.display(), err),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io(_, err) => Some(err),
            _ => None,
        }
    }
}

impl From<FsError> for std::io::Error {
    fn from(err: FsError) -> Self {
        match err {
            FsError::Io(_, inner) => inner,
            FsError::NotFound(p) => {
                std::io::Error::new(std::io::ErrorKind::NotFound, p.display().to_string())
            }
            FsError::PermissionDenied(p) => {
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, p.display().to_string())
            }
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MemoryFs` - in-memory, for tests
pub trait FileSystem {
    /// True if `path` is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Names of the regular files directly inside `dir` (not recursive)
    fn list_file_names(&self, dir: &Path) -> FsResult<Vec<String>>;

    /// Size of a file in bytes
    fn file_size(&self, path: &Path) -> FsResult<u64>;

    /// Copy `from` to `to`, overwriting `to`; returns the bytes copied
    fn copy(&self, from: &Path, to: &Path) -> FsResult<u64>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Write text content, replacing the file
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Content hash (`sha256:<hex>`)
    fn hash(&self, path: &Path) -> FsResult<String>;

    /// Expand `~` to the home directory
    fn expand_home(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }
}
