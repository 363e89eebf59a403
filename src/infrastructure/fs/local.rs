//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Read;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_file_names(&self, dir: &Path) -> FsResult<Vec<String>> {
        let entries = std::fs::read_dir(dir).map_err(|e| FsError::at(dir, e))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FsError::at(dir, e))?;
            let is_file = entry
                .file_type()
                .map_err(|e| FsError::at(&entry.path(), e))?
                .is_file();
            if !is_file {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn file_size(&self, path: &Path) -> FsResult<u64> {
        std::fs::metadata(path)
            .map(|m| m.len())
            .map_err(|e| FsError::at(path, e))
    }

    fn copy(&self, from: &Path, to: &Path) -> FsResult<u64> {
        std::fs::copy(from, to).map_err(|e| {
            if from.exists() {
                FsError::at(to, e)
            } else {
                FsError::at(from, e)
            }
        })
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::at(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| FsError::at(path, e))
    }

    fn hash(&self, path: &Path) -> FsResult<String> {
        let mut file = std::fs::File::open(path).map_err(|e| FsError::at(path, e))?;
        let mut hasher = Sha256::new();
        let mut buf = [0u8; 64 * 1024];
        loop {
            let n = file.read(&mut buf).map_err(|e| FsError::at(path, e))?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
        }
        Ok(format!("sha256:{:x}", hasher.finalize()))
    }

    fn expand_home(&self, path: &Path) -> PathBuf {
        super::expand_home(path)
    }
}
