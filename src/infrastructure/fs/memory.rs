//! In-memory file system for use-case tests
//!
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared between
//! the use case under test and the assertions.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use sha2::{Digest, Sha256};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
    copies: usize,
    /// Copies onto these targets fail with PermissionDenied
    read_only: BTreeSet<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    state: Arc<Mutex<State>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let mut state = self.state.lock().unwrap();
        let path = path.into();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                state.dirs.insert(ancestor.to_path_buf());
            }
        }
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl AsRef<[u8]>) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        let mut state = self.state.lock().unwrap();
        state.files.insert(path, content.as_ref().to_vec());
    }

    pub fn make_read_only(&self, path: impl Into<PathBuf>) {
        self.state.lock().unwrap().read_only.insert(path.into());
    }

    pub fn read(&self, path: &Path) -> Option<Vec<u8>> {
        self.state.lock().unwrap().files.get(path).cloned()
    }

    /// Number of successful `copy` calls so far
    pub fn copy_count(&self) -> usize {
        self.state.lock().unwrap().copies
    }
}

impl FileSystem for MemoryFs {
    fn is_dir(&self, path: &Path) -> bool {
        self.state.lock().unwrap().dirs.contains(path)
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn list_file_names(&self, dir: &Path) -> FsResult<Vec<String>> {
        let state = self.state.lock().unwrap();
        if !state.dirs.contains(dir) {
            return Err(FsError::NotFound(dir.to_path_buf()));
        }
        Ok(state
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .filter_map(|p| p.file_name()?.to_str().map(str::to_string))
            .collect())
    }

    fn file_size(&self, path: &Path) -> FsResult<u64> {
        let state = self.state.lock().unwrap();
        state
            .files
            .get(path)
            .map(|c| c.len() as u64)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn copy(&self, from: &Path, to: &Path) -> FsResult<u64> {
        let mut state = self.state.lock().unwrap();
        let content = state
            .files
            .get(from)
            .cloned()
            .ok_or_else(|| FsError::NotFound(from.to_path_buf()))?;
        if state.read_only.contains(to) {
            return Err(FsError::PermissionDenied(to.to_path_buf()));
        }
        match to.parent() {
            Some(parent) if state.dirs.contains(parent) => {}
            _ => return Err(FsError::NotFound(to.to_path_buf())),
        }
        let len = content.len() as u64;
        state.files.insert(to.to_path_buf(), content);
        state.copies += 1;
        Ok(len)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.add_dir(path);
        Ok(())
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        self.add_file(path, content);
        Ok(())
    }

    fn hash(&self, path: &Path) -> FsResult<String> {
        let state = self.state.lock().unwrap();
        let content = state
            .files
            .get(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))?;
        Ok(format!("sha256:{:x}", Sha256::digest(content)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_direct_children_only() {
        let fs = MemoryFs::new();
        fs.add_file("/trees/oak.glb", b"a");
        fs.add_file("/trees/nested/pine.glb", b"b");

        let names = fs.list_file_names(Path::new("/trees")).unwrap();

        assert_eq!(names, vec!["oak.glb".to_string()]);
    }

    #[test]
    fn copy_requires_target_dir() {
        let fs = MemoryFs::new();
        fs.add_file("/trees/oak.glb", b"a");

        assert!(fs.copy(Path::new("/trees/oak.glb"), Path::new("/client/oak.glb")).is_err());
        fs.add_dir("/client");
        assert!(fs.copy(Path::new("/trees/oak.glb"), Path::new("/client/oak.glb")).is_ok());
        assert_eq!(fs.copy_count(), 1);
    }
}
