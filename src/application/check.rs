//! Check Use Case
//!
//! Scans one directory and crosses it against the expected catalog.
//! The scanned directory is never written to; the optional JSON snapshot
//! goes wherever the caller points it.

use std::path::{Path, PathBuf};

use crate::domain::entities::{ExistingAssets, ExpectedCatalog};
use crate::domain::ports::FileSystem;
use crate::domain::services::{check_inventory, InventoryReport};
use crate::domain::value_objects::ModelFormat;
use crate::error::{GroveError, GroveResult};

/// Options for the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Where to write the JSON snapshot, if anywhere
    pub snapshot: Option<PathBuf>,
}

impl CheckOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(mut self, path: Option<PathBuf>) -> Self {
        self.snapshot = path;
        self
    }
}

/// Result of the check operation
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub dir: PathBuf,
    pub report: InventoryReport,
    /// Snapshot path, when one was written
    pub snapshot: Option<PathBuf>,
}

/// Check use case - inventory of one model directory
pub struct CheckUseCase<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> CheckUseCase<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    pub fn execute(&self, dir: &Path, options: &CheckOptions) -> GroveResult<CheckResult> {
        if !self.fs.is_dir(dir) {
            return Err(GroveError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }

        let names = self.fs.list_file_names(dir)?;
        let existing = ExistingAssets::from_file_names(&names, ModelFormat::Glb);
        let report = check_inventory(&ExpectedCatalog::new(), &existing);

        if let Some(path) = &options.snapshot {
            let json = serde_json::to_string_pretty(&report)?;
            self.fs.write(path, &json)?;
        }

        Ok(CheckResult {
            dir: dir.to_path_buf(),
            report,
            snapshot: options.snapshot.clone(),
        })
    }
}
