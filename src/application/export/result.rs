//! Export result types

use std::path::PathBuf;

use crate::domain::value_objects::ModelFormat;

/// One file written by the host
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedModel {
    pub output_name: String,
    pub format: ModelFormat,
    pub path: PathBuf,
    /// Scene objects included
    pub objects: Vec<String>,
}

/// A job that produced no file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedJob {
    pub output_name: String,
    /// Human description of the selection that matched nothing
    pub selection: String,
}

/// Result of an export run
#[derive(Debug, Clone, Default)]
pub struct ExportResult {
    pub scene: PathBuf,
    /// Number of objects the host reported
    pub scene_objects: usize,
    pub exported: Vec<ExportedModel>,
    pub skipped: Vec<SkippedJob>,
    pub previews: Vec<PathBuf>,
    /// Soft failures (preview renders)
    pub warnings: Vec<String>,
}

impl ExportResult {
    pub fn new(scene: PathBuf) -> Self {
        Self {
            scene,
            ..Default::default()
        }
    }
}
