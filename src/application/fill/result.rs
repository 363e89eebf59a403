//! Fill result types

use std::path::PathBuf;

use crate::application::mirror::MirrorOutcome;
use crate::domain::services::{CompletenessReport, Gap};

/// A placeholder model created by copying a substitute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedModel {
    pub gap: Gap,
    /// On-disk name of the copied source
    pub source_file: String,
    pub target_file: String,
}

/// Result of a fill run
#[derive(Debug, Clone, Default)]
pub struct FillResult {
    /// Number of model files found before filling
    pub existing: usize,
    /// Missing stage models found by the scan
    pub missing: Vec<Gap>,
    /// Copies made (or planned, in a dry run)
    pub created: Vec<CreatedModel>,
    /// Gaps with no usable source
    pub unresolved: Vec<Gap>,
    /// Mirror pass, when syncing
    pub mirror: Option<MirrorOutcome>,
    /// Completeness after the run
    pub report: Option<CompletenessReport>,
    /// Where the report was written
    pub report_path: Option<PathBuf>,
    pub dry_run: bool,
}

impl FillResult {
    /// Stage models still missing after the run
    pub fn missing_after(&self) -> usize {
        match &self.report {
            Some(report) => report.missing_models,
            None => self.missing.len().saturating_sub(self.created.len()),
        }
    }

    pub fn mirrored_count(&self) -> usize {
        self.mirror.as_ref().map_or(0, |m| m.mirrored.len())
    }

    pub fn already_synced_count(&self) -> usize {
        self.mirror.as_ref().map_or(0, |m| m.already_synced.len())
    }
}
