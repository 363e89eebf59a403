//! Fill Use Case
//!
//! scan -> plan -> copy -> mirror -> report. Sources are chosen from the
//! initial scan only, so a file created earlier in the run never feeds a
//! later gap.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::application::mirror::{mirror_models, MirrorOptions, PendingModel};
use crate::domain::entities::{ExistingAssets, ExpectedCatalog};
use crate::domain::ports::FileSystem;
use crate::domain::services::{
    build_completeness, missing_stage_models, plan_gaps, GapPlan, REPORT_FILE_NAME,
};
use crate::domain::value_objects::ModelFormat;
use crate::error::{GroveError, GroveResult};

use super::options::FillOptions;
use super::result::{CreatedModel, FillResult};

const FORMAT: ModelFormat = ModelFormat::Glb;

/// Fill use case - substitute missing stage models, mirror, report
pub struct FillUseCase<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> FillUseCase<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    pub fn execute(
        &self,
        export_dir: &Path,
        client_dir: &Path,
        options: &FillOptions,
    ) -> GroveResult<FillResult> {
        self.execute_at(export_dir, client_dir, options, Utc::now())
    }

    /// Same as [`execute`](Self::execute) with a fixed report timestamp
    pub fn execute_at(
        &self,
        export_dir: &Path,
        client_dir: &Path,
        options: &FillOptions,
        now: DateTime<Utc>,
    ) -> GroveResult<FillResult> {
        if !self.fs.is_dir(export_dir) {
            return Err(GroveError::DirectoryNotFound {
                path: export_dir.to_path_buf(),
            });
        }

        let names = self.fs.list_file_names(export_dir)?;
        let existing = ExistingAssets::from_file_names(&names, FORMAT);
        let missing = missing_stage_models(&ExpectedCatalog::new(), &existing);

        let mut result = FillResult {
            existing: existing.len(),
            missing: missing.clone(),
            dry_run: options.dry_run,
            ..Default::default()
        };

        for plan in plan_gaps(&missing, &existing) {
            match plan {
                GapPlan::Copy {
                    gap,
                    source_file,
                    target_file,
                    ..
                } => {
                    if !options.dry_run {
                        self.copy(export_dir, &source_file, &target_file)?;
                    }
                    result.created.push(CreatedModel {
                        gap,
                        source_file,
                        target_file,
                    });
                }
                GapPlan::Unresolved { gap } => result.unresolved.push(gap),
            }
        }

        if options.sync {
            // Created models are on disk after a real run; a dry run has to
            // hand them over so the mirror reports what the real run copies.
            let pending: Vec<PendingModel<'_>> = result
                .created
                .iter()
                .map(|c| PendingModel {
                    file_name: &c.target_file,
                    copy_of: &c.source_file,
                })
                .collect();
            let mirror_options =
                MirrorOptions::new(FORMAT, options.sync_check).with_dry_run(options.dry_run);
            let outcome = mirror_models(&self.fs, export_dir, client_dir, &mirror_options, &pending)?;
            result.mirror = Some(outcome);
        }

        let after = ExistingAssets::from_file_names(
            names
                .iter()
                .map(String::as_str)
                .chain(result.created.iter().map(|c| c.target_file.as_str())),
            FORMAT,
        );
        let report = build_completeness(&after, now.to_rfc3339_opts(SecondsFormat::Millis, true));

        if options.write_report && !options.dry_run {
            let path = export_dir.join(REPORT_FILE_NAME);
            self.fs.write(&path, &serde_json::to_string_pretty(&report)?)?;
            result.report_path = Some(path);
        }
        result.report = Some(report);

        Ok(result)
    }

    fn copy(&self, dir: &Path, source_file: &str, target_file: &str) -> GroveResult<()> {
        let from = dir.join(source_file);
        let to = dir.join(target_file);
        self.fs
            .copy(&from, &to)
            .map(|_| ())
            .map_err(|e| GroveError::Copy {
                from,
                to,
                source: e.into(),
            })
    }
}
