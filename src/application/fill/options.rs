//! Fill options

use crate::domain::value_objects::SyncCheck;

/// Options for the fill command
#[derive(Debug, Clone)]
pub struct FillOptions {
    /// Plan only: no copies, no mirror, no report
    pub dry_run: bool,
    /// Mirror the export directory into the client directory
    pub sync: bool,
    /// How the mirror decides a client file is up to date
    pub sync_check: SyncCheck,
    /// Write `model_report.json` into the export directory
    pub write_report: bool,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            sync: true,
            sync_check: SyncCheck::default(),
            write_report: true,
        }
    }
}

impl FillOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }

    pub fn with_sync_check(mut self, check: SyncCheck) -> Self {
        self.sync_check = check;
        self
    }

    pub fn with_report(mut self, write_report: bool) -> Self {
        self.write_report = write_report;
        self
    }
}
