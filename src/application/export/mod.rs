//! Export Use Case
//!
//! One configurable driver for scene exports: a job list (selection plus
//! output name), a flag set, and an optional preview render.

mod options;
mod result;
mod use_case;

pub use options::{ExportJob, ExportOptions, Selection};
pub use result::{ExportResult, ExportedModel, SkippedJob};
pub use use_case::{ExportUseCase, PREVIEW_SUFFIX};
