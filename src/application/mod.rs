//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CheckUseCase` - Inventory of one model directory
//! - `FillUseCase` - Substitute missing stage models, mirror, report
//! - `ExportUseCase` - Drive the scene host through an export job list
//! - `mirror_models` - Copy model files into the client directory

pub mod check;
pub mod export;
pub mod fill;
pub mod mirror;

pub use check::{CheckOptions, CheckResult, CheckUseCase};
pub use export::{
    ExportJob, ExportOptions, ExportResult, ExportUseCase, ExportedModel, Selection, SkippedJob,
    PREVIEW_SUFFIX,
};
pub use fill::{CreatedModel, FillOptions, FillResult, FillUseCase};
pub use mirror::{mirror_models, MirrorOptions, MirrorOutcome, PendingModel};
