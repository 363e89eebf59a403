//! Domain Services
//!
//! Stateless logic over the domain types. No I/O.

pub mod camera;
pub mod completeness;
pub mod gap_planner;
pub mod inventory;

pub use camera::{place_camera, Bounds, CameraPlacement, PreviewSettings};
pub use completeness::{build_completeness, CompletenessReport, SpeciesCompleteness, REPORT_FILE_NAME};
pub use gap_planner::{missing_stage_models, plan_gaps, Gap, GapPlan};
pub use inventory::{check_inventory, InventoryReport};
