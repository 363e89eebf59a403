//! Grove - tree model asset tooling
//!
//! Keeps a game's tree model library complete: checks which species and
//! growth-stage models exist, fills gaps with the closest available model,
//! mirrors the library into the client, and drives Blender to export
//! models from `.blend` scenes.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use config::GroveConfig;
pub use domain::value_objects::{AssetName, GrowthStage, ModelFormat, Species, SyncCheck};
pub use error::{GroveError, GroveResult};
