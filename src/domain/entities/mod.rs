//! Domain Entities
//!
//! - `ExpectedCatalog` - the fixed set of model names a directory should hold
//! - `ExistingAssets` - the model files actually found at scan time

mod catalog;
mod existing;

pub use catalog::{ExpectedCatalog, ExpectedModel};
pub use existing::ExistingAssets;
