//! Domain Layer
//!
//! The naming convention and the rules built on it, without I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Species, GrowthStage, AssetName, ModelFormat, SyncCheck
//! - `entities/` - ExpectedCatalog, ExistingAssets
//! - `policies/` - Fallback source table
//! - `services/` - Inventory check, gap planning, completeness, camera placement
//! - `ports/` - FileSystem and SceneHost interfaces

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
