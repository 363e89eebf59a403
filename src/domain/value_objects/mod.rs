//! Domain Value Objects
//!
//! Immutable value types for the naming convention: species, growth stages,
//! asset names, formats, and the sync comparison mode.

mod asset_name;
mod format;
mod presence;
mod species;
mod stage;
mod sync_check;

pub use asset_name::{AssetName, ModelSlot, HEALTH_VARIANTS};
pub use format::ModelFormat;
pub use presence::PresenceMap;
pub use species::Species;
pub use stage::GrowthStage;
pub use sync_check::SyncCheck;
