//! Configuration module for Grove
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (GROVE_*)
//! 3. `--config <FILE>`, or project config (`grove.toml`)
//! 4. User config (`<config dir>/grove/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load, with_env_overrides, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{
    BlenderConfig, ColorMode, ExportConfig, GroveConfig, OutputConfig, PathsConfig, SyncConfig,
};
