//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::PreviewSettings;
use crate::domain::value_objects::{ModelFormat, SyncCheck};
use crate::error::GroveResult;

use super::loader::{self, ConfigWarning};

/// Where the models live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    #[serde(default = "default_client_dir")]
    pub client_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            client_dir: default_client_dir(),
        }
    }
}

fn default_export_dir() -> PathBuf {
    PathBuf::from("design/models/export/trees")
}

fn default_client_dir() -> PathBuf {
    PathBuf::from("client/public/models/trees")
}

/// Defaults for `grove export`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub format: ModelFormat,

    #[serde(default = "default_true")]
    pub animations: bool,

    #[serde(default = "default_true")]
    pub textures: bool,

    #[serde(default = "default_scale")]
    pub scale: f64,

    #[serde(default = "default_true")]
    pub bake_transforms: bool,

    #[serde(default)]
    pub preview: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ModelFormat::default(),
            animations: true,
            textures: true,
            scale: default_scale(),
            bake_transforms: true,
            preview: false,
        }
    }
}

fn default_scale() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

/// Mirror behaviour of `grove fill`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SyncConfig {
    #[serde(default)]
    pub check: SyncCheck,
}

/// Blender location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BlenderConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" | "on" | "true" | "1" => Some(ColorMode::Always),
            "never" | "off" | "false" | "0" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GroveConfig {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub preview: PreviewSettings,

    #[serde(default)]
    pub sync: SyncConfig,

    #[serde(default)]
    pub blender: BlenderConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl GroveConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> GroveResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> GroveResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (GROVE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |k| std::env::var(k).ok())
    }
}
