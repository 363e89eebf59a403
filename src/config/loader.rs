//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::SyncCheck;
use crate::error::{GroveError, GroveResult};

use super::types::{ColorMode, GroveConfig};

/// Project config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "grove.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration together with where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: GroveConfig,
    /// File the config was read from, `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> GroveResult<(GroveConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| GroveError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: GroveConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| GroveError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let scale = config.export.scale;
    if !scale.is_finite() || scale <= 0.0 {
        return Err(GroveError::Config {
            file: path.to_path_buf(),
            message: format!("export.scale must be a positive finite number, got {scale}"),
        });
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the config file and load it with env overrides applied.
///
/// An explicit `--config` file must exist and parse. Otherwise the project
/// `grove.toml` wins over the user config; without either, built-in
/// defaults are used.
pub fn load(explicit: Option<&Path>, project_root: Option<&Path>) -> GroveResult<LoadedConfig> {
    let source = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discover(project_root, dirs::config_dir().as_deref()),
    };

    let mut loaded = match source {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            LoadedConfig {
                config,
                source: Some(path),
                warnings,
            }
        }
        None => LoadedConfig::default(),
    };
    loaded.config = with_env_overrides(loaded.config, |k| std::env::var(k).ok());
    Ok(loaded)
}

/// First existing config file: project, then user
pub(super) fn discover(project_root: Option<&Path>, user_config_dir: Option<&Path>) -> Option<PathBuf> {
    let project = project_root.map(|root| root.join(PROJECT_CONFIG_FILE));
    let user = user_config_dir.map(|dir| dir.join("grove").join("config.toml"));
    project.into_iter().chain(user).find(|p| p.is_file())
}

/// Apply environment variable overrides (GROVE_* prefix)
pub fn with_env_overrides<F>(mut config: GroveConfig, env: F) -> GroveConfig
where
    F: Fn(&str) -> Option<String>,
{
    let set = |key: &str| env(key).filter(|v| !v.trim().is_empty());

    if let Some(dir) = set("GROVE_EXPORT_DIR") {
        config.paths.export_dir = PathBuf::from(dir);
    }

    if let Some(dir) = set("GROVE_CLIENT_DIR") {
        config.paths.client_dir = PathBuf::from(dir);
    }

    if let Some(path) = set("GROVE_BLENDER") {
        config.blender.path = Some(PathBuf::from(path));
    }

    if let Some(check) = set("GROVE_SYNC_CHECK").and_then(|v| SyncCheck::parse_lenient(&v)) {
        config.sync.check = check;
    }

    if let Some(color) = set("GROVE_COLOR").and_then(|v| ColorMode::parse_lenient(&v)) {
        config.output.color = color;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "paths",
        "export_dir",
        "client_dir",
        "export",
        "format",
        "animations",
        "textures",
        "scale",
        "bake_transforms",
        "preview",
        "resolution",
        "distance_factor",
        "azimuth_deg",
        "elevation_deg",
        "sync",
        "check",
        "blender",
        "path",
        "output",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

