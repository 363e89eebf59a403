//! Finding a usable Blender executable
//!
//! Candidates, in order: an explicit path (CLI flag or config, which already
//! folds in `GROVE_BLENDER`), the `BLENDER_PATH` environment variable, then
//! `blender` on `PATH`. The first candidate that answers `--version` wins.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{GroveError, GroveResult};

pub const BLENDER_PATH_ENV: &str = "BLENDER_PATH";

/// Ordered candidate list, without probing any of them
pub fn candidates<F>(explicit: Option<&Path>, env: F) -> Vec<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = Vec::new();
    if let Some(path) = explicit {
        out.push(path.to_path_buf());
    }
    if let Some(path) = env(BLENDER_PATH_ENV).filter(|p| !p.trim().is_empty()) {
        out.push(PathBuf::from(path));
    }
    out.push(PathBuf::from("blender"));
    out.dedup();
    out
}

/// Check that `exe` runs and answers `--version`
pub fn check_available(exe: &Path) -> bool {
    Command::new(exe)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// First candidate that runs
pub fn locate(explicit: Option<&Path>) -> GroveResult<PathBuf> {
    locate_with(explicit, |k| std::env::var(k).ok(), check_available)
}

fn locate_with<F, C>(explicit: Option<&Path>, env: F, available: C) -> GroveResult<PathBuf>
where
    F: Fn(&str) -> Option<String>,
    C: Fn(&Path) -> bool,
{
    let tried = candidates(explicit, env);
    if let Some(found) = tried.iter().find(|c| available(c)) {
        return Ok(found.clone());
    }
    Err(GroveError::BlenderNotFound {
        tried: tried
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}
