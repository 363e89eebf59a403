//! Test fixtures - model file sets and a fake Blender.

use std::path::{Path, PathBuf};

pub const SPECIES: [&str; 7] = ["oak", "pine", "cherry", "apple", "maple", "willow", "palm"];

/// The generic model plus all four stages of `species`
pub fn full_species(species: &str) -> Vec<String> {
    vec![
        format!("{species}.glb"),
        format!("seedstage_{species}.glb"),
        format!("{species}_sapling.glb"),
        format!("{species}_growing.glb"),
        format!("{species}_mature.glb"),
    ]
}

/// Every species-specific file of the library (35 files)
pub fn full_library() -> Vec<String> {
    SPECIES.iter().flat_map(|s| full_species(s)).collect()
}

pub const HEALTH_MODELS: [&str; 4] = [
    "healthy_tree.glb",
    "slightly_wilted_tree.glb",
    "moderately_wilted_tree.glb",
    "severely_wilted_tree.glb",
];

/// Scene reported by the fake Blender on every call
pub const FAKE_SCENE_OBJECTS: &str = r#"[
  {"name": "Oak_Mature_Trunk", "kind": "mesh", "bounds": {"min": [-1, -1, 0], "max": [1, 1, 4]}},
  {"name": "oak_mature_leaves", "kind": "mesh", "selected": true, "bounds": {"min": [-2, -2, 3], "max": [2, 2, 6]}},
  {"name": "Pine_Seed", "kind": "mesh", "bounds": {"min": [0, 0, 0], "max": [0.2, 0.2, 0.2]}},
  {"name": "Sun", "kind": "light"}
]"#;

/// Write a shell script standing in for Blender into `dir`.
///
/// It answers `--version`, appends each job file to `calls.log` next to
/// itself and reports [`FAKE_SCENE_OBJECTS`] with `ok: true`.
#[cfg(unix)]
pub fn fake_blender(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = format!(
        r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo "Blender 4.2.0 (fake)"
  exit 0
fi
job=""
report=""
for arg in "$@"; do
  job="$report"
  report="$arg"
done
cat "$job" >> "$(dirname "$0")/calls.log"
echo >> "$(dirname "$0")/calls.log"
cat > "$report" <<'JSON'
{{"ok": true, "objects": {objects}}}
JSON
"#,
        objects = FAKE_SCENE_OBJECTS
    );

    std::fs::create_dir_all(dir).expect("create fake blender dir");
    let path = dir.join("blender");
    std::fs::write(&path, script).expect("write fake blender");
    let mut perms = std::fs::metadata(&path).expect("stat").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("chmod fake blender");
    path
}

/// Jobs the fake Blender received, in call order
pub fn fake_blender_calls(blender: &Path) -> Vec<serde_json::Value> {
    let log = blender.with_file_name("calls.log");
    std::fs::read_to_string(log)
        .unwrap_or_default()
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("job is JSON"))
        .collect()
}
