//! Isolated test environment for running the `grove` binary.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Environment variables that would leak the developer's setup into tests
const SCRUBBED_ENV: &[&str] = &[
    "GROVE_EXPORT_DIR",
    "GROVE_CLIENT_DIR",
    "GROVE_BLENDER",
    "GROVE_SYNC_CHECK",
    "GROVE_COLOR",
    "BLENDER_PATH",
];

/// Result of running a Grove CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as NDJSON, one value per non-empty line
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not JSON ({e}): {l}\nstdout:\n{}", self.stdout))
            })
            .collect()
    }

    /// Events of one kind
    pub fn events_of(&self, kind: &str) -> Vec<serde_json::Value> {
        self.events()
            .into_iter()
            .filter(|e| e["event"] == kind)
            .collect()
    }
}

/// Temp project and home directories; commands run from the project root
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    grove_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("create project dir"),
            home_dir: TempDir::new().expect("create home dir"),
            grove_bin: PathBuf::from(env!("CARGO_BIN_EXE_grove")),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.grove_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1");
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute grove");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Write a file under the project root, creating parents
    pub fn write_file(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Create `dir` under the project root holding one small model per name
    pub fn write_models(&self, dir: &str, names: &[&str]) -> PathBuf {
        let root = self.project_path(dir);
        std::fs::create_dir_all(&root).expect("Failed to create model dir");
        for name in names {
            std::fs::write(root.join(name), model_bytes(name)).expect("Failed to write model");
        }
        root
    }

    pub fn read_json(&self, path: &Path) -> serde_json::Value {
        let raw = std::fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
        serde_json::from_str(&raw).expect("valid JSON")
    }
}

/// Distinct content per model name so copies can be traced to their source
pub fn model_bytes(name: &str) -> Vec<u8> {
    format!("glTF:{}", name).into_bytes()
}

/// Sorted names of the regular files in `dir`
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .filter(|e| e.path().is_file())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
