//! Blender as a SceneHost
//!
//! Each call runs one headless Blender process. The job goes in as a JSON
//! file, the embedded driver script performs it, and a JSON report comes
//! back; both live in a temporary directory removed after the call.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};

use crate::domain::ports::scene_host::{
    ExportRequest, PreviewRequest, SceneHost, SceneInfo, SceneObject,
};
use crate::error::{GroveError, GroveResult};

const DRIVER_SCRIPT: &str = include_str!("driver.py");

/// Lines of stderr kept in failure messages
const STDERR_TAIL: usize = 12;

#[derive(Debug, Serialize)]
struct Job<'a, R: Serialize> {
    action: &'a str,
    request: R,
}

#[derive(Debug, Serialize)]
struct ExportJob<'a> {
    #[serde(flatten)]
    request: &'a ExportRequest,
    exporter_format: &'static str,
}

#[derive(Debug, Deserialize)]
struct HostReport {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    objects: Vec<SceneObject>,
    #[serde(default)]
    output: Option<PathBuf>,
}

/// Headless Blender driven through the embedded driver script
#[derive(Debug, Clone)]
pub struct BlenderHost {
    executable: PathBuf,
}

impl BlenderHost {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Locate Blender (see [`super::locate`]) and wrap it
    pub fn locate(explicit: Option<&Path>) -> GroveResult<Self> {
        super::locate::locate(explicit).map(Self::new)
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    fn run<R: Serialize>(&self, scene: &Path, action: &str, request: R) -> GroveResult<HostReport> {
        let work = tempfile::tempdir()?;
        let script = work.path().join("grove_driver.py");
        let job_file = work.path().join("job.json");
        let report_file = work.path().join("report.json");

        std::fs::write(&script, DRIVER_SCRIPT)?;
        std::fs::write(&job_file, serde_json::to_string(&Job { action, request })?)?;

        let output = Command::new(&self.executable)
            .arg("--background")
            .arg(scene)
            .arg("--python-exit-code")
            .arg("1")
            .arg("--python")
            .arg(&script)
            .arg("--")
            .arg(&job_file)
            .arg(&report_file)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.failed(format!("could not start {}: {}", self.executable.display(), e)))?;

        if !report_file.exists() {
            return Err(self.failed(format!(
                "exited with {:?} without a report{}",
                output.status.code(),
                stderr_tail(&output.stderr)
            )));
        }

        let raw = std::fs::read_to_string(&report_file)?;
        let report: HostReport =
            serde_json::from_str(&raw).map_err(|e| GroveError::InvalidReport {
                path: report_file.clone(),
                message: e.to_string(),
            })?;

        if !report.ok {
            let message = report
                .error
                .clone()
                .unwrap_or_else(|| format!("{action} failed"));
            return Err(self.failed(message));
        }
        if !output.status.success() {
            return Err(self.failed(format!(
                "exited with {:?}{}",
                output.status.code(),
                stderr_tail(&output.stderr)
            )));
        }
        Ok(report)
    }

    fn failed(&self, message: String) -> GroveError {
        GroveError::HostFailed {
            host: self.name().to_string(),
            message,
        }
    }

    fn written(&self, report: HostReport, requested: &Path) -> PathBuf {
        report.output.unwrap_or_else(|| requested.to_path_buf())
    }
}

impl SceneHost for BlenderHost {
    fn name(&self) -> &str {
        "blender"
    }

    fn probe(&mut self, scene: &Path) -> GroveResult<SceneInfo> {
        let report = self.run(scene, "probe", serde_json::json!({}))?;
        Ok(SceneInfo {
            objects: report.objects,
        })
    }

    fn export(&mut self, scene: &Path, request: &ExportRequest) -> GroveResult<PathBuf> {
        let job = ExportJob {
            request,
            exporter_format: request.format.exporter_format(),
        };
        let report = self.run(scene, "export", job)?;
        Ok(self.written(report, &request.output))
    }

    fn render_preview(&mut self, scene: &Path, request: &PreviewRequest) -> GroveResult<PathBuf> {
        let report = self.run(scene, "preview", request)?;
        Ok(self.written(report, &request.output))
    }
}

fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return String::new();
    }
    let start = lines.len().saturating_sub(STDERR_TAIL);
    format!(":\n{}", lines[start..].join("\n"))
}
