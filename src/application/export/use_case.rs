//! Export Use Case
//!
//! probe -> resolve selections -> one host export per output file ->
//! optional preview. Unmatched selections and failed previews are recorded
//! in the result; host export failures abort the run.

use std::path::Path;

use crate::domain::ports::{ExportRequest, FileSystem, PreviewRequest, SceneHost, SceneObject};
use crate::domain::services::{place_camera, Bounds, PreviewSettings};
use crate::error::{GroveError, GroveResult};

use super::options::{ExportJob, ExportOptions};
use super::result::{ExportResult, ExportedModel, SkippedJob};

/// Suffix of preview images, appended to the asset stem
pub const PREVIEW_SUFFIX: &str = "_preview.png";

/// Export use case - drives a scene host through a job list
pub struct ExportUseCase<H: SceneHost, FS: FileSystem> {
    host: H,
    fs: FS,
}

impl<H: SceneHost, FS: FileSystem> ExportUseCase<H, FS> {
    pub fn new(host: H, fs: FS) -> Self {
        Self { host, fs }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn execute(&mut self, scene: &Path, options: &ExportOptions) -> GroveResult<ExportResult> {
        if !self.fs.exists(scene) {
            return Err(GroveError::SceneNotFound {
                path: scene.to_path_buf(),
            });
        }
        self.fs.create_dir_all(&options.output_dir)?;

        let info = self.host.probe(scene)?;
        let mut result = ExportResult::new(scene.to_path_buf());
        result.scene_objects = info.objects.len();

        for job in &options.jobs {
            let objects = job.selection.resolve(&info.objects);
            if objects.is_empty() {
                result.skipped.push(SkippedJob {
                    output_name: job.output_name.clone(),
                    selection: job.selection.to_string(),
                });
                continue;
            }
            self.export_job(scene, job, &objects, options, &mut result)?;
        }

        Ok(result)
    }

    fn export_job(
        &mut self,
        scene: &Path,
        job: &ExportJob,
        objects: &[&SceneObject],
        options: &ExportOptions,
        result: &mut ExportResult,
    ) -> GroveResult<()> {
        let names: Vec<String> = objects.iter().map(|o| o.name.clone()).collect();

        for format in &options.formats {
            let request = ExportRequest {
                objects: names.clone(),
                output: options
                    .output_dir
                    .join(format!("{}.{}", job.output_name, format.extension())),
                format: *format,
                flags: options.flags,
                scale: options.requested_scale(),
                bake_transforms: options.bake_transforms,
            };
            let path = self.host.export(scene, &request)?;
            result.exported.push(ExportedModel {
                output_name: job.output_name.clone(),
                format: *format,
                path,
                objects: names.clone(),
            });
        }

        if let Some(settings) = &options.preview {
            let request = preview_request(job, objects, options, settings);
            match self.host.render_preview(scene, &request) {
                Ok(path) => result.previews.push(path),
                Err(e) => result
                    .warnings
                    .push(format!("preview for {} failed: {}", job.output_name, e)),
            }
        }
        Ok(())
    }
}

fn preview_request(
    job: &ExportJob,
    objects: &[&SceneObject],
    options: &ExportOptions,
    settings: &PreviewSettings,
) -> PreviewRequest {
    let scale = options.requested_scale();
    let bounds: Vec<Bounds> = objects
        .iter()
        .filter_map(|o| {
            let b = o.bounds?;
            Some(match scale {
                Some(s) if o.kind.is_scalable() => b.scaled_about(o.origin, rescale(o.scale, s)),
                _ => b,
            })
        })
        .collect();

    PreviewRequest {
        objects: objects.iter().map(|o| o.name.clone()).collect(),
        output: options
            .output_dir
            .join(format!("{}{}", job.output_name, PREVIEW_SUFFIX)),
        camera: place_camera(Bounds::union_all(&bounds).as_ref(), settings),
        resolution: settings.resolution,
        scale,
    }
}

/// Per-axis factor taking `current` scale to uniform `target`
fn rescale(current: [f64; 3], target: f64) -> [f64; 3] {
    current.map(|c| if c == 0.0 { 1.0 } else { target / c })
}
