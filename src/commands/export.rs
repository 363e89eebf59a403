//! Export command handler
//!
//! Turns the export flags and config into an [`ExportOptions`] job list and
//! drives Blender through it.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;

use grove::application::{ExportJob, ExportOptions, ExportResult, ExportUseCase, Selection};
use grove::config::GroveConfig;
use grove::domain::ports::{ExportFlags, SceneHost};
use grove::domain::value_objects::ModelFormat;
use grove::infrastructure::fs::expand_home;
use grove::infrastructure::{BlenderHost, LocalFs};

use super::{load_context, GlobalArgs};
use crate::cli::YesNo;
use crate::ui::json::emit_event;
use crate::ui::json::events::{
    CompleteEvent, ExportedEvent, SkippedEvent, StartEvent, WarningEvent,
};
use crate::ui::views::export::{
    render_export_details, render_export_header, render_export_result,
};

const COMMAND: &str = "export";

/// `grove export` flags; unset values come from config
#[derive(Debug, Clone)]
pub struct ExportArgs {
    pub scene: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub format: Option<ModelFormat>,
    pub both_formats: bool,
    pub export_animations: Option<YesNo>,
    pub export_textures: Option<YesNo>,
    pub scale: Option<f64>,
    pub all_objects: YesNo,
    pub target_file: Option<String>,
    pub collection: bool,
    pub patterns: Vec<String>,
    pub no_bake: bool,
    pub preview: bool,
    pub blender: Option<PathBuf>,
}

pub fn cmd_export(args: ExportArgs, global: &GlobalArgs) -> Result<()> {
    let (config, ui) = load_context(global)?;
    let started = Instant::now();

    let options = build_options(&args, &config);
    let blender = args
        .blender
        .as_deref()
        .or(config.blender.path.as_deref())
        .map(expand_home);
    let host = BlenderHost::locate(blender.as_deref())?;

    if ui.json {
        emit_event(&StartEvent::new(COMMAND))?;
    } else {
        print!(
            "{}",
            render_export_header(&args.scene, &options, host.name(), ui.color, ui.unicode)
        );
        println!();
    }

    let mut use_case = ExportUseCase::new(host, LocalFs::new());
    let result = use_case.execute(&args.scene, &options)?;

    if ui.json {
        emit_export_events(&result)?;
        emit_event(
            &CompleteEvent::success(COMMAND)
                .with_duration(started.elapsed().as_millis() as u64)
                .with_stat("exported", result.exported.len())
                .with_stat("skipped", result.skipped.len())
                .with_stat("previews", result.previews.len()),
        )?;
        return Ok(());
    }

    let details = render_export_details(&result, ui.verbose > 0, ui.color, ui.unicode);
    if !details.is_empty() {
        print!("{}", details);
        println!();
    }
    print!("{}", render_export_result(&result, ui.color, ui.unicode));

    Ok(())
}

fn emit_export_events(result: &ExportResult) -> std::io::Result<()> {
    for model in &result.exported {
        emit_event(&ExportedEvent::new(
            COMMAND,
            &model.output_name,
            model.format.extension(),
            &model.path,
            &model.objects,
        ))?;
    }
    for skipped in &result.skipped {
        emit_event(&SkippedEvent::new(
            COMMAND,
            &skipped.output_name,
            &skipped.selection,
        ))?;
    }
    for warning in &result.warnings {
        emit_event(&WarningEvent::new(COMMAND, warning.as_str()))?;
    }
    Ok(())
}

/// Merge flags over config into export options
pub(crate) fn build_options(args: &ExportArgs, config: &GroveConfig) -> ExportOptions {
    let formats = if args.both_formats {
        vec![ModelFormat::Glb, ModelFormat::Gltf]
    } else {
        vec![args.format.unwrap_or(config.export.format)]
    };

    let flags = ExportFlags {
        animations: args
            .export_animations
            .map_or(config.export.animations, YesNo::is_yes),
        textures: args
            .export_textures
            .map_or(config.export.textures, YesNo::is_yes),
        ..ExportFlags::default()
    };

    let preview = (args.preview || config.export.preview).then_some(config.preview);
    let output_dir = expand_home(args.output_dir.as_deref().unwrap_or(&config.paths.export_dir));

    ExportOptions::new(output_dir)
        .with_formats(formats)
        .with_flags(flags)
        .with_scale(args.scale.unwrap_or(config.export.scale))
        .with_bake_transforms(!args.no_bake && config.export.bake_transforms)
        .with_preview(preview)
        .with_jobs(build_jobs(args))
}

fn build_jobs(args: &ExportArgs) -> Vec<ExportJob> {
    if args.collection {
        return ExportJob::collection();
    }

    if !args.patterns.is_empty() {
        return args
            .patterns
            .iter()
            .map(|p| ExportJob::new(Selection::NamePattern(p.clone()), p.to_lowercase()))
            .collect();
    }

    let selection = if args.all_objects.is_yes() {
        Selection::All
    } else {
        Selection::Selected
    };
    let name = match &args.target_file {
        Some(name) => strip_model_extension(name).to_string(),
        None => scene_stem(&args.scene),
    };
    vec![ExportJob::new(selection, name)]
}

/// `tree.glb` and `tree` name the same output
fn strip_model_extension(name: &str) -> &str {
    [ModelFormat::Glb, ModelFormat::Gltf]
        .iter()
        .find_map(|f| {
            let suffix = format!(".{}", f.extension());
            let cut = name.len().checked_sub(suffix.len())?;
            name.get(cut..)
                .filter(|tail| tail.eq_ignore_ascii_case(&suffix))
                .map(|_| &name[..cut])
        })
        .unwrap_or(name)
}

fn scene_stem(scene: &Path) -> String {
    scene
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "scene".to_string())
}
