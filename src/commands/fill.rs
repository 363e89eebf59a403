//! Fill command handler
//!
//! Copies substitutes for missing stage models, mirrors the export
//! directory into the client directory and writes `model_report.json`.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use grove::application::{FillOptions, FillResult, FillUseCase};
use grove::domain::value_objects::{ModelFormat, SyncCheck};
use grove::domain::ports::FileSystem;
use grove::infrastructure::LocalFs;

use super::{load_context, GlobalArgs};
use crate::ui::json::emit_event;
use crate::ui::json::events::{
    CompleteEvent, CreatedEvent, MirroredEvent, StartEvent, UnresolvedEvent,
};
use crate::ui::views::fill::{render_fill_details, render_fill_header, render_fill_result};

const COMMAND: &str = "fill";

/// `grove fill` flags; unset directories and check mode come from config
#[derive(Debug, Clone, Default)]
pub struct FillArgs {
    pub export_dir: Option<PathBuf>,
    pub client_dir: Option<PathBuf>,
    pub dry_run: bool,
    pub sync_check: Option<SyncCheck>,
    pub no_sync: bool,
    pub no_report: bool,
}

pub fn cmd_fill(args: FillArgs, global: &GlobalArgs) -> Result<()> {
    let (config, ui) = load_context(global)?;
    let started = Instant::now();

    let fs = LocalFs::new();
    let export_dir = fs.expand_home(&args.export_dir.unwrap_or(config.paths.export_dir));
    let client_dir = fs.expand_home(&args.client_dir.unwrap_or(config.paths.client_dir));
    let sync_check = args.sync_check.unwrap_or(config.sync.check);

    let options = FillOptions::new()
        .with_dry_run(args.dry_run)
        .with_sync(!args.no_sync)
        .with_sync_check(sync_check)
        .with_report(!args.no_report);

    if ui.json {
        emit_event(&StartEvent::new(COMMAND))?;
    } else {
        let client = options.sync.then_some(client_dir.as_path());
        print!(
            "{}",
            render_fill_header(
                &export_dir,
                client,
                sync_check,
                args.dry_run,
                ui.color,
                ui.unicode
            )
        );
        println!();
    }

    let result = FillUseCase::new(fs).execute(&export_dir, &client_dir, &options)?;

    if ui.json {
        emit_fill_events(&result)?;
        emit_event(&complete_event(&result, started))?;
        return Ok(());
    }

    let details = render_fill_details(&result, ui.verbose > 0, ui.color, ui.unicode);
    if !details.is_empty() {
        print!("{}", details);
        println!();
    }
    print!("{}", render_fill_result(&result, ui.color, ui.unicode));

    Ok(())
}

fn emit_fill_events(result: &FillResult) -> std::io::Result<()> {
    for created in &result.created {
        emit_event(&CreatedEvent::new(
            COMMAND,
            &created.target_file,
            &created.source_file,
            result.dry_run,
        ))?;
    }

    for gap in &result.unresolved {
        let file = gap.target.file_name(ModelFormat::Glb);
        emit_event(&UnresolvedEvent::new(COMMAND, &file))?;
    }

    if let Some(mirror) = &result.mirror {
        for name in &mirror.mirrored {
            emit_event(&MirroredEvent::copied(COMMAND, name))?;
        }
        for name in &mirror.already_synced {
            emit_event(&MirroredEvent::already_synced(COMMAND, name))?;
        }
    }

    Ok(())
}

fn complete_event(result: &FillResult, started: Instant) -> CompleteEvent<'static> {
    let mut event = CompleteEvent::success(COMMAND)
        .with_duration(started.elapsed().as_millis() as u64)
        .with_stat("dry_run", result.dry_run)
        .with_stat("existing", result.existing)
        .with_stat("missing", result.missing.len())
        .with_stat("created", result.created.len())
        .with_stat("unresolved", result.unresolved.len())
        .with_stat("mirrored", result.mirrored_count())
        .with_stat("already_synced", result.already_synced_count())
        .with_stat("missing_after", result.missing_after());
    if let Some(path) = &result.report_path {
        event = event.with_stat("report", path.display().to_string());
    }
    event
}
