//! Check command handler
//!
//! Inventory of one model directory, optionally snapshotted to JSON.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use grove::application::{CheckOptions, CheckUseCase};
use grove::domain::value_objects::Species;
use grove::infrastructure::LocalFs;

use super::{load_context, GlobalArgs};
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, MissingEvent, SpeciesEvent, StartEvent};
use crate::ui::views::check::{render_check_header, render_check_report, render_check_result};

const COMMAND: &str = "check";

pub fn cmd_check(dir: &Path, report: Option<&Path>, global: &GlobalArgs) -> Result<()> {
    let (_config, ui) = load_context(global)?;
    let started = Instant::now();

    if ui.json {
        emit_event(&StartEvent::new(COMMAND))?;
    } else {
        print!("{}", render_check_header(dir, ui.color, ui.unicode));
        println!();
    }

    let options = CheckOptions::new().with_snapshot(report.map(Path::to_path_buf));
    let result = CheckUseCase::new(LocalFs::new()).execute(dir, &options)?;
    let inventory = &result.report;

    if ui.json {
        let empty = Default::default();
        for species in Species::ALL {
            let models = inventory.results.get(&species).unwrap_or(&empty);
            emit_event(&SpeciesEvent::new(
                COMMAND,
                species.as_str(),
                inventory.is_complete(species),
                models,
            ))?;
        }
        for file in &inventory.missing_files {
            emit_event(&MissingEvent::new(COMMAND, file))?;
        }

        let mut complete = CompleteEvent::success(COMMAND)
            .with_duration(started.elapsed().as_millis() as u64)
            .with_stat("complete_tree_types", inventory.complete_tree_types.len())
            .with_stat("total_tree_types", Species::ALL.len())
            .with_stat("missing_files", inventory.missing_files.len());
        if let Some(path) = &result.snapshot {
            complete = complete.with_stat("snapshot", path.display().to_string());
        }
        emit_event(&complete)?;
        return Ok(());
    }

    print!(
        "{}",
        render_check_report(inventory, ui.verbose > 0, ui.color, ui.unicode)
    );
    println!();
    print!("{}", render_check_result(&result, ui.color, ui.unicode));

    Ok(())
}
