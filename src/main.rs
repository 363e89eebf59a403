//! Grove CLI - tree model asset tooling
//!
//! Usage: grove <COMMAND>
//!
//! Commands:
//!   check   Report which expected tree models exist in a directory
//!   fill    Copy placeholders for missing stages, mirror, write the report
//!   export  Export models from a .blend scene through headless Blender

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use commands::{ExportArgs, FillArgs, GlobalArgs};
use ui::json::emit_event;
use ui::json::events::ErrorEvent;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global = GlobalArgs::from(&cli);

    let (name, result) = match cli.command {
        Commands::Check { dir, report } => {
            ("check", commands::cmd_check(&dir, report.as_deref(), &global))
        }
        Commands::Fill {
            export_dir,
            client_dir,
            dry_run,
            sync_check,
            no_sync,
            no_report,
        } => (
            "fill",
            commands::cmd_fill(
                FillArgs {
                    export_dir,
                    client_dir,
                    dry_run,
                    sync_check,
                    no_sync,
                    no_report,
                },
                &global,
            ),
        ),
        Commands::Export {
            scene,
            output_dir,
            format,
            both_formats,
            export_animations,
            export_textures,
            scale,
            all_objects,
            target_file,
            collection,
            pattern,
            no_bake,
            preview,
            blender,
        } => (
            "export",
            commands::cmd_export(
                ExportArgs {
                    scene,
                    output_dir,
                    format,
                    both_formats,
                    export_animations,
                    export_textures,
                    scale,
                    all_objects,
                    target_file,
                    collection,
                    patterns: pattern,
                    no_bake,
                    preview,
                    blender,
                },
                &global,
            ),
        ),
    };

    if let (true, Err(e)) = (global.json, &result) {
        let _ = emit_event(&ErrorEvent::new(name, format!("{:#}", e)));
    }

    result
}
