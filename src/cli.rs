//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose, --config) are inherited by all
//! subcommands. Flags left unset fall back to the loaded configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use grove::domain::value_objects::{ModelFormat, SyncCheck};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Explicit on/off switch for exporter toggles
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }
}

/// Grove - tree model inventory, gap filling and Blender export
#[derive(Parser, Debug)]
#[command(name = "grove")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of human-readable text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of grove.toml / the user config
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report which expected tree models exist in a directory
    Check {
        /// Directory of exported models
        dir: PathBuf,

        /// Write a JSON snapshot of the inventory to this file
        report: Option<PathBuf>,
    },

    /// Copy substitutes for missing stage models, mirror to the client, write model_report.json
    Fill {
        /// Directory holding the exported models
        #[arg(long, value_name = "DIR")]
        export_dir: Option<PathBuf>,

        /// Client directory receiving a mirror of the models
        #[arg(long, value_name = "DIR")]
        client_dir: Option<PathBuf>,

        /// Show what would be copied without writing anything
        #[arg(long)]
        dry_run: bool,

        /// How to decide a client file is already synced
        #[arg(long, value_enum)]
        sync_check: Option<SyncCheck>,

        /// Skip mirroring into the client directory
        #[arg(long)]
        no_sync: bool,

        /// Do not write model_report.json
        #[arg(long)]
        no_report: bool,
    },

    /// Export tree models from a .blend scene through headless Blender
    Export {
        /// Scene file to export from
        scene: PathBuf,

        /// Directory receiving the exported files
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<ModelFormat>,

        /// Export every job as binary GLB and as separate-file glTF
        #[arg(long, conflicts_with = "format")]
        both_formats: bool,

        /// Include animations
        #[arg(long, value_enum, value_name = "YES|NO")]
        export_animations: Option<YesNo>,

        /// Include textures
        #[arg(long, value_enum, value_name = "YES|NO")]
        export_textures: Option<YesNo>,

        /// Uniform scale applied to meshes and armatures before export
        #[arg(long, value_parser = parse_scale)]
        scale: Option<f64>,

        /// Export every object (no: only the scene's selection)
        #[arg(long, value_enum, default_value = "yes", value_name = "YES|NO")]
        all_objects: YesNo,

        /// Output file stem in single mode (default: the scene file stem)
        #[arg(long, value_name = "NAME")]
        target_file: Option<String>,

        /// One job per species and stage, matched by object name
        #[arg(long, conflicts_with_all = ["pattern", "target_file"])]
        collection: bool,

        /// One job per pattern: objects whose name contains it
        #[arg(long, value_name = "P")]
        pattern: Vec<String>,

        /// Keep object transforms instead of applying them
        #[arg(long)]
        no_bake: bool,

        /// Render a preview PNG next to every exported model
        #[arg(long)]
        preview: bool,

        /// Blender executable
        #[arg(long, value_name = "PATH")]
        blender: Option<PathBuf>,
    },
}

/// Scale factors must be finite and greater than zero
fn parse_scale(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("expected a positive finite number, got {s}"));
    }
    Ok(value)
}
