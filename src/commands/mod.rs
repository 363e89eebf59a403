//! Command handlers
//!
//! Each handler loads the configuration, builds a [`UiContext`], runs its
//! use case against the real file system (and Blender, for export) and
//! renders the result as text or NDJSON.

pub mod check;
pub mod export;
pub mod fill;

use std::path::PathBuf;

use anyhow::{Context, Result};
use grove::config::{self, GroveConfig};

use crate::cli::{Cli, ColorWhen};
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

pub use check::cmd_check;
pub use export::{cmd_export, ExportArgs};
pub use fill::{cmd_fill, FillArgs};

/// Flags every command inherits
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub json: bool,
    pub verbose: u8,
    pub color: Option<ColorWhen>,
    pub config: Option<PathBuf>,
}

impl From<&Cli> for GlobalArgs {
    fn from(cli: &Cli) -> Self {
        Self {
            json: cli.json,
            verbose: cli.verbose,
            color: cli.color,
            config: cli.config.clone(),
        }
    }
}

/// Load the layered configuration and derive the UI context from it.
///
/// Unknown config keys are reported on stderr and never fail the command.
pub(crate) fn load_context(global: &GlobalArgs) -> Result<(GroveConfig, UiContext)> {
    let project_root = std::env::current_dir().ok();
    let loaded = config::load(global.config.as_deref(), project_root.as_deref())
        .context("failed to load configuration")?;

    let ui = UiContext::new(global.json, global.verbose, global.color, &loaded.config);
    print_config_warnings(&loaded.warnings, &ui);

    Ok((loaded.config, ui))
}
