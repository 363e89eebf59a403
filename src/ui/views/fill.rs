//! Fill command UI views

use std::path::Path;

use grove::application::FillResult;
use grove::domain::value_objects::{ModelFormat, SyncCheck};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_fill_header(
    export_dir: &Path,
    client_dir: Option<&Path>,
    sync_check: SyncCheck,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if dry_run {
        "Grove Fill (Dry Run)"
    } else {
        "Grove Fill"
    };
    let mut header = CommandHeader::new(Icon::Fill, title);
    header.add("Export", export_dir.display().to_string());
    match client_dir {
        Some(dir) => header.add("Client", format!("{} ({} check)", dir.display(), sync_check)),
        None => header.add("Client", "not synced"),
    }
    header.render(supports_color, supports_unicode)
}

/// Planned or made copies, shortfalls, and (verbose) the mirror pass
pub fn render_fill_details(
    result: &FillResult,
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    if !result.created.is_empty() {
        let label = if result.dry_run {
            "Placeholders to create:"
        } else {
            "Placeholders created:"
        };
        out.push_str(&ColoredText::success(label).bold().render(supports_color));
        out.push('\n');
        for created in &result.created {
            out.push_str(&format!(
                "  {} {} {}\n",
                Icon::Success.colored(supports_color, supports_unicode),
                created.target_file,
                ColoredText::dim(format!("<- {}", created.source_file)).render(supports_color)
            ));
        }
    }

    if !result.unresolved.is_empty() {
        out.push_str(
            &ColoredText::warning("No source available:")
                .bold()
                .render(supports_color),
        );
        out.push('\n');
        for gap in &result.unresolved {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                gap.target.file_name(ModelFormat::Glb)
            ));
        }
    }

    if let (true, Some(mirror)) = (verbose, &result.mirror) {
        let sync = Icon::Sync.colored(supports_color, supports_unicode);
        for name in &mirror.mirrored {
            out.push_str(&format!("  {} {}\n", sync, name));
        }
        for name in &mirror.already_synced {
            out.push_str(&format!(
                "  {} {}\n",
                sync,
                ColoredText::dim(format!("{} (already synced)", name)).render(supports_color)
            ));
        }
    }

    out
}

pub fn render_fill_result(
    result: &FillResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if result.dry_run {
        "Dry Run Complete"
    } else if result.missing.is_empty() {
        "Nothing to Fill"
    } else {
        "Fill Complete"
    };

    let mut summary = if result.unresolved.is_empty() {
        ResultSummary::success(title)
    } else {
        ResultSummary::partial(title)
    };

    summary.add_stat("models found", result.existing);
    summary.add_stat("stage models missing", result.missing.len());
    if result.dry_run {
        summary.add_stat("placeholders would be created", result.created.len());
    } else {
        summary.add_stat("placeholders created", result.created.len());
    }

    if let Some(mirror) = &result.mirror {
        let verb = if result.dry_run {
            "would be mirrored"
        } else {
            "mirrored"
        };
        summary.add_stat(format!("files {}", verb), mirror.mirrored.len());
        summary.add_stat("files already synced", mirror.already_synced.len());
    }

    if let Some(path) = &result.report_path {
        summary.add_info(format!("Report written to {}", path.display()));
    }
    if !result.unresolved.is_empty() {
        summary.add_warning(format!(
            "{} stage models have no usable source",
            result.unresolved.len()
        ));
    }
    summary.add_info(format!("{} stage models still missing", result.missing_after()));

    if result.dry_run && !result.created.is_empty() {
        summary.with_next_step("Run without --dry-run to copy placeholders");
    }

    summary.render(supports_color, supports_unicode)
}
