//! Check command UI views

use std::path::Path;

use grove::application::CheckResult;
use grove::domain::services::InventoryReport;
use grove::domain::value_objects::{ModelSlot, Species};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::species_row::SpeciesRow;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_check_header(dir: &Path, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Check, "Grove Check");
    header.add("Directory", dir.display().to_string());
    header.render(supports_color, supports_unicode)
}

fn species_row(report: &InventoryReport, species: Species) -> SpeciesRow {
    SpeciesRow {
        name: species.to_string(),
        slots: ModelSlot::ALL
            .iter()
            .map(|slot| (slot.key().to_string(), report.is_present(species, *slot)))
            .collect(),
    }
}

/// Complete species, missing files, per-species detail and health variants
pub fn render_check_report(
    report: &InventoryReport,
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    out.push_str(
        &ColoredText::plain(format!(
            "Complete tree types: {}/{}",
            report.complete_tree_types.len(),
            Species::ALL.len()
        ))
        .bold()
        .render(supports_color),
    );
    out.push('\n');
    for species in &report.complete_tree_types {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            species
        ));
    }

    out.push('\n');
    out.push_str(
        &ColoredText::plain(format!("Missing files: {}", report.missing_files.len()))
            .bold()
            .render(supports_color),
    );
    out.push('\n');
    for file in &report.missing_files {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Pending.colored(supports_color, supports_unicode),
            file
        ));
    }

    out.push('\n');
    out.push_str(&ColoredText::plain("By species:").bold().render(supports_color));
    out.push('\n');
    for species in Species::ALL {
        let row = species_row(report, species);
        if verbose || !row.is_complete() {
            out.push_str(&row.render(supports_color, supports_unicode));
        }
    }

    out.push('\n');
    out.push_str(&ColoredText::plain("Health variants:").bold().render(supports_color));
    out.push('\n');
    for (name, present) in report.health_models.iter() {
        let icon = if present { Icon::Success } else { Icon::Error };
        out.push_str(&format!(
            "  {} {}\n",
            icon.colored(supports_color, supports_unicode),
            name
        ));
    }

    out
}

pub fn render_check_result(
    result: &CheckResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let report = &result.report;
    let complete = report.complete_tree_types.len();
    let mut summary = if report.missing_files.is_empty() {
        ResultSummary::success("Inventory Complete")
    } else {
        ResultSummary::partial("Inventory Incomplete")
    };

    summary.add_info(format!(
        "{}/{} tree types complete ({:.1}%)",
        complete,
        Species::ALL.len(),
        report.complete_percentage()
    ));
    summary.add_stat("model files scanned", report.scanned);
    summary.add_stat("files missing", report.missing_files.len());

    if let Some(path) = &result.snapshot {
        summary.add_info(format!("Snapshot written to {}", path.display()));
    }
    if !report.missing_files.is_empty() {
        summary.with_next_step("grove fill  (copy placeholders for missing stages)");
    }

    summary.render(supports_color, supports_unicode)
}
