//! Export command UI views

use std::path::Path;

use grove::application::{ExportOptions, ExportResult};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_export_header(
    scene: &Path,
    options: &ExportOptions,
    host: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Export, "Grove Export");
    header.add("Scene", scene.display().to_string());
    header.add("Output", options.output_dir.display().to_string());
    let formats: Vec<String> = options.formats.iter().map(|f| f.to_string()).collect();
    header.add("Formats", formats.join(", "));
    header.add("Jobs", options.jobs.len().to_string());
    header.add("Host", host);
    header.render(supports_color, supports_unicode)
}

pub fn render_export_details(
    result: &ExportResult,
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    for model in &result.exported {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            model.path.display()
        ));
        if verbose {
            for object in &model.objects {
                out.push_str(&format!(
                    "    {} {}\n",
                    Icon::Arrow.colored(supports_color, supports_unicode),
                    object
                ));
            }
        }
    }

    for preview in &result.previews {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::dim(preview.display().to_string()).render(supports_color)
        ));
    }

    if verbose {
        for skipped in &result.skipped {
            out.push_str(&format!(
                "  {} {} {}\n",
                Icon::Pending.colored(supports_color, supports_unicode),
                skipped.output_name,
                ColoredText::dim(format!("(no {})", skipped.selection)).render(supports_color)
            ));
        }
    }

    out
}

pub fn render_export_result(
    result: &ExportResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if result.warnings.is_empty() {
        ResultSummary::success("Export Complete")
    } else {
        ResultSummary::partial("Export Complete")
    };

    summary.add_stat("scene objects", result.scene_objects);
    summary.add_stat("files exported", result.exported.len());
    summary.add_stat("jobs skipped", result.skipped.len());
    if !result.previews.is_empty() {
        summary.add_stat("previews rendered", result.previews.len());
    }

    for warning in &result.warnings {
        summary.add_warning(warning.clone());
    }

    if result.exported.is_empty() {
        summary.with_next_step("Check object names or select objects in the scene");
    }

    summary.render(supports_color, supports_unicode)
}
