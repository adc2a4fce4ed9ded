//! Render command handler
//!
//! Writes a dashboard report (Markdown, HTML or JSON) for one payload file.

use super::load_model;
use intl_insights::config::Config;
use intl_insights::models::InsightsKind;
use intl_insights::report::{generator_for, ReportContext, ReportFormat};
use logger::{error, info, verbose};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the render command.
///
/// # Arguments
/// * `input_file` - Path to the payload JSON file
/// * `kind` - Dashboard variant
/// * `format_str` - Report format; the config default is used when omitted
/// * `output_file` - Optional output path
/// * `config` - Configuration containing the reports directory and display settings
pub fn run(
    input_file: &Path,
    kind: InsightsKind,
    format_str: Option<&str>,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let result = render_report(input_file, kind, format_str, output_file, config);
    if let Err(err) = &result {
        error!("Rendering failed for {}: {err}", input_file.display());
    }
    result
}

fn render_report(
    input_file: &Path,
    kind: InsightsKind,
    format_str: Option<&str>,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let format = match format_str {
        Some(name) => ReportFormat::from_str(name).map_err(|e| format!("✗ {e}"))?,
        None => config.report_format(),
    };

    let model = load_model(input_file, kind, config)?;

    let output_path = output_file.map_or_else(
        || default_output_path(input_file, kind, format, config),
        Path::to_path_buf,
    );

    let source = input_file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("payload");
    let ctx = ReportContext::new(&model, kind)
        .with_source(source)
        .with_date_format(config.date_format());

    generator_for(format)
        .generate(&ctx, &output_path)
        .map_err(|e| format!("✗ Failed to generate {format} report: {e}"))?;

    println!("✓ Report generated: {}", output_path.display());
    verbose!(
        "  {} ({kind}, {format}): {} panels, {} empty",
        model.title,
        model.panels.len(),
        model.panels.iter().filter(|p| p.is_empty()).count()
    );
    info!("Report exported to: {}", output_path.display());
    Ok(())
}

/// `<reports_dir>/<stem>_<kind>.<ext>`
fn default_output_path(
    input_file: &Path,
    kind: InsightsKind,
    format: ReportFormat,
    config: &Config,
) -> PathBuf {
    let stem = input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("insights");
    PathBuf::from(&config.paths.reports_dir).join(format!("{stem}_{kind}.{}", format.extension()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_uses_stem_kind_and_extension() {
        let mut config = Config::from_defaults();
        config.paths.reports_dir = "/tmp/reports".to_string();
        let path = default_output_path(
            Path::new("data/march.json"),
            InsightsKind::Visits,
            ReportFormat::Markdown,
            &config,
        );
        assert_eq!(path, PathBuf::from("/tmp/reports/march_visits.md"));
    }

    #[test]
    fn writes_report_to_explicit_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("stats.json");
        std::fs::write(&input, r#"{"total": 4, "eventTypes": 2}"#).expect("write payload");
        let output = dir.path().join("out").join("report.json");

        let config = Config::from_defaults();
        run(&input, InsightsKind::Events, Some("json"), Some(&output), &config)
            .expect("render succeeds");

        let text = std::fs::read_to_string(&output).expect("report written");
        assert!(text.contains("\"Avg Events/Type\""));
        assert!(text.contains("\"2.0\""));
    }

    #[test]
    fn unknown_format_is_an_error() {
        let config = Config::from_defaults();
        let err = run(
            Path::new("missing.json"),
            InsightsKind::Events,
            Some("pdf"),
            None,
            &config,
        )
        .expect_err("pdf is not supported");
        assert!(err.starts_with('✗'));
    }
}
