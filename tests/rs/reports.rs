//! Integration tests for the Markdown, HTML and JSON report writers

use intl_insights::ingest::load_payload;
use intl_insights::insights::{DateFormat, DisplayModel, RenderOptions};
use intl_insights::models::InsightsKind;
use intl_insights::report::{
    generator_for, HtmlReporter, JsonReporter, MarkdownReporter, ReportContext, ReportFormat,
    ReportGenerator,
};
use std::fs;
use std::path::Path;

fn model(kind: InsightsKind, fixture: &str) -> DisplayModel {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(fixture);
    load_payload(kind, &path)
        .expect("fixture loads")
        .display_model(&RenderOptions::default())
}

#[test]
fn markdown_contains_cards_panels_and_escaped_cells() {
    let model = model(InsightsKind::Visits, "university_visits.json");
    let ctx = ReportContext::new(&model, InsightsKind::Visits).with_source("university_visits.json");
    let md = MarkdownReporter::new().render(&ctx).expect("markdown renders");

    assert!(md.starts_with("# University Insights"));
    assert!(md.contains("| Total Visits | 18 |"));
    assert!(md.contains("## Top 10 Universities by Visits"));
    assert!(md.contains("| Delegation | 11 | 61% | Delegation: 61% |"));
    assert!(md.contains("- **Research Collaboration**: 10"));
    assert!(md.contains("Research \\| Teaching"));
    assert!(!md.contains("{{"));
}

#[test]
fn markdown_shows_placeholders_for_empty_panels() {
    let model = intl_insights::insights::render::<intl_insights::models::EventTypeInsights>(
        None,
        &RenderOptions::default(),
    );
    let ctx = ReportContext::new(&model, InsightsKind::Events);
    let md = MarkdownReporter::new().render(&ctx).expect("markdown renders");

    assert!(md.contains("_No event type data available_"));
    assert!(md.contains("_No recent events_"));
    assert!(md.contains("| **Source** | - |"));
}

#[test]
fn html_escapes_record_text() {
    let model = model(InsightsKind::Visits, "university_visits.json");
    let ctx = ReportContext::new(&model, InsightsKind::Visits).with_date_format(DateFormat::Iso);
    let html = HtmlReporter::new().render(&ctx).expect("html renders");

    assert!(html.contains("<title>University Insights</title>"));
    assert!(html.contains("Prof. Tanaka &lt;Dean&gt;"));
    assert!(!html.contains("<Dean>"));
    assert!(html.contains("conic-gradient(#570df8"));
    assert!(html.contains("width: 100.0%"));
    assert!(html.contains("YYYY-MM-DD"));
}

#[test]
fn json_report_round_trips_as_value() {
    let model = model(InsightsKind::Departments, "department_scholars.json");
    let ctx = ReportContext::new(&model, InsightsKind::Departments).with_source("scholars.json");
    let text = JsonReporter::new().render(&ctx).expect("json renders");

    let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
    assert_eq!(value["kind"], "departments");
    assert_eq!(value["source"], "scholars.json");
    assert_eq!(value["title"], "Department Insights");
    assert_eq!(value["cards"][1]["value"], "7");
    assert_eq!(value["panels"][1]["body"]["kind"], "pie");
}

#[test]
fn generate_writes_each_format_to_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let model = model(InsightsKind::Events, "event_types.json");
    let ctx = ReportContext::new(&model, InsightsKind::Events);

    for format in [ReportFormat::Markdown, ReportFormat::Html, ReportFormat::Json] {
        let path = dir
            .path()
            .join("nested")
            .join(format!("events.{}", format.extension()));
        generator_for(format)
            .generate(&ctx, &path)
            .expect("report written");
        let content = fs::read_to_string(&path).expect("report readable");
        assert!(content.contains("Avg Events/Type"), "{format}");
    }
}

#[test]
fn markdown_does_not_expand_slots_in_source_or_data() {
    let model = model(InsightsKind::Events, "event_types.json");
    let ctx = ReportContext::new(&model, InsightsKind::Events).with_source("{{cards}}.json");
    let md = MarkdownReporter::new().render(&ctx).expect("markdown renders");

    assert!(md.contains("| **Source** | {{cards}}.json |"));
    assert_eq!(md.matches("| Metric | Value |").count(), 1);
}
