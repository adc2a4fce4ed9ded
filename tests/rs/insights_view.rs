//! Integration tests for rendering payloads into display models

use intl_insights::ingest::{load_payload, parse_payload};
use intl_insights::insights::{
    render, DateFormat, DisplayModel, Panel, PanelBody, RenderOptions, PLACEHOLDER,
};
use intl_insights::models::{
    DepartmentInsights, EventTypeInsights, InsightsKind, InsightsSummary, UniversityInsights,
    UNSPECIFIED,
};
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load(kind: InsightsKind, name: &str) -> DisplayModel {
    load_payload(kind, &fixture(name))
        .expect("fixture loads")
        .display_model(&RenderOptions::default())
}

fn body<'a>(model: &'a DisplayModel, title: &str) -> &'a PanelBody {
    &model
        .panel(title)
        .unwrap_or_else(|| panic!("missing panel {title}"))
        .body
}

#[test]
fn absent_summaries_render_placeholders_everywhere() {
    let options = RenderOptions::default();
    let models = [
        render::<EventTypeInsights>(None, &options),
        render::<UniversityInsights>(None, &options),
        render::<DepartmentInsights>(None, &options),
    ];
    for model in models {
        assert_eq!(model.cards.len(), 3, "{}", model.title);
        assert!(model.cards.iter().all(|c| c.value == "0"));
        assert!(model.panels.iter().all(Panel::is_empty), "{}", model.title);
    }
}

#[test]
fn event_fixture_renders_cards_and_charts() {
    let model = load(InsightsKind::Events, "event_types.json");

    assert_eq!(model.card("Total Event Types").map(|c| c.value.as_str()), Some("4"));
    assert_eq!(model.card("Total Events").map(|c| c.value.as_str()), Some("42"));
    assert_eq!(model.card("Avg Events/Type").map(|c| c.value.as_str()), Some("10.5"));

    let PanelBody::Pie(pie) = body(&model, "Event Distribution by Type") else {
        panic!("expected a pie");
    };
    let percent_sum: u32 = pie.slices.iter().map(|s| s.percent).sum();
    let tolerance = u32::try_from(pie.slices.len()).expect("few slices");
    assert!(percent_sum.abs_diff(100) <= tolerance);
    assert_eq!(pie.slices[0].label, "Workshop: 36%");

    let PanelBody::Bars(bars) = body(&model, "Top 10 Departments by Events") else {
        panic!("expected bars");
    };
    assert_eq!(bars.bars[0].width, 100.0);
    assert_eq!(bars.bars[1].width, 50.0);
    assert_eq!(bars.bars[2].name, UNSPECIFIED);
}

#[test]
fn missing_record_fields_show_placeholder() {
    let model = load(InsightsKind::Events, "event_types.json");
    let PanelBody::Table(table) = body(&model, "Recent Events") else {
        panic!("expected a table");
    };
    assert_eq!(table.headers, ["Title", "Type", "Department", "University/Country", "Date"]);
    assert_eq!(
        table.rows[1],
        ["Exchange Fair", "Cultural Festival", PLACEHOLDER, "Germany", "04/02/2024"]
    );
}

#[test]
fn visit_fixture_coerces_and_drops_entries() {
    let summary = load_payload(InsightsKind::Visits, &fixture("university_visits.json"))
        .expect("fixture loads");
    assert_eq!(summary.rejected_entries(), 1);

    let model = summary.display_model(&RenderOptions::with_date_format(DateFormat::DayMonthYear));
    let PanelBody::Tiles(tiles) = body(&model, "Visit Purposes") else {
        panic!("expected tiles");
    };
    let names: Vec<_> = tiles.iter().map(|t| (t.name.as_str(), t.value.as_str())).collect();
    assert_eq!(names, [("Research Collaboration", "10"), ("Student Exchange", "5")]);

    let PanelBody::Table(table) = body(&model, "Recent Visits") else {
        panic!("expected a table");
    };
    assert_eq!(table.rows[0][5], "20/06/2024");
    assert_eq!(model.card("Avg Visits/University").map(|c| c.value.as_str()), Some("6.0"));
}

#[test]
fn department_fixture_unwraps_data_envelope() {
    let model = load(InsightsKind::Departments, "department_scholars.json");
    assert_eq!(model.title, "Department Insights");
    assert_eq!(model.card("Avg Scholars/Department").map(|c| c.value.as_str()), Some("3.5"));

    let PanelBody::Pie(pie) = body(&model, "Scholar Categories") else {
        panic!("expected a pie");
    };
    assert_eq!(pie.slices[1].color.name, "secondary");

    let PanelBody::Tiles(tiles) = body(&model, "Scholar Status Distribution") else {
        panic!("expected tiles");
    };
    assert_eq!(tiles.len(), 2);
}

#[test]
fn palette_wraps_for_many_categories() {
    let entries: Vec<String> = (0..7)
        .map(|i| format!(r#"{{"name": "Type {i}", "value": 1}}"#))
        .collect();
    let text = format!(r#"{{"eventTypeDistribution": [{}]}}"#, entries.join(","));
    let model = parse_payload(InsightsKind::Events, &text)
        .expect("payload")
        .display_model(&RenderOptions::default());

    let PanelBody::Pie(pie) = body(&model, "Event Distribution by Type") else {
        panic!("expected a pie");
    };
    assert_eq!(pie.slices[6].color, pie.slices[0].color);
}

#[test]
fn rendering_is_idempotent() {
    let summary = load_payload(InsightsKind::Visits, &fixture("university_visits.json"))
        .expect("fixture loads");
    let options = RenderOptions::default();
    assert_eq!(summary.display_model(&options), summary.display_model(&options));
}

#[test]
fn zero_categories_average_displays_zero() {
    let InsightsSummary::Visits(summary) =
        parse_payload(InsightsKind::Visits, r#"{"total": 12, "universities": 0}"#).expect("ok")
    else {
        panic!("wrong variant");
    };
    let model = render(Some(&summary), &RenderOptions::default());
    assert_eq!(model.card("Avg Visits/University").map(|c| c.value.as_str()), Some("0"));
}
