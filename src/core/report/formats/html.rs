//! HTML report generator
//!
//! Produces a self-contained page with embedded CSS. Pie charts are drawn
//! with a CSS `conic-gradient`, bars with width-styled divs. All text goes
//! through askama's HTML escaping.

use crate::core::error::Result;
use crate::core::insights::metrics::format_value;
use crate::core::insights::{Panel, PanelBody, PieChart, StatCard};
use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;

/// Page template
#[derive(Template)]
#[template(path = "insights.html")]
struct InsightsPage<'a> {
    title: &'a str,
    kind: &'a str,
    source: &'a str,
    date_format: String,
    cards: &'a [StatCard],
    panels: Vec<PanelView>,
}

/// A panel flattened into template-friendly fields
struct PanelView {
    title: String,
    kind: &'static str,
    message: String,
    gradient: String,
    slices: Vec<SliceView>,
    bars: Vec<BarView>,
    tiles: Vec<(String, String)>,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

struct SliceView {
    label: String,
    value: String,
    color: &'static str,
}

struct BarView {
    name: String,
    value: String,
    width: String,
}

impl PanelView {
    fn empty(title: &str, kind: &'static str) -> Self {
        Self {
            title: title.to_string(),
            kind,
            message: String::new(),
            gradient: String::new(),
            slices: Vec::new(),
            bars: Vec::new(),
            tiles: Vec::new(),
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    fn from_panel(panel: &Panel) -> Self {
        match &panel.body {
            PanelBody::Pie(pie) => Self {
                gradient: conic_gradient(pie),
                slices: pie
                    .slices
                    .iter()
                    .map(|s| SliceView {
                        label: s.label.clone(),
                        value: format_value(s.value),
                        color: s.color.hex,
                    })
                    .collect(),
                ..Self::empty(&panel.title, "pie")
            },
            PanelBody::Bars(list) => Self {
                bars: list
                    .bars
                    .iter()
                    .map(|b| BarView {
                        name: b.name.clone(),
                        value: format_value(b.value),
                        width: format!("{:.1}", b.width),
                    })
                    .collect(),
                ..Self::empty(&panel.title, "bars")
            },
            PanelBody::Tiles(tiles) => Self {
                tiles: tiles.iter().map(|t| (t.name.clone(), t.value.clone())).collect(),
                ..Self::empty(&panel.title, "tiles")
            },
            PanelBody::Table(table) => Self {
                headers: table.headers.clone(),
                rows: table.rows.clone(),
                ..Self::empty(&panel.title, "table")
            },
            PanelBody::Empty { message } => Self {
                message: message.clone(),
                ..Self::empty(&panel.title, "empty")
            },
        }
    }
}

/// CSS gradient stops for a pie; an all-zero pie is drawn as a gray disc
fn conic_gradient(pie: &PieChart) -> String {
    if pie.total <= 0.0 {
        return "conic-gradient(#e5e7eb 0% 100%)".to_string();
    }
    let mut start = 0.0;
    let stops: Vec<String> = pie
        .slices
        .iter()
        .map(|slice| {
            let end = (start + slice.share * 100.0).min(100.0);
            let stop = format!("{} {start:.2}% {end:.2}%", slice.color.hex);
            start = end;
            stop
        })
        .collect();
    format!("conic-gradient({})", stops.join(", "))
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String> {
        let page = InsightsPage {
            title: &ctx.model.title,
            kind: ctx.kind.as_str(),
            source: ctx.source_name(),
            date_format: ctx.date_format.to_string(),
            cards: &ctx.model.cards,
            panels: ctx.model.panels.iter().map(PanelView::from_panel).collect(),
        };
        Ok(page.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::insights::palette::{PRIMARY, SECONDARY};
    use crate::core::insights::PieSlice;

    fn slice(name: &str, share: f64, color: crate::core::insights::Color) -> PieSlice {
        PieSlice {
            name: name.to_string(),
            value: share * 4.0,
            share,
            percent: 0,
            label: String::new(),
            color,
        }
    }

    #[test]
    fn gradient_stops_are_cumulative() {
        let pie = PieChart {
            total: 4.0,
            slices: vec![slice("A", 0.25, PRIMARY), slice("B", 0.75, SECONDARY)],
        };
        assert_eq!(
            conic_gradient(&pie),
            "conic-gradient(#570df8 0.00% 25.00%, #f000b8 25.00% 100.00%)"
        );
    }

    #[test]
    fn zero_pie_is_gray() {
        let pie = PieChart {
            total: 0.0,
            slices: vec![slice("A", 0.0, PRIMARY)],
        };
        assert!(conic_gradient(&pie).contains("#e5e7eb"));
    }
}
