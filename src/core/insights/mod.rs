//! Insights view: a pure transform from a payload to a display model
//!
//! Each dashboard variant implements [`InsightsView`]. The resulting
//! [`DisplayModel`] is backend-neutral: report writers in
//! [`crate::core::report`] turn it into Markdown, HTML or JSON.
//!
//! Rendering never fails. Absent payloads render as their empty default,
//! empty lists render a placeholder message, and divisions are guarded.

pub mod dates;
mod departments;
mod events;
pub mod metrics;
pub mod palette;
mod visits;

pub use dates::{DateFormat, INVALID_DATE};
pub use metrics::PLACEHOLDER;
pub use palette::{Color, Palette};

use crate::core::models::InsightsSummary;
use serde::Serialize;

/// Options that affect presentation but not content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// How record dates are displayed
    pub date_format: DateFormat,
}

impl RenderOptions {
    /// Options with the given date format
    #[must_use]
    pub const fn with_date_format(date_format: DateFormat) -> Self {
        Self { date_format }
    }
}

/// Backend-neutral rendering of one dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayModel {
    /// Dashboard title
    pub title: String,
    /// Headline stat cards (always three)
    pub cards: Vec<StatCard>,
    /// Chart, list and table panels in display order
    pub panels: Vec<Panel>,
}

impl DisplayModel {
    /// Look up a card by its label
    #[must_use]
    pub fn card(&self, label: &str) -> Option<&StatCard> {
        self.cards.iter().find(|c| c.label == label)
    }

    /// Look up a panel by its title
    #[must_use]
    pub fn panel(&self, title: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.title == title)
    }
}

/// A headline number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    /// Card caption
    pub label: String,
    /// Display text of the value
    pub value: String,
}

impl StatCard {
    fn new(label: &str, value: impl ToString) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// A titled section of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    /// Section heading
    pub title: String,
    /// Section content
    pub body: PanelBody,
}

impl Panel {
    /// Build a panel, falling back to `empty_message` when there is no content
    fn or_empty<T>(
        title: &str,
        content: Option<T>,
        wrap: impl FnOnce(T) -> PanelBody,
        empty_message: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            body: content.map_or_else(
                || PanelBody::Empty {
                    message: empty_message.to_string(),
                },
                wrap,
            ),
        }
    }

    /// Whether this panel shows its placeholder
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.body, PanelBody::Empty { .. })
    }
}

/// What a panel shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum PanelBody {
    /// Pie chart with percentage labels
    Pie(PieChart),
    /// Ranked progress bars
    Bars(BarList),
    /// Name/value tiles
    Tiles(Vec<Tile>),
    /// Recent-records table
    Table(RecordTable),
    /// Placeholder shown when there is nothing to display
    Empty {
        /// Placeholder text
        message: String,
    },
}

/// Pie chart data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    /// Sum of all slice values
    pub total: f64,
    /// Slices in input order
    pub slices: Vec<PieSlice>,
}

/// One pie slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    /// Category name
    pub name: String,
    /// Category count
    pub value: f64,
    /// Fraction of the pie total, in `[0, 1]`
    pub share: f64,
    /// `round(share * 100)`
    pub percent: u32,
    /// `"{name}: {percent}%"`
    pub label: String,
    /// Palette color by position
    pub color: Color,
}

/// Ranked bar list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarList {
    /// Bars in input order
    pub bars: Vec<Bar>,
}

/// One progress bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    /// Category name
    pub name: String,
    /// Category count
    pub value: f64,
    /// Width in percent of the largest value, in `[0, 100]`
    pub width: f64,
}

/// Name/value tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    /// Category name
    pub name: String,
    /// Display value
    pub value: String,
}

/// Recent-records table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordTable {
    /// Column headings
    pub headers: Vec<String>,
    /// One row per record, one cell per heading
    pub rows: Vec<Vec<String>>,
}

impl RecordTable {
    fn build<R>(headers: &[&str], records: &[R], row: impl Fn(&R) -> Vec<String>) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        Some(Self {
            headers: headers.iter().map(ToString::to_string).collect(),
            rows: records.iter().map(row).collect(),
        })
    }
}

/// A payload that can be rendered as a dashboard
pub trait InsightsView: Default {
    /// Build the display model for this payload
    fn display_model(&self, options: &RenderOptions) -> DisplayModel;
}

/// Render a payload that may be absent.
///
/// `None` renders the variant's empty default: zero counts and a
/// placeholder in every panel.
#[must_use]
pub fn render<S: InsightsView>(summary: Option<&S>, options: &RenderOptions) -> DisplayModel {
    match summary {
        Some(summary) => summary.display_model(options),
        None => S::default().display_model(options),
    }
}

impl InsightsSummary {
    /// Render whichever variant this is
    #[must_use]
    pub fn display_model(&self, options: &RenderOptions) -> DisplayModel {
        match self {
            Self::Events(s) => s.display_model(options),
            Self::Visits(s) => s.display_model(options),
            Self::Departments(s) => s.display_model(options),
        }
    }
}
