//! Event type dashboard

use super::metrics::{cell, format_average, pie_chart, ranked_bars};
use super::{DisplayModel, InsightsView, Palette, Panel, PanelBody, RecordTable, RenderOptions, StatCard};
use crate::core::models::{EventRecord, EventTypeInsights};

const TABLE_HEADERS: [&str; 5] = ["Title", "Type", "Department", "University/Country", "Date"];

impl InsightsView for EventTypeInsights {
    fn display_model(&self, options: &RenderOptions) -> DisplayModel {
        let cards = vec![
            StatCard::new("Total Event Types", self.event_types),
            StatCard::new("Total Events", self.total),
            StatCard::new("Avg Events/Type", format_average(self.total, self.event_types)),
        ];

        let panels = vec![
            Panel::or_empty(
                "Event Distribution by Type",
                pie_chart(&self.event_type_distribution, Palette::EVENT_TYPES),
                PanelBody::Pie,
                "No event type data available",
            ),
            Panel::or_empty(
                "Top 10 Departments by Events",
                ranked_bars(&self.department_distribution),
                PanelBody::Bars,
                "No department data available",
            ),
            Panel::or_empty(
                "Recent Events",
                RecordTable::build(&TABLE_HEADERS, &self.recent_events, |e| event_row(e, options)),
                PanelBody::Table,
                "No recent events",
            ),
        ];

        DisplayModel {
            title: "Event Type Insights".to_string(),
            cards,
            panels,
        }
    }
}

fn event_row(event: &EventRecord, options: &RenderOptions) -> Vec<String> {
    vec![
        cell(event.title.as_ref()),
        cell(event.kind.as_ref()),
        cell(event.department.as_ref()),
        cell(event.university_country.as_ref()),
        cell(options.date_format.display(event.date.as_deref()).as_ref()),
    ]
}
