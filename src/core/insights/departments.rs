//! Department (scholars in residence) dashboard

use super::metrics::{cell, format_average, pie_chart, ranked_bars, tiles};
use super::{DisplayModel, InsightsView, Palette, Panel, PanelBody, RecordTable, RenderOptions, StatCard};
use crate::core::models::{DepartmentInsights, ScholarRecord};

const TABLE_HEADERS: [&str; 7] = [
    "Scholar Name",
    "Country",
    "University",
    "Department",
    "From Date",
    "To Date",
    "Status",
];

impl InsightsView for DepartmentInsights {
    fn display_model(&self, options: &RenderOptions) -> DisplayModel {
        let cards = vec![
            StatCard::new("Total Departments", self.departments),
            StatCard::new("Total Scholars", self.total),
            StatCard::new(
                "Avg Scholars/Department",
                format_average(self.total, self.departments),
            ),
        ];

        let panels = vec![
            Panel::or_empty(
                "Top 10 Departments by Scholars",
                ranked_bars(&self.department_distribution),
                PanelBody::Bars,
                "No department data available",
            ),
            Panel::or_empty(
                "Scholar Categories",
                pie_chart(&self.category_distribution, Palette::SCHOLAR_CATEGORIES),
                PanelBody::Pie,
                "No category data available",
            ),
            Panel::or_empty(
                "Scholar Status Distribution",
                tiles(&self.active_scholars),
                PanelBody::Tiles,
                "No status data available",
            ),
            Panel::or_empty(
                "Recent Scholars",
                RecordTable::build(&TABLE_HEADERS, &self.recent_scholars, |s| {
                    scholar_row(s, options)
                }),
                PanelBody::Table,
                "No recent scholars",
            ),
        ];

        DisplayModel {
            title: "Department Insights".to_string(),
            cards,
            panels,
        }
    }
}

fn scholar_row(scholar: &ScholarRecord, options: &RenderOptions) -> Vec<String> {
    let date = |raw: Option<&String>| cell(options.date_format.display(raw.map(String::as_str)).as_ref());
    vec![
        cell(scholar.scholar_name.as_ref()),
        cell(scholar.country.as_ref()),
        cell(scholar.university.as_ref()),
        cell(scholar.department.as_ref()),
        date(scholar.from_date.as_ref()),
        date(scholar.to_date.as_ref()),
        cell(scholar.record_status.as_ref()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::insights::INVALID_DATE;

    #[test]
    fn scholar_dates_use_format_and_markers() {
        let summary = DepartmentInsights {
            recent_scholars: vec![ScholarRecord {
                scholar_name: Some("Dr. Ada Osei".into()),
                from_date: Some("2024-01-15T00:00:00Z".into()),
                to_date: Some("soon".into()),
                record_status: Some("active".into()),
                ..ScholarRecord::default()
            }],
            ..DepartmentInsights::default()
        };
        let model = summary.display_model(&RenderOptions::default());
        let Some(Panel { body: PanelBody::Table(table), .. }) = model.panel("Recent Scholars") else {
            panic!("expected a table");
        };
        assert_eq!(
            table.rows[0],
            ["Dr. Ada Osei", "-", "-", "-", "01/15/2024", INVALID_DATE, "active"]
        );
    }

    #[test]
    fn empty_payload_has_zero_cards() {
        let model = DepartmentInsights::default().display_model(&RenderOptions::default());
        assert!(model.cards.iter().all(|c| c.value == "0"));
        assert!(model.panels.iter().all(Panel::is_empty));
    }

    #[test]
    fn status_tiles_use_distribution_heading() {
        let summary = DepartmentInsights {
            active_scholars: [("active", 3.0), ("expired", 1.0)].into_iter().collect(),
            ..DepartmentInsights::default()
        };
        let model = summary.display_model(&RenderOptions::default());
        let titles: Vec<_> = model.panels.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Top 10 Departments by Scholars",
                "Scholar Categories",
                "Scholar Status Distribution",
                "Recent Scholars"
            ]
        );
        assert!(model.panel("Scholar Status Distribution").is_some_and(|p| !p.is_empty()));
    }
}
