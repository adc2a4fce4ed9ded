//! University (campus visit) dashboard

use super::metrics::{cell, format_average, pie_chart, ranked_bars, tiles};
use super::{DisplayModel, InsightsView, Palette, Panel, PanelBody, RecordTable, RenderOptions, StatCard};
use crate::core::models::{UniversityInsights, VisitRecord};

const TABLE_HEADERS: [&str; 6] = ["University", "Country", "Visitor", "Type", "Purpose", "Date"];

impl InsightsView for UniversityInsights {
    fn display_model(&self, options: &RenderOptions) -> DisplayModel {
        let cards = vec![
            StatCard::new("Total Universities", self.universities),
            StatCard::new("Total Visits", self.total),
            StatCard::new(
                "Avg Visits/University",
                format_average(self.total, self.universities),
            ),
        ];

        let panels = vec![
            Panel::or_empty(
                "Top 10 Universities by Visits",
                ranked_bars(&self.university_distribution),
                PanelBody::Bars,
                "No university data available",
            ),
            Panel::or_empty(
                "Visit Type Distribution",
                pie_chart(&self.type_distribution, Palette::VISIT_TYPES),
                PanelBody::Pie,
                "No visit type data available",
            ),
            Panel::or_empty(
                "Visit Purposes",
                tiles(&self.purpose_distribution),
                PanelBody::Tiles,
                "No purpose data available",
            ),
            Panel::or_empty(
                "Recent Visits",
                RecordTable::build(&TABLE_HEADERS, &self.recent_visits, |v| visit_row(v, options)),
                PanelBody::Table,
                "No recent visits",
            ),
        ];

        DisplayModel {
            title: "University Insights".to_string(),
            cards,
            panels,
        }
    }
}

fn visit_row(visit: &VisitRecord, options: &RenderOptions) -> Vec<String> {
    vec![
        cell(visit.university_name.as_ref()),
        cell(visit.country.as_ref()),
        cell(visit.visitor_name.as_ref()),
        cell(visit.kind.as_ref()),
        cell(visit.purpose.as_ref()),
        cell(options.date_format.display(visit.date.as_deref()).as_ref()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::insights::DateFormat;

    #[test]
    fn renders_all_four_panels() {
        let summary = UniversityInsights {
            total: 9,
            universities: 2,
            university_distribution: [("Kyoto", 6.0), ("Leiden", 3.0)].into_iter().collect(),
            purpose_distribution: [("Research", 5.0)].into_iter().collect(),
            type_distribution: [("Delegation", 9.0)].into_iter().collect(),
            recent_visits: vec![VisitRecord {
                university_name: Some("Kyoto".into()),
                date: Some("2024-12-01".into()),
                ..VisitRecord::default()
            }],
        };
        let model = summary.display_model(&RenderOptions::with_date_format(DateFormat::Iso));
        assert_eq!(model.panels.len(), 4);
        assert!(model.panels.iter().all(|p| !p.is_empty()));
        assert_eq!(model.card("Avg Visits/University").map(|c| c.value.as_str()), Some("4.5"));

        let Some(Panel { body: PanelBody::Table(table), .. }) = model.panel("Recent Visits") else {
            panic!("expected a table");
        };
        assert_eq!(table.rows[0], ["Kyoto", "-", "-", "-", "-", "2024-12-01"]);
    }
}
