//! Markdown report generator
//!
//! Renders every panel as plain Markdown: charts become tables with a text
//! bar, so reports read well in GitHub, GitLab and VS Code without scripts.

use crate::core::error::Result;
use crate::core::insights::metrics::format_value;
use crate::core::insights::{BarList, Panel, PanelBody, PieChart, RecordTable, StatCard, Tile};
use crate::core::report::{ReportContext, ReportGenerator};
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/insights.md");

/// Cells in a full-width text bar
const BAR_CELLS: usize = 20;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report by filling the template's `{{key}}` slots
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let panels: String = ctx.model.panels.iter().map(Self::panel_section).collect();
        let values = [
            ("title", escape_cell(&ctx.model.title)),
            ("kind", ctx.kind.as_str().to_string()),
            ("source", escape_cell(ctx.source_name())),
            ("date_format", ctx.date_format.to_string()),
            ("cards", Self::cards_table(&ctx.model.cards)),
            ("panels", panels),
        ];
        fill_template(MARKDOWN_TEMPLATE, &values)
    }

    fn cards_table(cards: &[StatCard]) -> String {
        let mut table = String::from("| Metric | Value |\n|---|---|\n");
        for card in cards {
            let _ = writeln!(table, "| {} | {} |", escape_cell(&card.label), card.value);
        }
        table
    }

    fn panel_section(panel: &Panel) -> String {
        let body = match &panel.body {
            PanelBody::Pie(pie) => Self::pie_table(pie),
            PanelBody::Bars(bars) => Self::bar_table(bars),
            PanelBody::Tiles(tiles) => Self::tile_list(tiles),
            PanelBody::Table(table) => Self::record_table(table),
            PanelBody::Empty { message } => format!("_{message}_\n"),
        };
        format!("\n## {}\n\n{body}", escape_cell(&panel.title))
    }

    fn pie_table(pie: &PieChart) -> String {
        let mut table = String::from("| Category | Count | Share | Label |\n|---|---:|---:|---|\n");
        for slice in &pie.slices {
            let _ = writeln!(
                table,
                "| {} | {} | {}% | {} |",
                escape_cell(&slice.name),
                format_value(slice.value),
                slice.percent,
                escape_cell(&slice.label)
            );
        }
        table
    }

    fn bar_table(bars: &BarList) -> String {
        let mut table = String::from("| Name | Count | |\n|---|---:|---|\n");
        for bar in &bars.bars {
            let _ = writeln!(
                table,
                "| {} | {} | `{}` |",
                escape_cell(&bar.name),
                format_value(bar.value),
                text_bar(bar.width)
            );
        }
        table
    }

    fn tile_list(tiles: &[Tile]) -> String {
        let mut list = String::new();
        for tile in tiles {
            let _ = writeln!(list, "- **{}**: {}", escape_cell(&tile.name), tile.value);
        }
        list
    }

    fn record_table(table: &RecordTable) -> String {
        let mut out = String::new();
        let headers: Vec<String> = table.headers.iter().map(|h| escape_cell(h)).collect();
        let _ = writeln!(out, "| {} |", headers.join(" | "));
        let _ = writeln!(out, "|{}", "---|".repeat(headers.len()));
        for row in &table.rows {
            let cells: Vec<String> = row.iter().map(|c| escape_cell(c)).collect();
            let _ = writeln!(out, "| {} |", cells.join(" | "));
        }
        out
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String> {
        Ok(self.render_template(ctx))
    }
}

/// Substitute `{{key}}` slots in one pass; inserted values are never rescanned.
/// Unknown slots are left as written.
fn fill_template(template: &str, values: &[(&str, String)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let slot = after.find("}}").and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (value, end))
        });
        match slot {
            Some((value, end)) => {
                output.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                output.push_str("{{");
                rest = after;
            }
        }
    }
    output.push_str(rest);
    output
}

/// Escape text for use inside a Markdown table cell
fn escape_cell(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('|', "\\|")
        .replace(['\r', '\n'], " ")
}

/// Fixed-width text bar for a width in percent
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn text_bar(width: f64) -> String {
    let filled = ((width / 100.0) * BAR_CELLS as f64).round().clamp(0.0, BAR_CELLS as f64) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_slots_without_rescanning_values() {
        let values = [("a", "{{b}}".to_string()), ("b", "B".to_string())];
        assert_eq!(fill_template("<{{a}}|{{b}}|{{c}}>", &values), "<{{b}}|B|{{c}}>");
        assert_eq!(fill_template("open {{ end", &values), "open {{ end");
    }

    #[test]
    fn escapes_pipes_and_newlines() {
        assert_eq!(escape_cell("A|B\nC"), "A\\|B C");
    }

    #[test]
    fn text_bar_scales_to_twenty_cells() {
        assert_eq!(text_bar(100.0).chars().filter(|c| *c == '█').count(), 20);
        assert_eq!(text_bar(50.0).chars().filter(|c| *c == '█').count(), 10);
        assert_eq!(text_bar(0.0).chars().filter(|c| *c == '░').count(), 20);
    }
}
