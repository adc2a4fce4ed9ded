//! Summary command handler
//!
//! Prints the stat cards and a one-line headline per panel.

use super::load_model;
use intl_insights::config::Config;
use intl_insights::insights::metrics::format_value;
use intl_insights::insights::{DisplayModel, Panel, PanelBody};
use intl_insights::models::InsightsKind;
use std::fmt::Write;
use std::path::Path;

/// Run the summary command.
pub fn run(input_file: &Path, kind: InsightsKind, config: &Config) -> Result<(), String> {
    let model = load_model(input_file, kind, config)?;
    print!("{}", format_summary(&model));
    Ok(())
}

/// Plain-text summary of a display model
fn format_summary(model: &DisplayModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== {} ===", model.title);
    for card in &model.cards {
        let _ = writeln!(out, "{}: {}", card.label, card.value);
    }
    out.push('\n');
    for panel in &model.panels {
        let _ = writeln!(out, "{}: {}", panel.title, headline(panel));
    }
    out
}

fn headline(panel: &Panel) -> String {
    match &panel.body {
        PanelBody::Pie(pie) => {
            let largest = pie
                .slices
                .iter()
                .reduce(|best, slice| if slice.value > best.value { slice } else { best });
            match largest {
                Some(slice) => format!("{} categories, largest {}", pie.slices.len(), slice.label),
                None => "no categories".to_string(),
            }
        }
        PanelBody::Bars(list) => list.bars.first().map_or_else(
            || "no entries".to_string(),
            |top| format!("{} entries, top {} ({})", list.bars.len(), top.name, format_value(top.value)),
        ),
        PanelBody::Tiles(tiles) => {
            let items: Vec<String> = tiles.iter().map(|t| format!("{} {}", t.name, t.value)).collect();
            items.join(", ")
        }
        PanelBody::Table(table) => format!("{} records", table.rows.len()),
        PanelBody::Empty { message } => message.clone(),
    }
}
