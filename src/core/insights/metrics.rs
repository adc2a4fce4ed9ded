//! Derived values: averages, bar widths, pie shares, cell text

use super::palette::Palette;
use super::{Bar, BarList, PieChart, PieSlice, Tile};
use crate::core::models::Distribution;

/// Placeholder for absent fields
pub const PLACEHOLDER: &str = "-";

/// `total / category_count`, or `None` when there are no categories
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_per_category(total: u64, category_count: u64) -> Option<f64> {
    (category_count > 0).then(|| total as f64 / category_count as f64)
}

/// Display text for the average card: one decimal, or `"0"` with no categories
#[must_use]
pub fn format_average(total: u64, category_count: u64) -> String {
    average_per_category(total, category_count)
        .map_or_else(|| "0".to_string(), |avg| format!("{avg:.1}"))
}

/// Display text for a distribution value: whole numbers without decimals
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Cell text for an optional field; blank values use [`PLACEHOLDER`]
#[must_use]
pub fn cell(value: Option<&String>) -> String {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

/// Bars normalized against the largest value of the list.
///
/// Returns `None` for an empty list. A list whose maximum is zero gets
/// zero-width bars.
#[must_use]
pub fn ranked_bars(distribution: &Distribution) -> Option<BarList> {
    let max = distribution.max_value()?;
    let bars = distribution
        .iter()
        .map(|entry| Bar {
            name: entry.name.clone(),
            value: entry.value,
            width: if max > 0.0 {
                entry.value / max * 100.0
            } else {
                0.0
            },
        })
        .collect();
    Some(BarList { bars })
}

/// Pie slices with `share = value / sum` and a rounded percent label.
///
/// Returns `None` for an empty distribution. When every value is zero all
/// shares are zero.
#[must_use]
pub fn pie_chart(distribution: &Distribution, palette: Palette) -> Option<PieChart> {
    if distribution.is_empty() {
        return None;
    }
    let total = distribution.total();
    let slices = distribution
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let share = if total > 0.0 { entry.value / total } else { 0.0 };
            let percent = round_percent(share);
            PieSlice {
                label: format!("{}: {percent}%", entry.name),
                name: entry.name.clone(),
                value: entry.value,
                share,
                percent,
                color: palette.color_for(index),
            }
        })
        .collect();
    Some(PieChart { total, slices })
}

/// One tile per entry
#[must_use]
pub fn tiles(distribution: &Distribution) -> Option<Vec<Tile>> {
    if distribution.is_empty() {
        return None;
    }
    Some(
        distribution
            .iter()
            .map(|entry| Tile {
                name: entry.name.clone(),
                value: format_value(entry.value),
            })
            .collect(),
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_percent(share: f64) -> u32 {
    // share is within [0, 1]
    (share * 100.0).round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::insights::palette::{ACCENT, PRIMARY, SECONDARY};

    #[test]
    fn average_guards_zero_categories() {
        assert_eq!(average_per_category(10, 0), None);
        assert_eq!(format_average(10, 0), "0");
        assert_eq!(format_average(0, 0), "0");
        assert_eq!(format_average(10, 4), "2.5");
        assert_eq!(format_average(10, 3), "3.3");
        assert_eq!(format_average(0, 5), "0.0");
    }

    #[test]
    fn values_drop_trailing_zeros() {
        assert_eq!(format_value(12.0), "12");
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(1.0 / 3.0), "0.33");
    }

    #[test]
    fn blank_cells_use_placeholder() {
        assert_eq!(cell(None), "-");
        assert_eq!(cell(Some(&"  ".to_string())), "-");
        assert_eq!(cell(Some(&"Physics".to_string())), "Physics");
    }

    #[test]
    fn bars_normalize_to_max() {
        let d: Distribution = [("A", 10.0), ("B", 5.0)].into_iter().collect();
        let bars = ranked_bars(&d).expect("non-empty");
        let widths: Vec<f64> = bars.bars.iter().map(|b| b.width).collect();
        assert_eq!(widths, [100.0, 50.0]);
    }

    #[test]
    fn bars_with_zero_max_have_zero_width() {
        let d: Distribution = [("A", 0.0), ("B", 0.0)].into_iter().collect();
        let bars = ranked_bars(&d).expect("non-empty");
        assert!(bars.bars.iter().all(|b| b.width == 0.0));
        assert!(ranked_bars(&Distribution::default()).is_none());
    }

    #[test]
    fn pie_labels_use_rounded_share() {
        let d: Distribution = [("Talk", 1.0), ("Fair", 2.0)].into_iter().collect();
        let pie = pie_chart(&d, Palette::EVENT_TYPES).expect("non-empty");
        assert_eq!(pie.slices[0].label, "Talk: 33%");
        assert_eq!(pie.slices[1].label, "Fair: 67%");
        assert_eq!(pie.slices[0].color, PRIMARY);
        assert_eq!(pie.slices[1].color, SECONDARY);
    }

    #[test]
    fn pie_colors_wrap() {
        let d: Distribution = (0..8).map(|i| (format!("T{i}"), 1.0)).collect();
        let pie = pie_chart(&d, Palette::VISIT_TYPES).expect("non-empty");
        assert_eq!(pie.slices[5].color, pie.slices[0].color);
        assert_eq!(pie.slices[7].color, ACCENT);
    }

    #[test]
    fn all_zero_pie_has_zero_shares() {
        let d: Distribution = [("A", 0.0)].into_iter().collect();
        let pie = pie_chart(&d, Palette::EVENT_TYPES).expect("non-empty");
        assert_eq!(pie.slices[0].percent, 0);
        assert!(pie.slices[0].share.abs() < f64::EPSILON);
    }

    #[test]
    fn huge_values_still_split_the_pie() {
        let d: Distribution = [("A", 1e308), ("B", 1e308)].into_iter().collect();
        let pie = pie_chart(&d, Palette::EVENT_TYPES).expect("non-empty");
        let percents: Vec<u32> = pie.slices.iter().map(|s| s.percent).collect();
        assert_eq!(percents, [50, 50]);
    }
}
