//! Integration smoke tests for `intl_insights`

use intl_insights::get_version;
use intl_insights::insights::{render, RenderOptions};
use intl_insights::models::EventTypeInsights;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn absent_summary_renders() {
    let model = render::<EventTypeInsights>(None, &RenderOptions::default());
    assert_eq!(model.cards.len(), 3);
}
