//! Integration tests for logger behavior.

use logger::{current_level, debug, error, info, set_level, set_level_from_str, warn, Level};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
    assert_eq!(current_level(), Level::Debug);
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[test]
fn malformed_payload_only_warns() {
    set_level(Level::Warn);
    let summary = intl_insights::ingest::parse_payload(
        intl_insights::models::InsightsKind::Events,
        r#"{"eventTypeDistribution": [{"name": "Talk", "value": "lots"}]}"#,
    )
    .expect("malformed entries are not an error");
    assert_eq!(summary.rejected_entries(), 1);
}
