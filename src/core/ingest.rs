//! Reading payload files into typed summaries

use crate::core::error::{InsightsError, Result};
use crate::core::models::{
    type_name, DepartmentInsights, EventTypeInsights, InsightsKind, InsightsSummary,
    UniversityInsights,
};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Envelope keys the provider may wrap a payload in
const ENVELOPE_KEYS: [&str; 2] = ["stats", "data"];

/// Parse a JSON payload of the given variant.
///
/// A top-level `null` yields the empty summary. An object wrapped in a
/// `stats` or `data` envelope is unwrapped first.
///
/// # Errors
/// Returns an error if the text is not JSON or its top-level value is not an
/// object or `null`.
pub fn parse_payload(kind: InsightsKind, text: &str) -> Result<InsightsSummary> {
    let raw: Value = serde_json::from_str(text)?;
    let raw = unwrap_envelope(raw);

    if raw.is_null() {
        logger::debug!("Empty {kind} payload, rendering defaults");
        return Ok(kind.empty_summary());
    }
    if !raw.is_object() {
        return Err(InsightsError::UnsupportedPayload {
            found: type_name(&raw),
        });
    }

    let summary = match kind {
        InsightsKind::Events => {
            InsightsSummary::Events(serde_json::from_value::<EventTypeInsights>(raw)?)
        }
        InsightsKind::Visits => {
            InsightsSummary::Visits(serde_json::from_value::<UniversityInsights>(raw)?)
        }
        InsightsKind::Departments => {
            InsightsSummary::Departments(serde_json::from_value::<DepartmentInsights>(raw)?)
        }
    };

    let rejected = summary.rejected_entries();
    if rejected > 0 {
        logger::warn!("{rejected} malformed distribution entries were dropped from the {kind} payload");
    }
    Ok(summary)
}

/// Read and parse a payload file.
///
/// # Errors
/// Returns an error if the file cannot be read or [`parse_payload`] fails.
pub fn load_payload(kind: InsightsKind, path: &Path) -> Result<InsightsSummary> {
    logger::info!("Loading {kind} payload from {}", path.display());
    let text = fs::read_to_string(path).map_err(|e| InsightsError::io(path, e))?;
    parse_payload(kind, &text)
}

fn unwrap_envelope(raw: Value) -> Value {
    let Value::Object(mut fields) = raw else {
        return raw;
    };
    for key in ENVELOPE_KEYS {
        if let Some(inner) = fields.remove(key) {
            if inner.is_object() || inner.is_null() {
                logger::debug!("Unwrapping '{key}' envelope");
                return inner;
            }
            fields.insert(key.to_string(), inner);
        }
    }
    Value::Object(fields)
}
