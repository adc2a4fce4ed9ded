//! Typed data model for provider payloads
//!
//! Every field is optional on the wire. Deserialization is deliberately
//! lenient: absent or `null` values become empty defaults, counts are
//! clamped to non-negative integers, and malformed distribution entries are
//! coerced or dropped (see [`distribution`]).

pub mod distribution;
pub mod records;
pub mod summary;

pub use distribution::{Distribution, DistributionEntry, MAX_VALUE, UNSPECIFIED};
pub use records::{EventRecord, ScholarRecord, VisitRecord};
pub use summary::{
    DepartmentInsights, EventTypeInsights, InsightsKind, InsightsSummary, UniversityInsights,
};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a count: numbers and numeric strings are truncated and
/// clamped at zero; anything else counts as zero.
pub(crate) fn de_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let number = match &raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number
        .filter(|n| n.is_finite() && *n > 0.0)
        // counts beyond u64 are not meaningful for a dashboard
        .map_or(0, |n| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let count = n.trunc() as u64;
            count
        }))
}

/// Deserialize an optional display string. Numbers and booleans are
/// stringified; `null`, arrays and objects become `None`.
pub(crate) fn de_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// Deserialize a record list. `null` or a non-array becomes empty; elements
/// that are not objects are skipped.
pub(crate) fn de_records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    let Value::Array(items) = raw else {
        if !raw.is_null() {
            logger::warn!("Expected a list of records, ignoring {}", type_name(&raw));
        }
        return Ok(Vec::new());
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            logger::warn!("Skipping record #{index}: expected an object, found {}", type_name(&item));
            continue;
        }
        match serde_json::from_value(item) {
            Ok(record) => records.push(record),
            Err(e) => logger::warn!("Skipping record #{index}: {e}"),
        }
    }
    Ok(records)
}

/// JSON type name used in diagnostics
pub(crate) const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
