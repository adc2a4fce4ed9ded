//! Category distributions (`name`/`value` pairs)

use super::type_name;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Label used when the provider sends an entry without a usable name
pub const UNSPECIFIED: &str = "Unspecified";

/// One category and its count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionEntry {
    /// Category label
    pub name: String,
    /// Count in `[0, MAX_VALUE]`
    pub value: f64,
}

impl DistributionEntry {
    /// Create an entry, clamping non-finite or negative values to zero and
    /// capping values above [`MAX_VALUE`]
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value: sanitize_value(value),
        }
    }
}

/// Ordered sequence of entries in presentation order.
///
/// Deserializes from any JSON value: arrays are read entry by entry, while
/// `null` or any other shape yields an empty distribution. Entries whose
/// `value` cannot be read as a number are dropped and counted in
/// [`rejected`](Self::rejected).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(from = "Value", into = "Vec<DistributionEntry>")]
pub struct Distribution {
    entries: Vec<DistributionEntry>,
    rejected: usize,
}

impl Distribution {
    /// Build a distribution from already-validated entries
    #[must_use]
    pub const fn new(entries: Vec<DistributionEntry>) -> Self {
        Self {
            entries,
            rejected: 0,
        }
    }

    /// Entries in presentation order
    #[must_use]
    pub fn entries(&self) -> &[DistributionEntry] {
        &self.entries
    }

    /// Iterate entries in presentation order
    pub fn iter(&self) -> std::slice::Iter<'_, DistributionEntry> {
        self.entries.iter()
    }

    /// Number of entries kept
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries were kept
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries dropped while reading the payload
    #[must_use]
    pub const fn rejected(&self) -> usize {
        self.rejected
    }

    /// Sum of all values
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.value).sum()
    }

    /// Largest value, or `None` when empty
    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.entries.iter().map(|e| e.value).reduce(f64::max)
    }
}

impl<'a> IntoIterator for &'a Distribution {
    type Item = &'a DistributionEntry;
    type IntoIter = std::slice::Iter<'a, DistributionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Distribution {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(name, value)| DistributionEntry::new(name, value))
                .collect(),
        )
    }
}

impl From<Distribution> for Vec<DistributionEntry> {
    fn from(distribution: Distribution) -> Self {
        distribution.entries
    }
}

impl From<Value> for Distribution {
    fn from(raw: Value) -> Self {
        let items = match raw {
            Value::Array(items) => items,
            Value::Null => return Self::default(),
            other => {
                logger::warn!(
                    "Expected a distribution list, found {}; treating as empty",
                    type_name(&other)
                );
                return Self::default();
            }
        };

        let mut distribution = Self::default();
        for (index, item) in items.iter().enumerate() {
            match read_entry(item) {
                Ok(entry) => distribution.entries.push(entry),
                Err(reason) => {
                    logger::warn!("Dropping distribution entry #{index}: {reason}");
                    distribution.rejected += 1;
                }
            }
        }
        distribution
    }
}

fn read_entry(item: &Value) -> Result<DistributionEntry, String> {
    let fields: &Map<String, Value> = item
        .as_object()
        .ok_or_else(|| format!("expected an object, found {}", type_name(item)))?;

    let name = fields.get("name").map_or_else(|| UNSPECIFIED.to_string(), read_name);
    let value = match fields.get("value") {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
    .ok_or_else(|| {
        let found = fields.get("value").map_or("nothing", type_name);
        format!("'{name}' has a non-numeric value ({found})")
    })?;

    if value > MAX_VALUE {
        logger::warn!("Capping '{name}' value {value} at {MAX_VALUE}");
    }
    Ok(DistributionEntry::new(name, value))
}

fn read_name(raw: &Value) -> String {
    match raw {
        Value::String(s) if !s.trim().is_empty() => s.clone(),
        Value::String(_) | Value::Null => UNSPECIFIED.to_string(),
        other => other.to_string(),
    }
}

/// Largest count kept as is: the largest integer an `f64` holds exactly.
/// Capping here keeps sums finite, so pie shares stay meaningful.
pub const MAX_VALUE: f64 = 9_007_199_254_740_991.0;

/// Negative and non-finite values display as zero; huge values are capped
fn sanitize_value(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value.min(MAX_VALUE)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(raw: Value) -> Distribution {
        serde_json::from_value(raw).expect("distribution always deserializes")
    }

    #[test]
    fn keeps_order_and_values() {
        let d = parse(json!([
            {"name": "Workshop", "value": 4},
            {"name": "Seminar", "value": 9}
        ]));
        let names: Vec<_> = d.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Workshop", "Seminar"]);
        assert!((d.total() - 13.0).abs() < f64::EPSILON);
        assert_eq!(d.max_value(), Some(9.0));
    }

    #[test]
    fn coerces_numeric_strings() {
        let d = parse(json!([{"name": "Talk", "value": " 12 "}]));
        assert_eq!(d.entries()[0].value, 12.0);
        assert_eq!(d.rejected(), 0);
    }

    #[test]
    fn clamps_negative_values() {
        let d = parse(json!([{"name": "Odd", "value": -3}]));
        assert_eq!(d.entries()[0].value, 0.0);
    }

    #[test]
    fn drops_non_numeric_values() {
        let d = parse(json!([
            {"name": "A", "value": "lots"},
            {"name": "B", "value": null},
            {"name": "C"},
            {"name": "D", "value": true},
            {"name": "E", "value": "NaN"},
            "not an entry",
            {"name": "F", "value": 2}
        ]));
        assert_eq!(d.len(), 1);
        assert_eq!(d.rejected(), 6);
        assert_eq!(d.entries()[0].name, "F");
    }

    #[test]
    fn missing_names_become_unspecified() {
        let d = parse(json!([
            {"value": 1},
            {"name": null, "value": 2},
            {"name": "  ", "value": 3},
            {"name": 2024, "value": 4}
        ]));
        let names: Vec<_> = d.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, [UNSPECIFIED, UNSPECIFIED, UNSPECIFIED, "2024"]);
    }

    #[test]
    fn null_and_wrong_shapes_are_empty() {
        assert!(parse(Value::Null).is_empty());
        assert!(parse(json!({"name": "A", "value": 1})).is_empty());
        assert_eq!(parse(json!([])).max_value(), None);
    }

    #[test]
    fn serializes_as_plain_list() {
        let d: Distribution = [("A", 1.0), ("B", 2.0)].into_iter().collect();
        let out = serde_json::to_value(&d).expect("serializes");
        assert_eq!(out, json!([{"name": "A", "value": 1.0}, {"name": "B", "value": 2.0}]));
    }

    #[test]
    fn huge_values_are_capped_and_sum_stays_finite() {
        let d = parse(json!([
            {"name": "A", "value": 1e308},
            {"name": "B", "value": 1e308}
        ]));
        assert_eq!(d.len(), 2);
        assert_eq!(d.max_value(), Some(MAX_VALUE));
        assert!(d.total().is_finite());
        assert_eq!(d.rejected(), 0);
    }
}
