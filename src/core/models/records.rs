//! Recent-record rows shown beneath the charts

use super::de_text;
use serde::{Deserialize, Serialize};

/// A recent event (event type dashboard)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventRecord {
    /// Event title
    #[serde(deserialize_with = "de_text")]
    pub title: Option<String>,
    /// Event type
    #[serde(rename = "type", deserialize_with = "de_text")]
    pub kind: Option<String>,
    /// Organizing department
    #[serde(deserialize_with = "de_text")]
    pub department: Option<String>,
    /// Partner university and/or country
    #[serde(deserialize_with = "de_text")]
    pub university_country: Option<String>,
    /// ISO-8601 date string, formatted at render time
    #[serde(deserialize_with = "de_text")]
    pub date: Option<String>,
}

/// A recent campus visit (university dashboard)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisitRecord {
    /// Visiting university
    #[serde(deserialize_with = "de_text")]
    pub university_name: Option<String>,
    /// University country
    #[serde(deserialize_with = "de_text")]
    pub country: Option<String>,
    /// Visitor name
    #[serde(deserialize_with = "de_text")]
    pub visitor_name: Option<String>,
    /// Visit type
    #[serde(rename = "type", deserialize_with = "de_text")]
    pub kind: Option<String>,
    /// Purpose of the visit
    #[serde(deserialize_with = "de_text")]
    pub purpose: Option<String>,
    /// ISO-8601 date string
    #[serde(deserialize_with = "de_text")]
    pub date: Option<String>,
}

/// A recent scholar-in-residence (department dashboard)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScholarRecord {
    /// Scholar name
    #[serde(deserialize_with = "de_text")]
    pub scholar_name: Option<String>,
    /// Home country
    #[serde(deserialize_with = "de_text")]
    pub country: Option<String>,
    /// Home university
    #[serde(deserialize_with = "de_text")]
    pub university: Option<String>,
    /// Hosting department
    #[serde(deserialize_with = "de_text")]
    pub department: Option<String>,
    /// Residency start, ISO-8601
    #[serde(deserialize_with = "de_text")]
    pub from_date: Option<String>,
    /// Residency end, ISO-8601
    #[serde(deserialize_with = "de_text")]
    pub to_date: Option<String>,
    /// `active` or `expired`
    #[serde(deserialize_with = "de_text")]
    pub record_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_uses_wire_names() {
        let record: EventRecord = serde_json::from_value(json!({
            "title": "Global Week",
            "type": "Festival",
            "universityCountry": "Japan",
            "date": "2024-03-05T00:00:00.000Z",
            "_id": "65f0"
        }))
        .expect("valid record");
        assert_eq!(record.kind.as_deref(), Some("Festival"));
        assert_eq!(record.university_country.as_deref(), Some("Japan"));
        assert_eq!(record.department, None);
    }

    #[test]
    fn scalar_fields_are_stringified() {
        let record: VisitRecord = serde_json::from_value(json!({
            "universityName": "Kyoto University",
            "visitorName": null,
            "purpose": 42
        }))
        .expect("valid record");
        assert_eq!(record.visitor_name, None);
        assert_eq!(record.purpose.as_deref(), Some("42"));
    }
}
