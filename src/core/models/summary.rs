//! Aggregate payloads, one per dashboard variant

use super::records::{EventRecord, ScholarRecord, VisitRecord};
use super::{de_count, de_records, Distribution};
use crate::core::error::InsightsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payload for the event type dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventTypeInsights {
    /// Number of active events
    #[serde(deserialize_with = "de_count")]
    pub total: u64,
    /// Number of distinct event types
    #[serde(deserialize_with = "de_count")]
    pub event_types: u64,
    /// Events per type
    pub event_type_distribution: Distribution,
    /// Events per department, top first
    pub department_distribution: Distribution,
    /// Most recent events
    #[serde(deserialize_with = "de_records")]
    pub recent_events: Vec<EventRecord>,
}

/// Payload for the university (campus visit) dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UniversityInsights {
    /// Number of active visits
    #[serde(deserialize_with = "de_count")]
    pub total: u64,
    /// Number of distinct universities
    #[serde(deserialize_with = "de_count")]
    pub universities: u64,
    /// Visits per university, top first
    pub university_distribution: Distribution,
    /// Visits per purpose
    pub purpose_distribution: Distribution,
    /// Visits per visit type
    pub type_distribution: Distribution,
    /// Most recent visits
    #[serde(deserialize_with = "de_records")]
    pub recent_visits: Vec<VisitRecord>,
}

/// Payload for the department (scholars in residence) dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DepartmentInsights {
    /// Number of active scholars
    #[serde(deserialize_with = "de_count")]
    pub total: u64,
    /// Number of distinct departments
    #[serde(deserialize_with = "de_count")]
    pub departments: u64,
    /// Scholars per department, top first
    pub department_distribution: Distribution,
    /// Scholars per category
    pub category_distribution: Distribution,
    /// Scholars per record status (active / expired)
    pub active_scholars: Distribution,
    /// Most recent scholars
    #[serde(deserialize_with = "de_records")]
    pub recent_scholars: Vec<ScholarRecord>,
}

/// Dashboard variant selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsightsKind {
    /// Event type insights
    Events,
    /// University / campus visit insights
    Visits,
    /// Department / scholar insights
    Departments,
}

impl InsightsKind {
    /// All variants, in menu order
    pub const ALL: [Self; 3] = [Self::Events, Self::Visits, Self::Departments];

    /// Short name used in file names and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Events => "events",
            Self::Visits => "visits",
            Self::Departments => "departments",
        }
    }

    /// An empty payload of this variant
    #[must_use]
    pub fn empty_summary(self) -> InsightsSummary {
        match self {
            Self::Events => InsightsSummary::Events(EventTypeInsights::default()),
            Self::Visits => InsightsSummary::Visits(UniversityInsights::default()),
            Self::Departments => InsightsSummary::Departments(DepartmentInsights::default()),
        }
    }
}

impl FromStr for InsightsKind {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "events" | "event" | "event-types" => Ok(Self::Events),
            "visits" | "visit" | "universities" | "campus-visits" => Ok(Self::Visits),
            "departments" | "department" | "scholars" => Ok(Self::Departments),
            _ => Err(InsightsError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for InsightsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payload of any variant
#[derive(Debug, Clone, PartialEq)]
pub enum InsightsSummary {
    /// Event type payload
    Events(EventTypeInsights),
    /// University payload
    Visits(UniversityInsights),
    /// Department payload
    Departments(DepartmentInsights),
}

impl InsightsSummary {
    /// Variant of this payload
    #[must_use]
    pub const fn kind(&self) -> InsightsKind {
        match self {
            Self::Events(_) => InsightsKind::Events,
            Self::Visits(_) => InsightsKind::Visits,
            Self::Departments(_) => InsightsKind::Departments,
        }
    }

    /// Distribution entries dropped while reading this payload
    #[must_use]
    pub fn rejected_entries(&self) -> usize {
        match self {
            Self::Events(s) => {
                s.event_type_distribution.rejected() + s.department_distribution.rejected()
            }
            Self::Visits(s) => {
                s.university_distribution.rejected()
                    + s.purpose_distribution.rejected()
                    + s.type_distribution.rejected()
            }
            Self::Departments(s) => {
                s.department_distribution.rejected()
                    + s.category_distribution.rejected()
                    + s.active_scholars.rejected()
            }
        }
    }
}
