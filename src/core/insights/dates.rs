//! Date display for record tables

use crate::core::error::InsightsError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Shown for dates that are present but cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Display format for dates, zero-padded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// `MM/DD/YYYY`
    #[default]
    MonthDayYear,
    /// `DD/MM/YYYY`
    DayMonthYear,
    /// `YYYY-MM-DD`
    Iso,
}

impl DateFormat {
    const fn pattern(self) -> &'static str {
        match self {
            Self::MonthDayYear => "%m/%d/%Y",
            Self::DayMonthYear => "%d/%m/%Y",
            Self::Iso => "%Y-%m-%d",
        }
    }

    /// Format a stored date string for display.
    ///
    /// Returns `None` for a missing or blank value so the caller can show
    /// its placeholder, and [`INVALID_DATE`] for text that is not a date.
    #[must_use]
    pub fn display(self, raw: Option<&str>) -> Option<String> {
        let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
        Some(parse_date(raw).map_or_else(
            || INVALID_DATE.to_string(),
            |date| date.format(self.pattern()).to_string(),
        ))
    }
}

impl FromStr for DateFormat {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MM/DD/YYYY" | "US" => Ok(Self::MonthDayYear),
            "DD/MM/YYYY" | "EU" => Ok(Self::DayMonthYear),
            "YYYY-MM-DD" | "ISO" => Ok(Self::Iso),
            _ => Err(InsightsError::UnknownDateFormat(s.to_string())),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::MonthDayYear => "MM/DD/YYYY",
            Self::DayMonthYear => "DD/MM/YYYY",
            Self::Iso => "YYYY-MM-DD",
        };
        f.write_str(label)
    }
}

/// Parse the date shapes the provider emits; timestamps are read in UTC.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.with_timezone(&Utc).date_naive());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(stamp.date());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(stamp.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
