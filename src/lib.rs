//! Insights rendering library for the international-affairs dashboard.
//!
//! Loads aggregated provider payloads, turns them into backend-neutral
//! display models, and writes those models as Markdown, HTML or JSON reports.

pub mod core;

pub use crate::core::{config, error, get_version, ingest, insights, models, report};
pub use crate::core::error::{InsightsError, Result};
