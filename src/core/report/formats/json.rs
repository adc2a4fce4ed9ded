//! JSON report generator

use crate::core::error::Result;
use crate::core::insights::DisplayModel;
use crate::core::report::{ReportContext, ReportGenerator};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    kind: &'a str,
    source: Option<&'a str>,
    date_format: String,
    #[serde(flatten)]
    model: &'a DisplayModel,
}

/// Writes the display model as pretty-printed JSON
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String> {
        let report = JsonReport {
            kind: ctx.kind.as_str(),
            source: ctx.source,
            date_format: ctx.date_format.to_string(),
            model: ctx.model,
        };
        let mut text = serde_json::to_string_pretty(&report)?;
        text.push('\n');
        Ok(text)
    }
}
