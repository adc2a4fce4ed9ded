//! Report generation for rendered dashboards
//!
//! Writers take a [`DisplayModel`] and produce Markdown, self-contained HTML
//! or JSON. They never recompute any figure: everything comes from the
//! display model.

pub mod formats;

use crate::core::error::{InsightsError, Result};
use crate::core::insights::{DateFormat, DisplayModel};
use crate::core::models::InsightsKind;
use std::fs;
use std::path::Path;

pub use formats::{HtmlReporter, JsonReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Rendered dashboard
    pub model: &'a DisplayModel,
    /// Dashboard variant
    pub kind: InsightsKind,
    /// Name of the payload the model was rendered from
    pub source: Option<&'a str>,
    /// Date format used in record tables
    pub date_format: DateFormat,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(model: &'a DisplayModel, kind: InsightsKind) -> Self {
        Self {
            model,
            kind,
            source: None,
            date_format: DateFormat::MonthDayYear,
        }
    }

    /// Attach the payload name shown in the report header
    #[must_use]
    pub const fn with_source(mut self, source: &'a str) -> Self {
        self.source = Some(source);
        self
    }

    /// Record the date format used for the tables
    #[must_use]
    pub const fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }

    /// Source name, or `"-"` when unknown
    #[must_use]
    pub fn source_name(&self) -> &str {
        self.source.unwrap_or("-")
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String>;

    /// Generate a report to a file, creating parent directories as needed
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<()> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| InsightsError::io(parent, e))?;
        }
        fs::write(output_path, content).map_err(|e| InsightsError::io(output_path, e))
    }
}

/// Generator for the given format
#[must_use]
pub fn generator_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}
