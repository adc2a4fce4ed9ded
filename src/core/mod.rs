//! Core module: data model, view transform, ingest and report writers

pub mod config;
pub mod error;
pub mod ingest;
pub mod insights;
pub mod models;
pub mod report;

/// Returns the current version of the `intl-insights` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
