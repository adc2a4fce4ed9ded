//! CLI command handlers for `insights`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod render;
pub mod summary;

use intl_insights::config::Config;
use intl_insights::ingest::load_payload;
use intl_insights::insights::{DisplayModel, RenderOptions};
use intl_insights::models::InsightsKind;
use logger::{error, info};
use std::path::Path;

/// Load a payload file and render it with the configured options
fn load_model(input_file: &Path, kind: InsightsKind, config: &Config) -> Result<DisplayModel, String> {
    let summary = load_payload(kind, input_file).map_err(|e| {
        error!("Failed to load {}: {e}", input_file.display());
        format!("✗ Failed to load {}: {e}", input_file.display())
    })?;
    info!("Payload loaded: {}", input_file.display());

    let options = RenderOptions::with_date_format(config.date_format());
    Ok(summary.display_model(&options))
}
