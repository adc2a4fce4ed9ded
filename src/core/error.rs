//! Error types for loading payloads and writing reports

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, InsightsError>;

/// Errors raised at the I/O edges of the crate.
///
/// Rendering itself is infallible; these only come from reading payloads,
/// parsing user-provided names, and writing reports.
#[derive(Debug, Error)]
pub enum InsightsError {
    /// A file could not be read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Payload or model could not be (de)serialized as JSON
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload parsed but its top-level value is not an object or `null`
    #[error("unsupported payload shape: expected an object or null, found {found}")]
    UnsupportedPayload {
        /// JSON type name that was found
        found: &'static str,
    },

    /// Unknown dashboard variant name
    #[error("unknown insights kind '{0}' (expected events, visits or departments)")]
    UnknownKind(String),

    /// Unknown report format name
    #[error("unknown report format '{0}' (expected markdown, html or json)")]
    UnknownFormat(String),

    /// Unknown date display format
    #[error("unknown date format '{0}' (expected MM/DD/YYYY, DD/MM/YYYY or YYYY-MM-DD)")]
    UnknownDateFormat(String),

    /// HTML template failed to render
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

impl InsightsError {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_mentions_path() {
        let err = InsightsError::io(
            "/tmp/missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.json"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn unknown_kind_lists_choices() {
        let msg = InsightsError::UnknownKind("partners".into()).to_string();
        assert!(msg.contains("partners"));
        assert!(msg.contains("visits"));
    }
}
