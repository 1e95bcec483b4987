//! Error types for catalog loading and configuration.
//!
//! Neither error ever escapes the controller: a failed catalog load turns into
//! the "unavailable" display state, and configuration errors are reported to
//! whoever builds the [`BrowserConfig`](crate::config::BrowserConfig).

use std::path::PathBuf;
use thiserror::Error;

/// Failure to read or parse the item catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid JSON.
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The top-level JSON value is not an array.
    #[error("catalog must be a JSON array of item records")]
    NotAnArray,

    /// An element of the array is not a JSON object.
    #[error("catalog entry {index} is not a JSON object")]
    NotAnObject {
        /// Position of the offending entry.
        index: usize,
    },
}

/// Invalid or unreadable browser configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for [`BrowserConfig`](crate::config::BrowserConfig).
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// `per_page` must be at least 1.
    #[error("invalid per_page {value}, expected a positive integer")]
    InvalidPageSize {
        /// Rejected value.
        value: usize,
    },

    /// `window` must be at least 1.
    #[error("invalid window {value}, expected a positive integer")]
    InvalidWindow {
        /// Rejected value.
        value: usize,
    },
}
