//! Browser configuration.
//!
//! Every field has a default reproducing the reference behavior (14 items per
//! page, a 5-wide page window, catalog read from `1.json`), so a config file
//! only needs the keys it wants to change:
//!
//! ```rust
//! use catalog_browser::config::BrowserConfig;
//!
//! let config = BrowserConfig::from_json_str(r#"{"per_page": 20}"#).unwrap();
//! assert_eq!(config.per_page, 20);
//! assert_eq!(config.window, 5);
//! ```

use crate::error::ConfigError;
use crate::paginator::{DEFAULT_PER_PAGE, DEFAULT_WINDOW};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Placeholder replaced by the result count in [`Labels::result_count`].
pub const COUNT_PLACEHOLDER: &str = "{count}";

/// Text shown on controls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Header line.
    pub title: String,
    /// Previous-page affordance.
    pub prev: String,
    /// Next-page affordance.
    pub next: String,
    /// Label of the "all categories" button.
    pub all: String,
    /// Result counter; `{count}` is replaced by the number of results.
    pub result_count: String,
    /// Prompt in front of the search field.
    pub search_prompt: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "Catalog".to_string(),
            prev: "◀ prev".to_string(),
            next: "next ▶".to_string(),
            all: "all".to_string(),
            result_count: "Search results: {count}".to_string(),
            search_prompt: "Search: ".to_string(),
        }
    }
}

impl Labels {
    /// The result counter text for `count` results.
    pub fn result_count(&self, count: usize) -> String {
        self.result_count
            .replace(COUNT_PLACEHOLDER, &count.to_string())
    }
}

/// Notices shown in place of an empty page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// The active text query matched nothing.
    pub no_query_results: String,
    /// The active category holds no items.
    pub no_category_results: String,
    /// The catalog loaded but is empty.
    pub empty_catalog: String,
    /// The catalog could not be loaded.
    pub unavailable: String,
    /// The catalog is still loading.
    pub loading: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            no_query_results: "No results for this search.".to_string(),
            no_category_results: "No items in this category.".to_string(),
            empty_catalog: "No items.".to_string(),
            unavailable: "Data unavailable.".to_string(),
            loading: "Loading…".to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Where the catalog JSON array is read from.
    pub catalog_path: PathBuf,
    /// Items per page.
    pub per_page: usize,
    /// Number of page-number buttons shown at once.
    pub window: usize,
    /// Control labels.
    pub labels: Labels,
    /// Empty-state notices.
    pub messages: Messages,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("1.json"),
            per_page: DEFAULT_PER_PAGE,
            window: DEFAULT_WINDOW,
            labels: Labels::default(),
            messages: Messages::default(),
        }
    }
}

impl BrowserConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&source)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Sets the catalog path (builder pattern).
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = path.into();
        self
    }

    /// Sets the page size (builder pattern).
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    /// Checks numeric settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.per_page == 0 {
            return Err(ConfigError::InvalidPageSize {
                value: self.per_page,
            });
        }
        if self.window == 0 {
            return Err(ConfigError::InvalidWindow { value: self.window });
        }
        Ok(())
    }
}
