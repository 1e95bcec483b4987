#![warn(missing_docs)]

//! # catalog-browser
//!
//! Browse a static catalog of items by category, free-text search and
//! numbered pages, in the terminal with [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! or behind any front end that implements [`render::RenderBridge`].
//!
//! ## Overview
//!
//! The catalog is a JSON array of objects, read once at startup. Each item
//! has a title, a comma-separated category string, an image URL and a link;
//! any other string fields are kept and searched too. From there:
//!
//! - **Category facet**: one category at a time, or `all`. An item belongs
//!   to every tag of its category string.
//! - **Text search**: case-insensitive substring match on any string field.
//!   A non-empty search always covers the whole catalog, so it resets the
//!   category to `all`; picking a category clears the search.
//! - **Pagination**: 14 items per page, a 5-wide window of page numbers with
//!   first/last buttons and ellipses, Previous/Next affordances.
//!
//! Every change goes back to page 1 and re-renders the page, the pagination
//! controls and the result count.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | Items, the catalog and its category vocabulary, JSON loading |
//! | [`filter`] | Category and query predicates, the filtered result set |
//! | [`paginator`] | Page math, the page-number window, pagination views |
//! | [`selection`] | The category/query/page state and its transitions |
//! | [`controller`] | The event pipeline driving a render bridge |
//! | [`render`] | The render bridge trait and the terminal renderer |
//! | [`browser`] | The bubbletea-rs model with key handling |
//! | [`config`] | Page size, window width, labels and messages |
//! | [`key`] | Type-safe key bindings and help text |
//! | [`style`] | Lipgloss styles for everything drawn |
//!
//! ## Using the engine directly
//!
//! ```rust
//! use catalog_browser::prelude::*;
//!
//! let catalog = Catalog::from_json(r#"[
//!     {"title": "루프탑 카페", "category": "강남구, 신사동", "imageUrl": "a.jpg", "link": "/a"},
//!     {"title": "헬스장", "category": "강남구", "imageUrl": "b.jpg", "link": "/b"},
//!     {"title": "카페거리", "category": "마포구", "imageUrl": "c.jpg", "link": "/c"}
//! ]"#).unwrap();
//!
//! let results = filter(&catalog, &Category::parse("강남구"), &Query::new(""));
//! assert_eq!(results.len(), 2);
//!
//! let (page, view) = paginate(results.indices(), 1, 14);
//! assert_eq!(page.len(), 2);
//! assert_eq!(view.total_pages, 1);
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model, Msg};
//! use catalog_browser::prelude::*;
//!
//! struct App {
//!     browser: Browser,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let (browser, load) = Browser::new(BrowserConfig::default());
//!         (Self { browser }, Some(load))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.browser.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.browser.view()
//!     }
//! }
//! ```

pub mod browser;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod key;
pub mod paginator;
pub mod render;
pub mod selection;
pub mod style;

pub use browser::{load_catalog, Browser, BrowserKeyMap, CatalogFailedMsg, CatalogLoadedMsg};
pub use catalog::{Catalog, Item, ItemId};
pub use config::{BrowserConfig, Labels, Messages};
pub use controller::{Controller, LoadState};
pub use error::{CatalogError, ConfigError};
pub use filter::{filter, Category, Query, ResultSet};
pub use key::{new_binding, with_help, with_keys_str, Binding, KeyMap, KeyPress};
pub use paginator::{paginate, Model as Paginator, PageButton, PaginationView};
pub use render::{DefaultDelegate, EmptyReason, ItemDelegate, RenderBridge, TerminalRenderer};
pub use selection::Selection;
pub use style::BrowserStyles;

/// Prelude module for convenient imports.
///
/// ```rust
/// use catalog_browser::prelude::*;
///
/// let mut selection = Selection::new();
/// selection.submit_query("cafe");
/// assert!(selection.category().is_all());
/// ```
pub mod prelude {
    pub use crate::browser::{Browser, CatalogFailedMsg, CatalogLoadedMsg};
    pub use crate::catalog::{Catalog, Item};
    pub use crate::config::BrowserConfig;
    pub use crate::controller::{Controller, LoadState};
    pub use crate::error::{CatalogError, ConfigError};
    pub use crate::filter::{filter, Category, Query, ResultSet};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::paginator::{paginate, Model as Paginator, PageButton, PaginationView};
    pub use crate::render::{EmptyReason, RenderBridge, TerminalRenderer};
    pub use crate::selection::Selection;
}
