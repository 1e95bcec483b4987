//! The controller: one owner for the catalog, the selection and the derived
//! views, driving a [`RenderBridge`].
//!
//! Every inbound event runs the same pipeline: update the selection, reset
//! to page 1, recompute the result set, recompute the pagination view, and
//! render. Page moves skip the filtering step and only re-render.
//!
//! ```rust
//! use catalog_browser::catalog::{Catalog, Item};
//! use catalog_browser::controller::Controller;
//! use catalog_browser::paginator::PaginationView;
//! use catalog_browser::render::{EmptyReason, RenderBridge};
//!
//! #[derive(Default)]
//! struct Titles(Vec<String>);
//!
//! impl RenderBridge for Titles {
//!     fn render_page(&mut self, items: &[&Item], _empty: Option<EmptyReason>) {
//!         self.0 = items.iter().map(|i| i.title().to_string()).collect();
//!     }
//!     fn render_pagination(&mut self, _view: &PaginationView) {}
//!     fn render_result_count(&mut self, _count: usize) {}
//! }
//!
//! let mut controller = Controller::new(Titles::default(), 14);
//! controller.on_catalog_loaded(Catalog::from_items(vec![
//!     Item::new("루프탑 카페", "강남구, 신사동", "", ""),
//!     Item::new("헬스장", "강남구", "", ""),
//!     Item::new("카페거리", "마포구", "", ""),
//! ]));
//!
//! controller.select_category("강남구");
//! assert_eq!(controller.bridge().0, vec!["루프탑 카페", "헬스장"]);
//!
//! // A search always covers the whole catalog.
//! controller.submit_query("카페");
//! assert_eq!(controller.bridge().0, vec!["루프탑 카페", "카페거리"]);
//! assert!(controller.selection().category().is_all());
//! ```

use crate::catalog::{Catalog, Item};
use crate::config::BrowserConfig;
use crate::error::CatalogError;
use crate::filter::{self, Category, ResultSet, ALL};
use crate::paginator::{self, PaginationView};
use crate::render::{EmptyReason, RenderBridge};
use crate::selection::Selection;

/// Where the one-shot catalog load stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// The load has not completed; all operations are ignored.
    Pending,
    /// The catalog is loaded.
    Ready,
    /// The load failed; the catalog is empty and shown as unavailable.
    Unavailable(String),
}

/// Owns the engine state and pushes every change to its bridge.
pub struct Controller<R: RenderBridge> {
    catalog: Catalog,
    load_state: LoadState,
    selection: Selection,
    results: ResultSet,
    paginator: paginator::Model,
    bridge: R,
}

impl<R: RenderBridge> Controller<R> {
    /// Creates a controller waiting for its catalog.
    pub fn new(bridge: R, per_page: usize) -> Self {
        Self {
            catalog: Catalog::empty(),
            load_state: LoadState::Pending,
            selection: Selection::new(),
            results: ResultSet::default(),
            paginator: paginator::Model::new().with_per_page(per_page),
            bridge,
        }
    }

    /// Creates a controller sized by `config`.
    pub fn from_config(bridge: R, config: &BrowserConfig) -> Self {
        Self::new(bridge, config.per_page).with_window(config.window)
    }

    /// Sets the page-number window width (builder pattern).
    pub fn with_window(mut self, window: usize) -> Self {
        self.paginator = self.paginator.with_window(window);
        self
    }

    /// Stores the loaded catalog and renders the first, unfiltered page.
    pub fn on_catalog_loaded(&mut self, catalog: Catalog) {
        tracing::info!(
            items = catalog.len(),
            categories = catalog.categories().len(),
            "catalog ready"
        );
        self.catalog = catalog;
        self.load_state = LoadState::Ready;
        self.selection = Selection::new();
        self.refresh();
    }

    /// Records a failed load: the catalog stays empty and the page shows the
    /// unavailable notice.
    pub fn on_catalog_failed(&mut self, error: &CatalogError) {
        tracing::warn!(error = %error, "catalog unavailable");
        self.catalog = Catalog::empty();
        self.load_state = LoadState::Unavailable(error.to_string());
        self.selection = Selection::new();
        self.refresh();
    }

    /// Selects a category (`"all"` clears the facet). The query is cleared.
    ///
    /// Tags outside the catalog's vocabulary are ignored. Returns whether the
    /// selection was applied.
    pub fn select_category(&mut self, tag: &str) -> bool {
        if !self.is_interactive() {
            tracing::debug!(tag, "category selected before catalog load; ignored");
            return false;
        }
        let category = Category::parse(tag);
        if let Category::Tag(tag) = &category {
            if !self.catalog.has_category(tag) {
                tracing::warn!(tag = %tag, "unknown category; ignored");
                return false;
            }
        }
        self.selection.select_category(category);
        self.refresh();
        true
    }

    /// Submits a text query. A non-empty query searches the whole catalog and
    /// resets the category to `all`.
    pub fn submit_query(&mut self, text: &str) -> bool {
        if !self.is_interactive() {
            tracing::debug!("query submitted before catalog load; ignored");
            return false;
        }
        self.selection.submit_query(text);
        self.refresh();
        true
    }

    /// Jumps to page `n`. Out-of-range requests change nothing and render
    /// nothing. Returns whether the page changed hands.
    pub fn goto_page(&mut self, n: usize) -> bool {
        if !self.is_interactive() || !self.paginator.is_valid_page(n) {
            tracing::debug!(
                page = n,
                total_pages = self.paginator.total_pages,
                "page request ignored"
            );
            return false;
        }
        self.paginator.page = n;
        self.selection.set_page(n);
        self.render();
        true
    }

    /// Moves one page back, if possible.
    pub fn prev_page(&mut self) -> bool {
        self.paginator.has_prev() && self.goto_page(self.paginator.page - 1)
    }

    /// Moves one page forward, if possible.
    pub fn next_page(&mut self) -> bool {
        self.paginator.has_next() && self.goto_page(self.paginator.page + 1)
    }

    /// Jumps to the first page.
    pub fn first_page(&mut self) -> bool {
        self.goto_page(1)
    }

    /// Jumps to the last page.
    pub fn last_page(&mut self) -> bool {
        self.goto_page(self.paginator.total_pages)
    }

    /// Current load state.
    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Returns true once the load finished, successfully or not.
    pub fn is_interactive(&self) -> bool {
        self.load_state != LoadState::Pending
    }

    /// The loaded catalog (empty until the load completes).
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The catalog's category vocabulary, with the `"all"` sentinel first.
    pub fn category_options(&self) -> Vec<&str> {
        let mut options = vec![ALL];
        options.extend(self.catalog.categories().iter().map(String::as_str));
        options
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Current result set.
    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    /// Items of the current page.
    pub fn page_items(&self) -> Vec<&Item> {
        let (start, end) = self.paginator.get_slice_bounds(self.results.len());
        self.results.indices()[start..end]
            .iter()
            .filter_map(|&i| self.catalog.get(i))
            .collect()
    }

    /// Current pagination view.
    pub fn pagination_view(&self) -> PaginationView {
        self.paginator.pagination_view()
    }

    /// The page-navigation part of the engine (key bindings included).
    pub fn paginator(&self) -> &paginator::Model {
        &self.paginator
    }

    /// Why the current page is empty, if it is.
    pub fn empty_reason(&self) -> Option<EmptyReason> {
        if !self.page_items().is_empty() {
            return None;
        }
        Some(if matches!(self.load_state, LoadState::Unavailable(_)) {
            EmptyReason::Unavailable
        } else if !self.selection.query().is_empty() {
            EmptyReason::NoQueryMatches
        } else if !self.selection.category().is_all() {
            EmptyReason::NoCategoryItems
        } else {
            EmptyReason::EmptyCatalog
        })
    }

    /// The render bridge.
    pub fn bridge(&self) -> &R {
        &self.bridge
    }

    /// The render bridge, mutably.
    pub fn bridge_mut(&mut self) -> &mut R {
        &mut self.bridge
    }

    fn refresh(&mut self) {
        self.results = filter::filter(
            &self.catalog,
            self.selection.category(),
            self.selection.query(),
        );
        self.paginator.set_total_items(self.results.len());
        self.paginator.page = self.selection.page();
        tracing::debug!(
            category = %self.selection.category(),
            query = self.selection.query().as_str(),
            results = self.results.len(),
            total_pages = self.paginator.total_pages,
            "results recomputed"
        );
        self.render();
    }

    fn render(&mut self) {
        let empty = self.empty_reason();
        let view = self.paginator.pagination_view();
        let count = self.results.len();

        let (start, end) = self.paginator.get_slice_bounds(self.results.len());
        let items: Vec<&Item> = self.results.indices()[start..end]
            .iter()
            .filter_map(|&i| self.catalog.get(i))
            .collect();

        self.bridge.render_selection(&self.selection);
        self.bridge.render_page(&items, empty);
        self.bridge.render_pagination(&view);
        self.bridge.render_result_count(count);
    }
}
