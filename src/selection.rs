//! The selection state: active category, active query, current page.
//!
//! A new text search always looks at the whole catalog. Submitting a
//! non-empty query forces the category back to [`Category::All`], and picking
//! a category clears the query. Submitting an empty query only drops the text
//! filter. As a consequence a category and a query are never both active.
//! Every category or query change resets the page to 1.

use crate::filter::{Category, Query};

/// Current category, query and page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    category: Category,
    query: Query,
    page: usize,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            category: Category::All,
            query: Query::default(),
            page: 1,
        }
    }
}

impl Selection {
    /// The initial selection: all categories, no query, page 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Active category facet.
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Active query; empty means no text filter.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Current page (1-indexed).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Picks a category: clears the query and goes back to page 1.
    pub fn select_category(&mut self, category: Category) {
        self.category = category;
        self.query = Query::default();
        self.page = 1;
    }

    /// Submits a query: a non-empty one searches everything, so the category
    /// is reset to [`Category::All`]. Always goes back to page 1.
    pub fn submit_query(&mut self, text: &str) {
        self.query = Query::new(text);
        if !self.query.is_empty() {
            self.category = Category::All;
        }
        self.page = 1;
    }

    /// Moves to `page`. Range checking is up to the caller.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}
