//! Page math and the page-number window.
//!
//! This component owns the pagination state of a result set: the current
//! page, the page size, and the total page count. It computes slice bounds
//! for the current page and the bounded window of page-number buttons shown
//! around it, with first/last buttons and ellipsis markers when the window
//! does not reach either end.
//!
//! Pages are 1-indexed. An empty result set has zero pages, and the
//! paginator never clamps `page` on its own; keeping `page` inside
//! `1..=total_pages` is the controller's job.

use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::KeyMsg;

/// Items per page in the reference behavior.
pub const DEFAULT_PER_PAGE: usize = 14;

/// Number of page-number buttons shown at once in the reference behavior.
pub const DEFAULT_WINDOW: usize = 5;

/// Text used for ellipsis markers between page buttons.
pub const ELLIPSIS: &str = "…";

/// One slot of the page-button strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    /// A button jumping to `number`; `active` marks the current page.
    Page {
        /// Target page (1-indexed).
        number: usize,
        /// True for the current page.
        active: bool,
    },
    /// A gap marker between the first/last button and the window.
    Ellipsis,
}

impl PageButton {
    /// The page this button jumps to, if it is a page button.
    pub fn number(&self) -> Option<usize> {
        match self {
            Self::Page { number, .. } => Some(*number),
            Self::Ellipsis => None,
        }
    }
}

/// Everything a renderer needs to draw the pagination controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Number of items in the result set.
    pub total_items: usize,
    /// Number of pages; zero for an empty result set.
    pub total_pages: usize,
    /// Width of the page-number window.
    pub window: usize,
    /// First button, leading ellipsis, window pages, trailing ellipsis, last button.
    pub buttons: Vec<PageButton>,
    /// Whether the Previous affordance is active.
    pub prev_enabled: bool,
    /// Whether the Next affordance is active.
    pub next_enabled: bool,
}

impl PaginationView {
    /// The page numbers of the centered window, excluding the first/last
    /// jump buttons.
    pub fn window_pages(&self) -> Vec<usize> {
        let Some((start, end)) = window_bounds(self.page, self.total_pages, self.window) else {
            return Vec::new();
        };
        (start..=end).collect()
    }
}

/// Key bindings for page navigation.
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Previous page. Default keys: Left Arrow, 'h', PageUp
    pub prev_page: key::Binding,
    /// Next page. Default keys: Right Arrow, 'l', PageDown
    pub next_page: key::Binding,
    /// First page. Default keys: Home, 'g'
    pub first_page: key::Binding,
    /// Last page. Default keys: End, 'G'
    pub last_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["left", "h", "pgup"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["right", "l", "pgdown"]),
                key::with_help("→/l", "next page"),
            ]),
            first_page: key::new_binding(vec![
                key::with_keys_str(&["home", "g"]),
                key::with_help("g/home", "first page"),
            ]),
            last_page: key::new_binding(vec![
                key::with_keys_str(&["end", "G"]),
                key::with_help("G/end", "last page"),
            ]),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![
            &self.prev_page,
            &self.next_page,
            &self.first_page,
            &self.last_page,
        ]]
    }
}

/// Computes the inclusive page-number window around `page`.
///
/// Returns `None` when there are no pages. The window is `width` wide (or
/// `total_pages` if smaller), centered on `page` and shifted back near the
/// upper boundary so the width stays constant.
pub fn window_bounds(page: usize, total_pages: usize, width: usize) -> Option<(usize, usize)> {
    if total_pages == 0 {
        return None;
    }
    let width = width.max(1);
    let half = width / 2;

    let start = page.saturating_sub(half).max(1);
    let end = total_pages.min(start + width - 1);
    let start = end.saturating_sub(width - 1).max(1);
    Some((start, end))
}

/// A paginator model for handling pagination state.
///
/// # Examples
///
/// ```rust
/// use catalog_browser::paginator::Model;
///
/// let mut paginator = Model::new().with_per_page(14).with_total_items(15);
///
/// assert_eq!(paginator.total_pages, 2);
/// assert!(paginator.on_first_page());
///
/// assert!(paginator.next_page());
/// assert_eq!(paginator.page, 2);
/// assert_eq!(paginator.items_on_page(15), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// The current page (1-indexed).
    pub page: usize,
    /// The number of items per page.
    pub per_page: usize,
    /// The total number of pages.
    pub total_pages: usize,
    /// The number of items being paginated.
    pub total_items: usize,
    /// Width of the page-number window.
    pub window: usize,
    /// Key bindings.
    pub keymap: PaginatorKeyMap,
}

impl Default for Model {
    /// Creates a paginator on page 1 with no items, 14 items per page and a
    /// 5-wide window.
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            total_pages: 0,
            total_items: 0,
            window: DEFAULT_WINDOW,
            keymap: PaginatorKeyMap::default(),
        }
    }
}

impl Model {
    /// Creates a new paginator model with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of items per page (builder pattern). Clamped to at least 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.set_per_page(per_page);
        self
    }

    /// Sets the number of items per page. Clamped to at least 1.
    ///
    /// The page count is recalculated for the current item total.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.set_total_items(self.total_items);
    }

    /// Sets the page-number window width (builder pattern). Clamped to at least 1.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window.max(1);
        self
    }

    /// Sets the total number of items and calculates total pages (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Calculates the total number of pages from the item count.
    ///
    /// Zero items means zero pages. The current page is left untouched.
    ///
    /// ```rust
    /// use catalog_browser::paginator::Model;
    ///
    /// let mut paginator = Model::new().with_per_page(14);
    ///
    /// paginator.set_total_items(14);
    /// assert_eq!(paginator.total_pages, 1);
    ///
    /// paginator.set_total_items(0);
    /// assert_eq!(paginator.total_pages, 0);
    /// ```
    pub fn set_total_items(&mut self, items: usize) {
        self.total_items = items;
        self.total_pages = items.div_ceil(self.per_page);
    }

    /// Returns the number of items on the current page.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        let (start, end) = self.get_slice_bounds(total_items);
        end - start
    }

    /// Calculates slice bounds `[start, end)` for the current page, clamped
    /// to `length`. Page 0 and pages past the end yield an empty range.
    ///
    /// ```rust
    /// use catalog_browser::paginator::Model;
    ///
    /// let mut paginator = Model::new().with_per_page(10).with_total_items(25);
    /// assert_eq!(paginator.get_slice_bounds(25), (0, 10));
    ///
    /// paginator.page = 3;
    /// assert_eq!(paginator.get_slice_bounds(25), (20, 25));
    ///
    /// paginator.page = 4;
    /// assert_eq!(paginator.get_slice_bounds(25), (25, 25));
    /// ```
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        if self.page == 0 {
            return (0, 0);
        }
        let start = (self.page.saturating_sub(1) * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Returns true if the paginator is on the first page.
    pub fn on_first_page(&self) -> bool {
        self.page == 1
    }

    /// Returns true if the paginator is on the last page (or there are no pages).
    pub fn on_last_page(&self) -> bool {
        self.total_pages == 0 || self.page >= self.total_pages
    }

    /// Whether the Previous affordance is enabled.
    pub fn has_prev(&self) -> bool {
        self.total_pages > 0 && self.page > 1
    }

    /// Whether the Next affordance is enabled.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Returns true if `page` names an existing page.
    pub fn is_valid_page(&self, page: usize) -> bool {
        (1..=self.total_pages).contains(&page)
    }

    /// Jumps to `page` if it exists. Returns whether the page changed hands.
    pub fn go_to(&mut self, page: usize) -> bool {
        if !self.is_valid_page(page) {
            return false;
        }
        self.page = page;
        true
    }

    /// Navigates to the previous page. Returns false on the first page.
    pub fn prev_page(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Navigates to the next page. Returns false on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// The inclusive window of page numbers around the current page.
    pub fn window_bounds(&self) -> Option<(usize, usize)> {
        window_bounds(self.page, self.total_pages, self.window)
    }

    /// The full button strip: first page, ellipsis, window, ellipsis, last page.
    ///
    /// ```rust
    /// use catalog_browser::paginator::{Model, PageButton};
    ///
    /// let mut paginator = Model::new().with_per_page(1).with_total_items(20);
    /// paginator.page = 10;
    ///
    /// let numbers: Vec<Option<usize>> =
    ///     paginator.buttons().iter().map(PageButton::number).collect();
    /// assert_eq!(
    ///     numbers,
    ///     vec![Some(1), None, Some(8), Some(9), Some(10), Some(11), Some(12), None, Some(20)]
    /// );
    /// ```
    pub fn buttons(&self) -> Vec<PageButton> {
        let Some((start, end)) = self.window_bounds() else {
            return Vec::new();
        };

        let mut buttons = Vec::with_capacity(end - start + 5);
        if start > 1 {
            buttons.push(self.page_button(1));
            if start > 2 {
                buttons.push(PageButton::Ellipsis);
            }
        }
        buttons.extend((start..=end).map(|number| self.page_button(number)));
        if end < self.total_pages {
            if end + 1 < self.total_pages {
                buttons.push(PageButton::Ellipsis);
            }
            buttons.push(self.page_button(self.total_pages));
        }
        buttons
    }

    fn page_button(&self, number: usize) -> PageButton {
        PageButton::Page {
            number,
            active: number == self.page,
        }
    }

    /// Snapshot of the pagination controls for a renderer.
    pub fn pagination_view(&self) -> PaginationView {
        PaginationView {
            page: self.page,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
            window: self.window,
            buttons: self.buttons(),
            prev_enabled: self.has_prev(),
            next_enabled: self.has_next(),
        }
    }

    /// Maps a key press to the page it asks for, if any.
    ///
    /// Disabled affordances produce `None`, as do first/last requests when
    /// there are no pages.
    pub fn page_request(&self, key_msg: &KeyMsg) -> Option<usize> {
        if self.keymap.prev_page.matches(key_msg) {
            self.has_prev().then(|| self.page - 1)
        } else if self.keymap.next_page.matches(key_msg) {
            self.has_next().then(|| self.page + 1)
        } else if self.keymap.first_page.matches(key_msg) {
            (self.total_pages > 0).then_some(1)
        } else if self.keymap.last_page.matches(key_msg) {
            (self.total_pages > 0).then_some(self.total_pages)
        } else {
            None
        }
    }
}

/// Slices `results` to the requested page and describes the controls.
///
/// `page` is not clamped: page 0 or a page past the end yields an empty
/// slice.
///
/// ```rust
/// use catalog_browser::paginator::paginate;
///
/// let results: Vec<u32> = (0..15).collect();
/// let (page, view) = paginate(&results, 2, 14);
///
/// assert_eq!(page, &[14]);
/// assert_eq!(view.total_pages, 2);
/// assert!(view.prev_enabled);
/// assert!(!view.next_enabled);
/// ```
pub fn paginate<T>(results: &[T], page: usize, per_page: usize) -> (&[T], PaginationView) {
    let mut paginator = Model::new()
        .with_per_page(per_page)
        .with_total_items(results.len());
    paginator.page = page;
    let (start, end) = paginator.get_slice_bounds(results.len());
    (&results[start..end], paginator.pagination_view())
}
