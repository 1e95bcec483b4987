//! The render bridge: how engine output reaches the screen.
//!
//! The controller never draws anything itself. After every state change it
//! hands the current page, the pagination view and the result count to a
//! [`RenderBridge`]. [`TerminalRenderer`] is the bridge used by the
//! bubbletea front end; tests plug in their own recording bridges.
//!
//! Item rows are produced by an [`ItemDelegate`], so the look of a single
//! row can change without touching the rest of the layout.

use crate::catalog::Item;
use crate::config::{Labels, Messages};
use crate::filter::Category;
use crate::paginator::{PageButton, PaginationView, ELLIPSIS};
use crate::selection::Selection;
use crate::style::BrowserStyles;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Why the current page has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The catalog could not be loaded.
    Unavailable,
    /// A text query is active and matched nothing.
    NoQueryMatches,
    /// A category is active and holds no items.
    NoCategoryItems,
    /// No filters are active and the catalog is empty.
    EmptyCatalog,
}

impl EmptyReason {
    /// The configured notice for this reason.
    pub fn message<'a>(&self, messages: &'a Messages) -> &'a str {
        match self {
            Self::Unavailable => &messages.unavailable,
            Self::NoQueryMatches => &messages.no_query_results,
            Self::NoCategoryItems => &messages.no_category_results,
            Self::EmptyCatalog => &messages.empty_catalog,
        }
    }
}

/// Receives engine output after every state change.
pub trait RenderBridge {
    /// Replaces the result area. `empty` is set when `items` is empty.
    fn render_page(&mut self, items: &[&Item], empty: Option<EmptyReason>);

    /// Replaces the pagination controls.
    fn render_pagination(&mut self, view: &PaginationView);

    /// Shows the size of the current result set.
    fn render_result_count(&mut self, count: usize);

    /// Reflects the selection back onto the controls: the active category
    /// button and the contents of the search field.
    fn render_selection(&mut self, _selection: &Selection) {}
}

/// Renders one catalog item as a row.
pub trait ItemDelegate {
    /// The styled row for `item`, at most `width` columns wide (0 = unbounded).
    fn render(&self, item: &Item, styles: &BrowserStyles, width: usize) -> String;

    /// Blank lines between rows.
    fn spacing(&self) -> usize {
        1
    }
}

/// Title on the first line, link and image on the second, raw category on
/// the third.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDelegate;

impl DefaultDelegate {
    /// Creates the default delegate.
    pub fn new() -> Self {
        Self
    }
}

impl ItemDelegate for DefaultDelegate {
    fn render(&self, item: &Item, styles: &BrowserStyles, width: usize) -> String {
        let title = truncate(item.title(), width.saturating_sub(2));
        let mut lines = vec![styles.item_title.render(&title)];

        let meta = match (item.link(), item.image_url()) {
            ("", "") => None,
            (link, "") => Some(link.to_string()),
            ("", image) => Some(format!("[img {image}]")),
            (link, image) => Some(format!("{link}  [img {image}]")),
        };
        if let Some(meta) = meta {
            lines.push(styles.item_meta.render(&truncate(&meta, width.saturating_sub(4))));
        }
        if !item.category().is_empty() {
            let category = truncate(item.category(), width.saturating_sub(4));
            lines.push(styles.item_category.render(&category));
        }
        lines.join("\n")
    }
}

/// Shortens `text` to `width` display columns, ending in an ellipsis when cut.
/// A width of 0 leaves the text alone.
pub fn truncate(text: &str, width: usize) -> String {
    if width == 0 || text.width() <= width {
        return text.to_string();
    }
    let budget = width.saturating_sub(ELLIPSIS.width());
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}

/// A [`RenderBridge`] that keeps the latest output of each area as styled
/// terminal text.
pub struct TerminalRenderer {
    delegate: Box<dyn ItemDelegate + Send + Sync>,
    styles: BrowserStyles,
    labels: Labels,
    messages: Messages,
    width: usize,
    page_view: String,
    pagination_view: String,
    count_view: String,
    active_category: Category,
    query_text: String,
}

impl TerminalRenderer {
    /// Creates a renderer using [`DefaultDelegate`].
    pub fn new(labels: Labels, messages: Messages) -> Self {
        Self::with_delegate(DefaultDelegate::new(), labels, messages)
    }

    /// Creates a renderer with a custom item delegate.
    pub fn with_delegate<D>(delegate: D, labels: Labels, messages: Messages) -> Self
    where
        D: ItemDelegate + Send + Sync + 'static,
    {
        Self {
            delegate: Box::new(delegate),
            styles: BrowserStyles::default(),
            labels,
            messages,
            width: 0,
            page_view: String::new(),
            pagination_view: String::new(),
            count_view: String::new(),
            active_category: Category::All,
            query_text: String::new(),
        }
    }

    /// Replaces the styles (builder pattern).
    pub fn with_styles(mut self, styles: BrowserStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the available width in columns (0 = unbounded).
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Styles in use.
    pub fn styles(&self) -> &BrowserStyles {
        &self.styles
    }

    /// Labels in use.
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Messages in use.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Last rendered result area.
    pub fn page_view(&self) -> &str {
        &self.page_view
    }

    /// Last rendered pagination controls.
    pub fn pagination_view(&self) -> &str {
        &self.pagination_view
    }

    /// Last rendered result counter.
    pub fn count_view(&self) -> &str {
        &self.count_view
    }

    /// Category marked active by the last selection render.
    pub fn active_category(&self) -> &Category {
        &self.active_category
    }

    /// Search field contents from the last selection render.
    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    /// Result area, pagination and counter stacked vertically.
    pub fn view(&self) -> String {
        [&self.page_view, &self.pagination_view, &self.count_view]
            .into_iter()
            .filter(|section| !section.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Renders the category bar for `categories`, marking the active one.
    pub fn category_bar<S: AsRef<str>>(&self, categories: &[S]) -> String {
        let mut buttons = vec![self.category_button(&self.labels.all, self.active_category.is_all())];
        buttons.extend(categories.iter().map(|tag| {
            let tag = tag.as_ref();
            self.category_button(tag, self.active_category.tag() == Some(tag))
        }));
        buttons.join(" ")
    }

    fn category_button(&self, label: &str, active: bool) -> String {
        if active {
            self.styles.active_category.render(label)
        } else {
            self.styles.category.render(label)
        }
    }

    fn nav_button(&self, label: &str, enabled: bool) -> String {
        if enabled {
            self.styles.nav.render(label)
        } else {
            self.styles.nav_disabled.render(label)
        }
    }
}

impl RenderBridge for TerminalRenderer {
    fn render_page(&mut self, items: &[&Item], empty: Option<EmptyReason>) {
        if let Some(reason) = empty {
            self.page_view = self
                .styles
                .no_items
                .render(reason.message(&self.messages));
            return;
        }

        let spacing = "\n".repeat(self.delegate.spacing() + 1);
        self.page_view = items
            .iter()
            .map(|item| self.delegate.render(item, &self.styles, self.width))
            .collect::<Vec<_>>()
            .join(&spacing);
    }

    fn render_pagination(&mut self, view: &PaginationView) {
        let mut parts = vec![self.nav_button(&self.labels.prev, view.prev_enabled)];
        parts.extend(view.buttons.iter().map(|button| match button {
            PageButton::Page {
                number,
                active: true,
            } => self.styles.active_page.render(&format!("[{number}]")),
            PageButton::Page { number, .. } => self.styles.page.render(&number.to_string()),
            PageButton::Ellipsis => self.styles.ellipsis.render(ELLIPSIS),
        }));
        parts.push(self.nav_button(&self.labels.next, view.next_enabled));
        self.pagination_view = format!("  {}", parts.join(" "));
    }

    fn render_result_count(&mut self, count: usize) {
        self.count_view = self.styles.status.render(&self.labels.result_count(count));
    }

    fn render_selection(&mut self, selection: &Selection) {
        self.active_category = selection.category().clone();
        self.query_text = selection.query().as_str().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paginator::Model as Paginator;

    fn plain(s: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
    }

    fn renderer() -> TerminalRenderer {
        TerminalRenderer::new(Labels::default(), Messages::default())
    }

    #[test]
    fn test_truncate_respects_display_width() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 6), "hello…");
        // Hangul syllables are two columns wide.
        assert_eq!(truncate("루프탑 카페", 6), "루프…");
        assert_eq!(truncate("anything", 0), "anything");
    }

    #[test]
    fn test_default_delegate_shows_all_fields() {
        let item = Item::new("Cafe Central", "vienna, coffee", "cc.jpg", "/cafe");
        let row = plain(&DefaultDelegate::new().render(&item, &BrowserStyles::default(), 0));

        assert!(row.contains("Cafe Central"));
        assert!(row.contains("/cafe"));
        assert!(row.contains("cc.jpg"));
        assert!(row.contains("vienna, coffee"));
    }

    #[test]
    fn test_empty_reasons_use_distinct_messages() {
        let messages = Messages::default();
        assert_ne!(
            EmptyReason::NoQueryMatches.message(&messages),
            EmptyReason::NoCategoryItems.message(&messages)
        );

        let mut r = renderer();
        r.render_page(&[], Some(EmptyReason::NoCategoryItems));
        assert!(plain(r.page_view()).contains("No items in this category."));
    }

    #[test]
    fn test_pagination_controls() {
        let mut paginator = Paginator::new().with_per_page(1).with_total_items(20);
        paginator.page = 10;

        let mut r = renderer();
        r.render_pagination(&paginator.pagination_view());

        assert_eq!(
            plain(r.pagination_view()).trim(),
            "◀ prev 1 … 8 9 [10] 11 12 … 20 next ▶"
        );
    }

    #[test]
    fn test_pagination_uses_configured_labels() {
        let labels = Labels {
            prev: "◀ 이전".to_string(),
            next: "다음 ▶".to_string(),
            ..Labels::default()
        };
        let paginator = Paginator::new().with_per_page(10).with_total_items(30);

        let mut r = TerminalRenderer::new(labels, Messages::default());
        r.render_pagination(&paginator.pagination_view());

        assert_eq!(plain(r.pagination_view()).trim(), "◀ 이전 [1] 2 3 다음 ▶");
    }

    #[test]
    fn test_selection_marks_active_category() {
        let mut selection = Selection::new();
        selection.select_category(Category::Tag("마포구".into()));

        let mut r = renderer();
        r.render_selection(&selection);
        assert_eq!(r.active_category().tag(), Some("마포구"));

        let bar = plain(&r.category_bar(&["강남구", "마포구"]));
        assert!(bar.contains("all"));
        assert!(bar.contains("강남구"));
        assert!(bar.contains("마포구"));
    }

    #[test]
    fn test_view_stacks_sections() {
        let mut r = renderer();
        let item = Item::new("Only", "", "", "");
        r.render_page(&[&item], None);
        r.render_result_count(1);

        let view = plain(&r.view());
        assert!(view.contains("Only"));
        assert!(view.contains("Search results: 1"));
    }
}
