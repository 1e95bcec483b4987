//! Interactive catalog browser for bubbletea-rs applications.
//!
//! [`Browser`] wires a [`Controller`] to the keyboard and to a
//! [`TerminalRenderer`]. The catalog is read asynchronously by the command
//! returned from [`Browser::new`]; until it arrives every key except quit is
//! ignored and the loading notice is shown.
//!
//! ### Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | `/` | Edit the search text (`enter` submits, `esc` cancels) |
//! | `tab` / `shift+tab` | Next / previous category |
//! | `←`/`h`, `→`/`l` | Previous / next page |
//! | `g`/`home`, `G`/`end` | First / last page |
//! | `1`-`9` | Jump to that page |
//! | `q`, `ctrl+c` | Quit |
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use catalog_browser::browser::Browser;
//! use catalog_browser::config::BrowserConfig;
//!
//! struct App {
//!     browser: Browser,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let config = BrowserConfig::default().with_catalog_path("1.json");
//!         let (browser, load) = Browser::new(config);
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

use crate::catalog::Catalog;
use crate::config::BrowserConfig;
use crate::controller::Controller;
use crate::error::CatalogError;
use crate::filter::Category;
use crate::key::{self, KeyMap as KeyMapTrait};
use crate::render::TerminalRenderer;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::path::PathBuf;

/// Sent when the catalog file was read and parsed.
#[derive(Debug, Clone)]
pub struct CatalogLoadedMsg(pub Catalog);

/// Sent when the catalog file could not be read or parsed.
#[derive(Debug)]
pub struct CatalogFailedMsg(pub CatalogError);

/// Reads the catalog at `path` and reports the outcome as a
/// [`CatalogLoadedMsg`] or a [`CatalogFailedMsg`].
pub fn load_catalog(path: impl Into<PathBuf>) -> Cmd {
    let path = path.into();
    Box::pin(async move {
        let msg = match Catalog::load(&path).await {
            Ok(catalog) => Box::new(CatalogLoadedMsg(catalog)) as Msg,
            Err(err) => Box::new(CatalogFailedMsg(err)) as Msg,
        };
        Some(msg)
    })
}

/// Key bindings of the browser. Page keys live in the paginator's keymap.
#[derive(Debug, Clone)]
pub struct BrowserKeyMap {
    /// Start editing the search text. Default key: '/'
    pub search: key::Binding,
    /// Submit the search text. Default key: Enter
    pub submit: key::Binding,
    /// Stop editing without submitting. Default key: Esc
    pub cancel: key::Binding,
    /// Delete the last character of the search text. Default key: Backspace
    pub delete: key::Binding,
    /// Select the next category. Default key: Tab
    pub next_category: key::Binding,
    /// Select the previous category. Default key: Shift+Tab
    pub prev_category: key::Binding,
    /// Quit. Default keys: 'q', Ctrl+C
    pub quit: key::Binding,
    /// Quit even while editing. Default key: Ctrl+C
    pub force_quit: key::Binding,
}

impl Default for BrowserKeyMap {
    fn default() -> Self {
        Self {
            search: key::new_binding(vec![
                key::with_keys_str(&["/"]),
                key::with_help("/", "search"),
            ]),
            submit: key::new_binding(vec![
                key::with_keys_str(&["enter"]),
                key::with_help("enter", "submit"),
            ]),
            cancel: key::new_binding(vec![
                key::with_keys_str(&["esc"]),
                key::with_help("esc", "cancel"),
            ]),
            delete: key::new_binding(vec![key::with_keys_str(&["backspace"])]),
            next_category: key::new_binding(vec![
                key::with_keys_str(&["tab"]),
                key::with_help("tab", "next category"),
            ]),
            prev_category: key::new_binding(vec![
                key::with_keys_str(&["shift+tab"]),
                key::with_help("shift+tab", "prev category"),
            ]),
            quit: key::new_binding(vec![
                key::with_keys_str(&["q", "ctrl+c"]),
                key::with_help("q", "quit"),
            ]),
            force_quit: key::new_binding(vec![key::with_keys_str(&["ctrl+c"])]),
        }
    }
}

impl KeyMapTrait for BrowserKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.search, &self.next_category, &self.quit]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.search, &self.submit, &self.cancel],
            vec![&self.next_category, &self.prev_category],
            vec![&self.quit],
        ]
    }
}

/// The catalog browser model.
pub struct Browser {
    controller: Controller<TerminalRenderer>,
    config: BrowserConfig,
    /// Key bindings.
    pub keymap: BrowserKeyMap,
    input: String,
    editing: bool,
}

impl Browser {
    /// Creates a browser and the command that loads its catalog.
    pub fn new(config: BrowserConfig) -> (Self, Cmd) {
        let renderer = TerminalRenderer::new(config.labels.clone(), config.messages.clone());
        let controller = Controller::from_config(renderer, &config);
        let load = load_catalog(config.catalog_path.clone());
        let browser = Self {
            controller,
            config,
            keymap: BrowserKeyMap::default(),
            input: String::new(),
            editing: false,
        };
        (browser, load)
    }

    /// The engine behind the browser.
    pub fn controller(&self) -> &Controller<TerminalRenderer> {
        &self.controller
    }

    /// Configuration in use.
    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// Current contents of the search field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the search field has focus.
    pub fn editing(&self) -> bool {
        self.editing
    }

    /// Handles messages: catalog load results, window size changes and keys.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let msg = match msg.downcast::<CatalogLoadedMsg>() {
            Ok(loaded) => {
                let CatalogLoadedMsg(catalog) = *loaded;
                self.controller.on_catalog_loaded(catalog);
                self.sync_input();
                return None;
            }
            Err(msg) => msg,
        };

        if let Some(CatalogFailedMsg(err)) = msg.downcast_ref::<CatalogFailedMsg>() {
            self.controller.on_catalog_failed(err);
            self.sync_input();
            return None;
        }

        if let Some(size) = msg.downcast_ref::<bubbletea_rs::WindowSizeMsg>() {
            self.controller
                .bridge_mut()
                .set_width(size.width as usize);
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }
        None
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.force_quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }
        if !self.controller.is_interactive() {
            return self.keymap.quit.matches(key_msg).then(bubbletea_rs::quit);
        }
        if self.editing {
            self.handle_editing_key(key_msg);
            return None;
        }

        if self.keymap.quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }
        if self.keymap.search.matches(key_msg) {
            self.editing = true;
        } else if self.keymap.next_category.matches(key_msg) {
            self.cycle_category(true);
        } else if self.keymap.prev_category.matches(key_msg) {
            self.cycle_category(false);
        } else if let Some(page) = self.controller.paginator().page_request(key_msg) {
            self.controller.goto_page(page);
        } else if let KeyCode::Char(c @ '1'..='9') = key_msg.key {
            if let Some(page) = c.to_digit(10) {
                self.controller.goto_page(page as usize);
            }
        }
        None
    }

    fn handle_editing_key(&mut self, key_msg: &KeyMsg) {
        if self.keymap.submit.matches(key_msg) {
            self.editing = false;
            let text = std::mem::take(&mut self.input);
            self.controller.submit_query(&text);
            self.sync_input();
        } else if self.keymap.cancel.matches(key_msg) {
            self.editing = false;
            self.sync_input();
        } else if self.keymap.delete.matches(key_msg) {
            self.input.pop();
        } else if let KeyCode::Char(c) = key_msg.key {
            if !key_msg
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                self.input.push(c);
            }
        }
    }

    fn cycle_category(&mut self, forward: bool) {
        let options = self.controller.category_options();
        let current = match self.controller.selection().category() {
            Category::All => 0,
            Category::Tag(tag) => options
                .iter()
                .position(|option| option == tag)
                .unwrap_or(0),
        };
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };
        let tag = options[next].to_string();
        self.controller.select_category(&tag);
        self.sync_input();
    }

    fn sync_input(&mut self) {
        self.input = self.controller.selection().query().as_str().to_string();
    }

    /// Renders the header, category bar, search field, results and help.
    pub fn view(&self) -> String {
        let renderer = self.controller.bridge();
        let styles = renderer.styles();
        let labels = renderer.labels();

        let mut sections = vec![styles.title.render(&labels.title)];
        sections.push(renderer.category_bar(self.controller.catalog().categories()));

        let mut search = styles.search_prompt.render(&labels.search_prompt);
        if self.editing {
            search.push_str(&styles.search_input.render(&format!("{}█", self.input)));
        } else {
            search.push_str(&self.input);
        }
        sections.push(search);

        if self.controller.is_interactive() {
            sections.push(renderer.view());
        } else {
            sections.push(styles.no_items.render(&renderer.messages().loading));
        }

        let help = [
            key::short_help_view(&self.keymap),
            key::short_help_view(&self.controller.paginator().keymap),
        ]
        .join(" • ");
        sections.push(styles.help.render(&help));

        sections.join("\n")
    }
}

impl BubbleTeaModel for Browser {
    fn init() -> (Self, Option<Cmd>) {
        let (browser, load) = Browser::new(BrowserConfig::default());
        (browser, Some(load))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Browser::update(self, msg)
    }

    fn view(&self) -> String {
        Browser::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }) as Msg
    }

    fn plain(s: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
    }

    fn catalog() -> Catalog {
        let mut items = vec![
            Item::new("루프탑 카페", "강남구, 신사동", "", "/rooftop"),
            Item::new("헬스장", "강남구", "", "/gym"),
            Item::new("카페거리", "마포구", "", "/street"),
        ];
        items.extend((1..=30).map(|i| Item::new(format!("shop {i}"), "마포구", "", "")));
        Catalog::from_items(items)
    }

    fn loaded() -> Browser {
        let (mut browser, _load) = Browser::new(BrowserConfig::default());
        browser.update(Box::new(CatalogLoadedMsg(catalog())) as Msg);
        browser
    }

    fn type_text(browser: &mut Browser, text: &str) {
        for c in text.chars() {
            browser.update(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_loading_state_ignores_keys() {
        let (mut browser, _load) = Browser::new(BrowserConfig::default());

        browser.update(key(KeyCode::Char('/')));
        assert!(!browser.editing());
        assert!(plain(&browser.view()).contains("Loading…"));
    }

    #[test]
    fn test_failed_load_shows_unavailable() {
        let (mut browser, _load) = Browser::new(BrowserConfig::default());
        browser.update(Box::new(CatalogFailedMsg(CatalogError::NotAnArray)) as Msg);

        assert!(browser.controller().is_interactive());
        assert!(plain(&browser.view()).contains("Data unavailable."));
    }

    #[test]
    fn test_search_flow() {
        let mut browser = loaded();

        browser.update(key(KeyCode::Char('/')));
        assert!(browser.editing());
        type_text(&mut browser, "카페x");
        browser.update(key(KeyCode::Backspace));
        assert_eq!(browser.input(), "카페");

        browser.update(key(KeyCode::Enter));
        assert!(!browser.editing());
        assert_eq!(browser.controller().results().len(), 2);
        assert_eq!(browser.input(), "카페");
    }

    #[test]
    fn test_cancel_restores_submitted_query() {
        let mut browser = loaded();

        browser.update(key(KeyCode::Char('/')));
        type_text(&mut browser, "q");
        browser.update(key(KeyCode::Esc));

        assert!(!browser.editing());
        assert_eq!(browser.input(), "");
        assert_eq!(browser.controller().results().len(), 33);
    }

    #[test]
    fn test_q_types_while_editing() {
        let mut browser = loaded();

        browser.update(key(KeyCode::Char('/')));
        assert!(browser.update(key(KeyCode::Char('q'))).is_none());
        assert_eq!(browser.input(), "q");
    }

    #[test]
    fn test_tab_cycles_categories() {
        let mut browser = loaded();

        browser.update(key(KeyCode::Tab));
        assert_eq!(browser.controller().selection().category().tag(), Some("강남구"));

        browser.update(key(KeyCode::BackTab));
        browser.update(key(KeyCode::BackTab));
        assert_eq!(browser.controller().selection().category().tag(), Some("마포구"));

        browser.update(key(KeyCode::Tab));
        assert!(browser.controller().selection().category().is_all());
    }

    #[test]
    fn test_category_clears_search_field() {
        let mut browser = loaded();

        browser.update(key(KeyCode::Char('/')));
        type_text(&mut browser, "카페");
        browser.update(key(KeyCode::Enter));
        browser.update(key(KeyCode::Tab));

        assert_eq!(browser.input(), "");
        assert!(browser.controller().selection().query().is_empty());
    }

    #[test]
    fn test_page_keys() {
        let mut browser = loaded();
        assert_eq!(browser.controller().pagination_view().total_pages, 3);

        browser.update(key(KeyCode::Right));
        assert_eq!(browser.controller().selection().page(), 2);

        browser.update(key(KeyCode::Char('G')));
        assert_eq!(browser.controller().selection().page(), 3);

        browser.update(key(KeyCode::Char('l')));
        assert_eq!(browser.controller().selection().page(), 3);

        browser.update(key(KeyCode::Char('2')));
        assert_eq!(browser.controller().selection().page(), 2);

        browser.update(key(KeyCode::Char('9')));
        assert_eq!(browser.controller().selection().page(), 2);

        browser.update(key(KeyCode::Home));
        assert_eq!(browser.controller().selection().page(), 1);
    }

    #[test]
    fn test_window_size_sets_width() {
        let mut browser = loaded();
        browser.update(Box::new(bubbletea_rs::WindowSizeMsg {
            width: 40,
            height: 20,
        }) as Msg);

        let view = plain(&browser.view());
        assert!(view.contains("Catalog"));
        assert!(view.contains("Search results: 33"));
        assert!(view.contains("/ search"));
    }

    #[test]
    fn test_quit_keys() {
        let mut browser = loaded();
        assert!(browser.update(key(KeyCode::Char('q'))).is_some());
        assert!(browser
            .update(Box::new(KeyMsg {
                key: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            }) as Msg)
            .is_some());
    }
}
