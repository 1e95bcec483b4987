//! Styling for the terminal renderer and the browser chrome.
//!
//! All default styles use `AdaptiveColor` so they read on both light and dark
//! terminals.

use lipgloss_extras::prelude::*;

/// Styles for every element the browser draws.
#[derive(Debug, Clone)]
pub struct BrowserStyles {
    /// Header line.
    pub title: Style,
    /// Item title line.
    pub item_title: Style,
    /// Item link / image line.
    pub item_meta: Style,
    /// Raw category string shown under an item.
    pub item_category: Style,
    /// Category button that is not selected.
    pub category: Style,
    /// Category button that is selected.
    pub active_category: Style,
    /// Page-number button.
    pub page: Style,
    /// Current page-number button.
    pub active_page: Style,
    /// Enabled Previous/Next affordance.
    pub nav: Style,
    /// Disabled Previous/Next affordance.
    pub nav_disabled: Style,
    /// Ellipsis marker between page buttons.
    pub ellipsis: Style,
    /// Empty-state notice.
    pub no_items: Style,
    /// Result counter.
    pub status: Style,
    /// Search prompt.
    pub search_prompt: Style,
    /// Search text while editing.
    pub search_input: Style,
    /// Help line.
    pub help: Style,
}

impl Default for BrowserStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let very_subdued = AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        };
        let highlight = AdaptiveColor {
            Light: "#EE6FF8",
            Dark: "#EE6FF8",
        };

        Self {
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            item_title: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1a1a1a",
                    Dark: "#dddddd",
                })
                .padding(0, 0, 0, 2),
            item_meta: Style::new()
                .foreground(subdued.clone())
                .padding(0, 0, 0, 4),
            item_category: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#04B575",
                    Dark: "#04B575",
                })
                .padding(0, 0, 0, 4),
            category: Style::new().foreground(subdued.clone()).padding(0, 1, 0, 1),
            active_category: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .bold(true)
                .padding(0, 1, 0, 1),
            page: Style::new().foreground(subdued.clone()),
            active_page: Style::new().foreground(highlight.clone()).bold(true),
            nav: Style::new().foreground(AdaptiveColor {
                Light: "#847A85",
                Dark: "#979797",
            }),
            nav_disabled: Style::new().foreground(very_subdued.clone()),
            ellipsis: Style::new().foreground(very_subdued),
            no_items: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#909090",
                    Dark: "#626262",
                })
                .padding(1, 0, 1, 2),
            status: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#A49FA5",
                    Dark: "#777777",
                })
                .padding(0, 0, 0, 2),
            search_prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            search_input: Style::new().foreground(highlight),
            help: Style::new().foreground(subdued).padding(1, 0, 0, 2),
        }
    }
}
