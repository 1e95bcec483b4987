//! Category facet and text query filtering.
//!
//! [`filter`] narrows a [`Catalog`] by a [`Category`] and a [`Query`]. The
//! category predicate is exact tag equality; the query predicate is a
//! case-insensitive substring test over every string field of the record.
//! When both are active they compose by logical AND. Output always keeps
//! catalog order.
//!
//! Which of the two is active at any time is decided by
//! [`Selection`](crate::selection::Selection), not here.

use crate::catalog::{Catalog, Item};
use std::fmt;
use std::str::FromStr;

/// Sentinel spelling of the "no category filter" value.
pub const ALL: &str = "all";

/// The single-select category facet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// No category restriction.
    #[default]
    All,
    /// Only items carrying this exact tag.
    Tag(String),
}

impl Category {
    /// Parses a facet value; `"all"` maps to [`Category::All`].
    ///
    /// The sentinel is reserved, so an item tag spelled `all` cannot be
    /// selected as a category.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value == ALL {
            Self::All
        } else {
            Self::Tag(value.to_string())
        }
    }

    /// Returns true for [`Category::All`].
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The tag, or `None` for [`Category::All`].
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Tag(tag) => Some(tag.as_str()),
        }
    }

    /// Returns true if `item` passes this facet.
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => item.has_tag(tag),
        }
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Tag(tag) => f.write_str(tag),
        }
    }
}

/// A trimmed free-text query with its lower-cased needle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    text: String,
    needle: String,
}

impl Query {
    /// Builds a query from user input, trimming surrounding whitespace.
    pub fn new(text: &str) -> Self {
        let text = text.trim().to_string();
        let needle = text.to_lowercase();
        Self { text, needle }
    }

    /// The trimmed query as submitted.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true when there is no text filter.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns true if any string field of `item` contains the query,
    /// ignoring case. An empty query matches everything.
    pub fn matches(&self, item: &Item) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        item.string_fields()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Ordered catalog positions of the items that passed the filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultSet {
    indices: Vec<usize>,
}

impl ResultSet {
    /// Every item of `catalog`, unfiltered.
    pub fn all(catalog: &Catalog) -> Self {
        Self {
            indices: (0..catalog.len()).collect(),
        }
    }

    /// Number of matching items.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Catalog positions in catalog order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Resolves the positions against `catalog`.
    pub fn items<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a Item> + 'a {
        self.indices.iter().filter_map(move |&i| catalog.get(i))
    }
}

/// Narrows `catalog` to the items passing both `category` and `query`.
///
/// # Examples
///
/// ```rust
/// use catalog_browser::catalog::{Catalog, Item};
/// use catalog_browser::filter::{filter, Category, Query};
///
/// let catalog = Catalog::from_items(vec![
///     Item::new("Cafe Central", "vienna", "", ""),
///     Item::new("Prater", "vienna", "", ""),
/// ]);
///
/// let results = filter(&catalog, &Category::All, &Query::new("CAFE"));
/// assert_eq!(results.indices(), &[0]);
/// ```
pub fn filter(catalog: &Catalog, category: &Category, query: &Query) -> ResultSet {
    let indices = catalog
        .iter()
        .enumerate()
        .filter(|(_, item)| category.matches(item) && query.matches(item))
        .map(|(index, _)| index)
        .collect();
    ResultSet { indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_items(vec![
            Item::new("루프탑 카페", "강남구, 신사동", "rooftop.jpg", "/rooftop"),
            Item::new("헬스장", "강남구", "gym.jpg", "/gym"),
            Item::new("카페거리", "마포구", "street.jpg", "/street"),
        ])
    }

    #[test]
    fn test_category_parse_and_display() {
        assert_eq!(Category::parse("all"), Category::All);
        assert_eq!(Category::parse(" 강남구 "), Category::Tag("강남구".into()));
        assert_eq!(Category::All.to_string(), "all");
        assert_eq!("마포구".parse::<Category>().unwrap().tag(), Some("마포구"));
    }

    #[test]
    fn test_category_is_exact_tag_match() {
        let catalog = sample();

        let results = filter(&catalog, &Category::Tag("강남구".into()), &Query::default());
        assert_eq!(results.indices(), &[0, 1]);

        let results = filter(&catalog, &Category::Tag("강남".into()), &Query::default());
        assert!(results.is_empty());
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let catalog = Catalog::from_items(vec![Item::new("x", "Cafe", "", "")]);
        assert!(filter(&catalog, &Category::Tag("cafe".into()), &Query::default()).is_empty());
    }

    #[test]
    fn test_query_searches_all_string_fields() {
        let catalog = sample();

        assert_eq!(filter(&catalog, &Category::All, &Query::new("카페")).indices(), &[0, 2]);
        assert_eq!(filter(&catalog, &Category::All, &Query::new("/GYM")).indices(), &[1]);
        assert_eq!(filter(&catalog, &Category::All, &Query::new("신사동")).indices(), &[0]);
    }

    #[test]
    fn test_query_case_insensitive_substring() {
        let catalog = Catalog::from_items(vec![Item::new("Cafe Central", "vienna", "", "")]);
        assert_eq!(filter(&catalog, &Category::All, &Query::new("CAFE")).len(), 1);
        assert_eq!(filter(&catalog, &Category::All, &Query::new("e cen")).len(), 1);
    }

    #[test]
    fn test_query_ignores_non_string_fields() {
        let catalog = Catalog::from_items(vec![
            Item::new("a", "", "", "").with_field("rating", 42),
            Item::new("b", "", "", "").with_field("note", "rated 42"),
        ]);
        assert_eq!(filter(&catalog, &Category::All, &Query::new("42")).indices(), &[1]);
    }

    #[test]
    fn test_query_is_trimmed() {
        let query = Query::new("  카페 \t");
        assert_eq!(query.as_str(), "카페");
        assert!(Query::new("   ").is_empty());
    }

    #[test]
    fn test_both_predicates_compose_by_and() {
        let catalog = sample();
        let results = filter(&catalog, &Category::Tag("강남구".into()), &Query::new("카페"));
        assert_eq!(results.indices(), &[0]);
    }

    #[test]
    fn test_no_filters_keeps_catalog_order() {
        let catalog = sample();
        let results = filter(&catalog, &Category::All, &Query::default());
        assert_eq!(results, ResultSet::all(&catalog));
        let titles: Vec<&str> = results.items(&catalog).map(Item::title).collect();
        assert_eq!(titles, vec!["루프탑 카페", "헬스장", "카페거리"]);
    }
}
