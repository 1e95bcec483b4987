//! The item catalog: records loaded once from a JSON array and never mutated.
//!
//! Each record carries four well-known fields (`title`, `category`,
//! `imageUrl`, `link`). Anything else in the JSON object is kept, in source
//! order, so the text search can look at every string-valued field.
//!
//! ```rust
//! use catalog_browser::catalog::Catalog;
//!
//! let catalog = Catalog::from_json(r#"[
//!     {"title": "루프탑 카페", "category": "강남구, 신사동", "img url": "a.jpg", "link": "/a"},
//!     {"title": "카페거리", "category": "마포구", "img url": "b.jpg", "link": "/b"}
//! ]"#).unwrap();
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.categories(), vec!["강남구", "신사동", "마포구"]);
//! ```

use crate::error::CatalogError;
use crate::filter::ALL;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::path::Path;

/// Keys accepted for the image field. The reference data files use `"img url"`.
const IMAGE_KEYS: [&str; 3] = ["imageUrl", "img url", "image_url"];

/// Stable positional identifier of an item within its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

/// A single catalog record.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: ItemId,
    title: String,
    category: String,
    image_url: String,
    link: String,
    extra: Map<String, Value>,
}

impl Item {
    /// Creates an item from its four well-known fields.
    ///
    /// The id is assigned when the item is placed in a [`Catalog`].
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        image_url: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId(0),
            title: title.into(),
            category: category.into(),
            image_url: image_url.into(),
            link: link.into(),
            extra: Map::new(),
        }
    }

    /// Adds an extra field (builder pattern).
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Builds an item from a JSON object.
    ///
    /// Missing or non-string well-known fields become empty strings rather
    /// than failing the whole catalog.
    pub fn from_object(id: ItemId, mut object: Map<String, Value>) -> Self {
        let title = take_string(&mut object, "title");
        let category = take_string(&mut object, "category");
        let image_url = IMAGE_KEYS
            .iter()
            .map(|key| take_string(&mut object, key))
            .find(|value| !value.is_empty())
            .unwrap_or_default();
        let link = take_string(&mut object, "link");

        Self {
            id,
            title,
            category,
            image_url,
            link,
            extra: object,
        }
    }

    /// Positional id within the owning catalog.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Raw comma-separated category string, as stored in the source.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Opaque reference to the item's image.
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Opaque reference to the item's destination.
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Fields beyond the four well-known ones, in source order.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Category tags: the raw string split on commas, each token trimmed.
    /// Empty tokens are dropped.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.category
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }

    /// Returns true if one of the item's tags equals `tag` exactly.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().any(|t| t == tag)
    }

    /// Every string-valued field of the record in declaration order.
    /// Non-string extra values are skipped.
    pub fn string_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.title.as_str(),
            self.category.as_str(),
            self.image_url.as_str(),
            self.link.as_str(),
        ]
        .into_iter()
        .chain(self.extra.values().filter_map(Value::as_str))
    }
}

fn take_string(object: &mut Map<String, Value>, key: &str) -> String {
    match object.shift_remove(key) {
        Some(Value::String(s)) => s,
        _ => String::new(),
    }
}

/// The full, ordered, read-only set of items.
///
/// The category vocabulary is built once when the catalog is created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
    categories: Vec<String>,
    known_tags: HashSet<String>,
}

impl Catalog {
    /// An empty catalog, used before the load completes and after it fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a catalog from items, assigning positional ids.
    pub fn from_items(items: Vec<Item>) -> Self {
        let items = items
            .into_iter()
            .enumerate()
            .map(|(index, mut item)| {
                item.id = ItemId(index);
                item
            })
            .collect();
        Self::indexed(items)
    }

    fn indexed(items: Vec<Item>) -> Self {
        let mut known_tags = HashSet::new();
        let mut categories = Vec::new();
        // `all` is the facet sentinel and never names a category.
        for tag in items.iter().flat_map(Item::tags).filter(|tag| *tag != ALL) {
            if known_tags.insert(tag.to_string()) {
                categories.push(tag.to_string());
            }
        }
        Self {
            items,
            categories,
            known_tags,
        }
    }

    /// Parses a catalog from a JSON array of objects.
    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(source)?;
        let Value::Array(entries) = value else {
            return Err(CatalogError::NotAnArray);
        };

        let items = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                Value::Object(object) => Ok(Item::from_object(ItemId(index), object)),
                _ => Err(CatalogError::NotAnObject { index }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::indexed(items))
    }

    /// Reads and parses the catalog file at `path`.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_json(&source)?;
        tracing::info!(path = %path.display(), items = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Iterates over the items in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// The category vocabulary: every distinct tag, in first-seen order.
    ///
    /// A tag spelled `all` is left out: it would collide with the
    /// [`Category::All`](crate::filter::Category::All) sentinel and could not
    /// be selected on its own.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Returns true if `tag` is in the category vocabulary.
    pub fn has_category(&self, tag: &str) -> bool {
        self.known_tags.contains(tag)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_assigns_positional_ids() {
        let catalog = Catalog::from_json(
            r#"[{"title": "a", "category": "x"}, {"title": "b", "category": "y"}]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().id(), ItemId(0));
        assert_eq!(catalog.get(1).unwrap().id(), ItemId(1));
        assert_eq!(catalog.get(1).unwrap().title(), "b");
    }

    #[test]
    fn test_image_key_variants() {
        let catalog = Catalog::from_json(
            r#"[{"img url": "a.jpg"}, {"imageUrl": "b.jpg"}, {"image_url": "c.jpg"}]"#,
        )
        .unwrap();

        let urls: Vec<&str> = catalog.iter().map(Item::image_url).collect();
        assert_eq!(urls, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn test_missing_and_non_string_fields_become_empty() {
        let catalog = Catalog::from_json(r#"[{"title": 42, "link": "/x"}]"#).unwrap();
        let item = catalog.get(0).unwrap();

        assert_eq!(item.title(), "");
        assert_eq!(item.category(), "");
        assert_eq!(item.link(), "/x");
        assert_eq!(item.tags().count(), 0);
    }

    #[test]
    fn test_extra_fields_kept_in_order() {
        let catalog = Catalog::from_json(
            r#"[{"title": "t", "zeta": "last?", "alpha": 3, "mid": "m"}]"#,
        )
        .unwrap();
        let item = catalog.get(0).unwrap();

        let keys: Vec<&str> = item.extra().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);

        let fields: Vec<&str> = item.string_fields().collect();
        assert_eq!(fields, vec!["t", "", "", "", "last?", "m"]);
    }

    #[test]
    fn test_known_fields_interleaved_with_extras() {
        let catalog = Catalog::from_json(
            r#"[{"a": "1", "title": "t", "b": "2", "img url": "i", "c": "3", "link": "l", "d": "4", "category": "x"}]"#,
        )
        .unwrap();
        let item = catalog.get(0).unwrap();

        let keys: Vec<&str> = item.extra().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b", "c", "d"]);
        assert_eq!(item.image_url(), "i");
        assert_eq!(item.category(), "x");
    }

    #[test]
    fn test_rejects_non_array_and_non_object() {
        assert!(matches!(
            Catalog::from_json(r#"{"title": "a"}"#),
            Err(CatalogError::NotAnArray)
        ));
        assert!(matches!(
            Catalog::from_json(r#"[{"title": "a"}, 7]"#),
            Err(CatalogError::NotAnObject { index: 1 })
        ));
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_tags_split_and_trim() {
        let item = Item::new("t", " 강남구 ,신사동,, ", "", "");
        let tags: Vec<&str> = item.tags().collect();

        assert_eq!(tags, vec!["강남구", "신사동"]);
        assert!(item.has_tag("신사동"));
        assert!(!item.has_tag("강남"));
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = Catalog::from_items(vec![
            Item::new("a", "마포구, 카페", "", ""),
            Item::new("b", "강남구", "", ""),
            Item::new("c", "카페, 강남구", "", ""),
        ]);

        assert_eq!(catalog.categories(), vec!["마포구", "카페", "강남구"]);
        assert!(catalog.has_category("카페"));
        assert!(!catalog.has_category("서초구"));
        assert_eq!(catalog.get(2).unwrap().id(), ItemId(2));
    }

    #[test]
    fn test_all_tag_is_not_a_category() {
        let catalog = Catalog::from_items(vec![
            Item::new("a", "all, x", "", ""),
            Item::new("b", "x", "", ""),
        ]);

        assert_eq!(catalog.categories(), vec!["x"]);
        assert!(!catalog.has_category("all"));
        assert!(catalog.has_category("x"));
    }

    #[test]
    fn test_vocabulary_from_json_matches_from_items() {
        let json = Catalog::from_json(r#"[{"category": "b, a"}, {"category": "a, c"}]"#).unwrap();
        let items = Catalog::from_items(vec![Item::new("", "b, a", "", ""), Item::new("", "a, c", "", "")]);

        assert_eq!(json.categories(), vec!["b", "a", "c"]);
        assert_eq!(json.categories(), items.categories());
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let err = Catalog::load("definitely/not/here.json").await.unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
