use catalog_browser::prelude::*;
use std::io::Write;

#[derive(Default)]
struct Screen {
    renders: usize,
    titles: Vec<String>,
    empty: Option<EmptyReason>,
    view: Option<PaginationView>,
    count: usize,
}

impl RenderBridge for Screen {
    fn render_page(&mut self, items: &[&Item], empty: Option<EmptyReason>) {
        self.renders += 1;
        self.titles = items.iter().map(|i| i.title().to_string()).collect();
        self.empty = empty;
    }

    fn render_pagination(&mut self, view: &PaginationView) {
        self.view = Some(view.clone());
    }

    fn render_result_count(&mut self, count: usize) {
        self.count = count;
    }
}

const SEOUL: &str = r#"[
    {"title": "루프탑 카페", "category": "강남구, 신사동", "imageUrl": "rooftop.jpg", "link": "/rooftop"},
    {"title": "헬스장", "category": "강남구", "imageUrl": "gym.jpg", "link": "/gym"},
    {"title": "카페거리", "category": "마포구", "imageUrl": "street.jpg", "link": "/street"}
]"#;

fn write_catalog(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn numbered_json(n: usize) -> String {
    let items: Vec<String> = (1..=n)
        .map(|i| format!(r#"{{"title": "item {i}", "category": "c{}", "imageUrl": "", "link": ""}}"#, i % 3))
        .collect();
    format!("[{}]", items.join(","))
}

#[tokio::test]
async fn test_load_then_browse() {
    let file = write_catalog(SEOUL);
    let catalog = Catalog::load(file.path()).await.unwrap();

    let mut controller = Controller::new(Screen::default(), 14);
    controller.on_catalog_loaded(catalog);
    assert_eq!(controller.bridge().count, 3);

    assert!(controller.select_category("강남구"));
    assert_eq!(controller.bridge().titles, vec!["루프탑 카페", "헬스장"]);

    assert!(controller.submit_query("카페"));
    assert_eq!(controller.bridge().titles, vec!["루프탑 카페", "카페거리"]);
    assert_eq!(controller.bridge().count, 2);
}

#[tokio::test]
async fn test_load_failure_is_unavailable() {
    let file = write_catalog(r#"{"not": "an array"}"#);
    let err = Catalog::load(file.path()).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotAnArray));

    let mut controller = Controller::new(Screen::default(), 14);
    controller.on_catalog_failed(&err);

    assert_eq!(controller.bridge().renders, 1);
    assert_eq!(controller.bridge().empty, Some(EmptyReason::Unavailable));
    assert_eq!(controller.bridge().view.as_ref().unwrap().total_pages, 0);
}

#[test]
fn test_every_result_lands_on_exactly_one_page() {
    for n in [0, 1, 13, 14, 15, 28, 29, 100] {
        let catalog = Catalog::from_json(&numbered_json(n)).unwrap();
        let mut controller = Controller::new(Screen::default(), 14);
        controller.on_catalog_loaded(catalog);

        let total_pages = controller.pagination_view().total_pages;
        assert_eq!(total_pages, n.div_ceil(14));

        let mut seen = controller.bridge().titles.clone();
        while controller.next_page() {
            seen.extend(controller.bridge().titles.clone());
        }
        let expected: Vec<String> = (1..=n).map(|i| format!("item {i}")).collect();
        assert_eq!(seen, expected, "n = {n}");
    }
}

#[test]
fn test_window_stays_within_bounds() {
    let catalog = Catalog::from_json(&numbered_json(14 * 12)).unwrap();
    let mut controller = Controller::new(Screen::default(), 14);
    controller.on_catalog_loaded(catalog);

    for page in 1..=12 {
        assert!(controller.goto_page(page));
        let view = controller.pagination_view();
        let window = view.window_pages();
        assert_eq!(window.len(), 5);
        assert!(window.contains(&page));
        assert!(window.iter().all(|p| (1..=12).contains(p)));
        assert_eq!(view.prev_enabled, page > 1);
        assert_eq!(view.next_enabled, page < 12);
    }
}

#[test]
fn test_filter_results_are_subset_in_catalog_order() {
    let catalog = Catalog::from_json(&numbered_json(50)).unwrap();
    let results = filter(&catalog, &Category::parse("c1"), &Query::new("ITEM 1"));

    let titles: Vec<&str> = results.items(&catalog).map(Item::title).collect();
    assert_eq!(titles, vec!["item 1", "item 10", "item 13", "item 16", "item 19"]);
    assert!(results.indices().windows(2).all(|w| w[0] < w[1]));
}
