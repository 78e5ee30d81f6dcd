//! The catalogs shipped under `demos/` must load and agree with each other.

use std::path::PathBuf;

use shelf_catalog::load_catalog;
use shelf_core::Store;

fn demo(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(file)
}

#[test]
fn demo_catalogs_match() {
    let json = load_catalog(demo("catalog.json")).unwrap();
    let toml = load_catalog(demo("catalog.toml")).unwrap();
    let yaml = load_catalog(demo("catalog.yaml")).unwrap();

    assert_eq!(json.len(), 7);
    assert_eq!(json, toml);
    assert_eq!(json, yaml);
}

#[test]
fn demo_catalog_session() {
    let mut store = Store::new(load_catalog(demo("catalog.json")).unwrap());

    store.add_by_name("Banana").unwrap();
    let ranked: Vec<_> = store
        .search_by_hashtag("bakery")
        .iter()
        .map(|i| i.name.as_str())
        .collect();

    // Cart profile: fruit 1, sweet 1
    // Honey Cake 2, Apple Pie 2, Sourdough Bread 0
    assert_eq!(ranked, ["Apple Pie", "Honey Cake", "Sourdough Bread"]);
    assert!(store.add_by_name("Apple").is_err());
    assert_eq!(store.checkout(), 2);
}
