//! End-to-end scenarios through the store.

use stockroom::config::StoreConfig;
use stockroom::types::Product;
use stockroom::{loader, Store, StoreError};

const CATALOG: &str = r#"{
    "products": [
        {"code": "BAT001", "name": "Batman: Year One", "price": 15.99, "stock": 10, "category": "Batman"},
        {"code": "SUP001", "name": "Superman: Red Son", "price": 18.50, "stock": 6, "category": "Superman"},
        {"code": "MAR001", "name": "Spider-Man: Blue", "price": "12", "stock": 3, "category": "Spider-Man"},
        {"code": "MAR002", "name": "X-Men: Days of Future Past", "price": 16.75, "stock": 2, "category": "X-Men"},
        {"code": "MAN001", "name": "One Piece Vol. 1", "price": 9.99, "stock": 12, "category": "Shonen"},
        {"code": "MAN002", "name": "Berserk Vol. 1", "price": 14.50, "stock": 1, "category": "Seinen"}
    ]
}"#;

fn loaded_store() -> Store {
    let mut store = Store::with_default_categories(StoreConfig::default());
    let products = loader::parse_products(CATALOG).expect("catalog parses");
    store.add_products(products);
    store
}

#[test]
fn catalog_loads_and_lists_every_product() {
    let store = loaded_store();

    assert_eq!(store.list_products().len(), 6);
    assert_eq!(
        store.products().search("SUP001").map(|p| p.price),
        Some(1_850)
    );
}

#[test]
fn browsing_session_keeps_last_five_views() {
    let mut store = loaded_store();

    for code in ["BAT001", "SUP001", "MAR001", "MAR002", "MAN001", "MAN002", "NOPE"] {
        store.search_product(code);
    }

    let history: Vec<_> = store
        .view_history()
        .into_iter()
        .map(|(_, p)| p.code.as_str())
        .collect();
    assert_eq!(history, vec!["MAN002", "MAN001", "MAR002", "MAR001", "SUP001"]);
}

#[test]
fn orders_are_processed_in_arrival_order() {
    let mut store = loaded_store();

    store.create_order("Ana", ["BAT001", "MAN001"]).unwrap();
    assert!(matches!(
        store.create_order("Bea", ["ZZZ"]),
        Err(StoreError::NoValidProducts { .. })
    ));
    store.create_order("Carlos", ["SUP001"]).unwrap();

    let first = store.process_next_order().unwrap();
    assert_eq!((first.number, first.customer.as_str()), (1, "Ana"));
    assert_eq!(first.total(), Some(1_599 + 999));

    let second = store.process_next_order().unwrap();
    assert_eq!((second.number, second.customer.as_str()), (2, "Carlos"));

    assert!(store.process_next_order().is_none());
    assert!(store.next_order().is_none());
}

#[test]
fn deleted_products_cannot_be_ordered() {
    let mut store = loaded_store();
    store.delete_product("MAR001").unwrap();

    let placed = store.create_order("Ana", ["MAR001", "MAR002"]).unwrap();
    assert_eq!(placed.missing, vec!["MAR001".to_string()]);
    assert_eq!(placed.line_count, 1);
}

#[test]
fn category_queries_follow_the_hierarchy() {
    let mut store = loaded_store();
    store.create_category("Vertigo", Some("DC Comics")).unwrap();
    store.add_product(Product::new("VER001", "Sandman Vol. 1", 2_000, 2, "Vertigo"));

    let mut dc: Vec<_> = store
        .products_in_category("DC Comics")
        .into_iter()
        .map(|p| p.code.as_str())
        .collect();
    dc.sort_unstable();
    assert_eq!(dc, vec!["BAT001", "SUP001", "VER001"]);

    let manga: Vec<_> = store
        .category_tree()
        .list_subcategories("Manga")
        .into_iter()
        .collect();
    assert_eq!(manga, vec!["Manga", "Shonen", "Seinen"]);
}

#[test]
fn catalog_digest_is_stable_for_the_same_history() {
    let a = loaded_store();
    let b = loaded_store();
    assert_eq!(a.catalog_digest_hex(), b.catalog_digest_hex());

    // Different bucket count, different table order
    let mut c = Store::new(StoreConfig::default().with_bucket_count(1));
    let mut products = loader::parse_products(CATALOG).unwrap();
    products.reverse();
    c.add_products(products);
    assert_ne!(a.catalog_digest(), c.catalog_digest());
}
