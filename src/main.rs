//! Stockroom - demo entry point
//!
//! Builds a store with the default category hierarchy, loads products from
//! a JSON file (or a small built-in catalog), and walks through lookups,
//! order processing and the view history.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use stockroom::config::{StoreConfig, DEFAULT_HISTORY_LIMIT};
use stockroom::collections::hash_table::DEFAULT_BUCKETS;
use stockroom::types::{price, Product};
use stockroom::{loader, logging, Store};

#[derive(Debug, Parser)]
#[command(name = "stockroom", about = "Inventory and order core demo")]
struct Cli {
    /// Product file ({"products": [...]})
    #[arg(long)]
    products: Option<PathBuf>,

    /// Buckets in the product table
    #[arg(long, default_value_t = DEFAULT_BUCKETS)]
    buckets: usize,

    /// Entries kept in the view history
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
    history_limit: usize,

    /// Emit JSON logs
    #[arg(long)]
    json_logs: bool,
}

fn sample_products() -> Vec<Product> {
    vec![
        Product::new("BAT001", "Batman: Year One", 1_599, 10, "Batman"),
        Product::new("BAT002", "Batman: The Long Halloween", 2_450, 4, "Batman"),
        Product::new("SUP001", "Superman: Red Son", 1_850, 6, "Superman"),
        Product::new("MAR001", "Spider-Man: Blue", 1_200, 3, "Spider-Man"),
        Product::new("MAR002", "X-Men: Days of Future Past", 1_675, 2, "X-Men"),
        Product::new("MAN001", "One Piece Vol. 1", 999, 12, "Shonen"),
        Product::new("MAN002", "Berserk Vol. 1", 1_450, 1, "Seinen"),
    ]
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.json_logs);

    let config = StoreConfig::default()
        .with_bucket_count(cli.buckets)
        .with_history_limit(cli.history_limit);
    let mut store = Store::with_default_categories(config);

    let products = match &cli.products {
        Some(path) => loader::load_products(path)
            .with_context(|| format!("loading products from {}", path.display()))?,
        None => sample_products(),
    };
    let loaded = store.add_products(products);

    println!("===========================================");
    println!("  Stockroom");
    println!("===========================================");
    println!("{loaded} products loaded");
    println!();

    println!("Categories:");
    println!("{}", store.categories());
    println!();

    println!("Catalog:");
    for product in store.list_products() {
        println!("  {product}");
    }
    println!();

    let codes: Vec<String> = store
        .list_products()
        .iter()
        .map(|p| p.code.clone())
        .collect();

    println!("Looking up products...");
    for code in codes.iter().take(3) {
        if let Some(product) = store.search_product(code) {
            println!("  found {product}");
        }
    }
    if store.search_product("XXX999").is_none() {
        println!("  XXX999 not found");
    }
    println!();

    println!("Placing orders...");
    let requests: [(&str, Vec<&str>); 2] = [
        ("Ana", codes.iter().take(2).map(String::as_str).collect()),
        ("Luis", vec!["XXX999"]),
    ];
    for (customer, order_codes) in requests {
        match store.create_order(customer, order_codes) {
            Ok(placed) => println!(
                "  order #{} for {customer}: {} product(s)",
                placed.number, placed.line_count
            ),
            Err(err) => println!("  order for {customer} rejected: {err}"),
        }
    }

    println!("Pending orders: {}", store.pending_count());
    for (position, order) in store.pending_orders() {
        println!("  {position}. {order}");
    }
    println!();

    while let Some(order) = store.process_next_order() {
        println!("Processing {order}");
        for product in &order.products {
            println!("  - {product}");
        }
        if let Some(total) = order.total() {
            println!("  total: ${}", price::from_fixed(total));
        }
    }
    println!();

    println!("Recently viewed (most recent first):");
    for (position, product) in store.view_history() {
        println!("  {position}. {product}");
    }
    println!();

    println!("Catalog digest: {}", store.catalog_digest_hex());
    Ok(())
}
