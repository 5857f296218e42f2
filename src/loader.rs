//! Product file ingestion.
//!
//! ## Format
//!
//! ```json
//! {
//!   "products": [
//!     { "code": "BAT001", "name": "Batman: Year One", "price": 15.99,
//!       "stock": 10, "category": "Batman" }
//!   ]
//! }
//! ```
//!
//! `price` may be a JSON number or a string; it is converted to fixed-point
//! cents through `rust_decimal`, never through `f64` arithmetic. Any price
//! that is negative or does not fit in `u64` cents is reported as
//! [`LoadError::InvalidPrice`] with the product code.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;
use crate::types::{price, Product};

#[derive(Debug, Deserialize)]
struct ProductFile {
    products: Vec<ProductRecord>,
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    code: String,
    name: String,
    price: RawPrice,
    stock: u32,
    category: String,
}

/// Price as written in the file, parsed only after the record is read
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(serde_json::Number),
    Text(String),
}

impl RawPrice {
    fn to_fixed(&self) -> Option<u64> {
        match self {
            RawPrice::Number(number) => price::to_fixed(&number.to_string()),
            RawPrice::Text(text) => price::to_fixed(text),
        }
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = LoadError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let price = record.price.to_fixed().ok_or_else(|| LoadError::InvalidPrice {
            code: record.code.clone(),
        })?;

        Ok(Product::new(
            record.code,
            record.name,
            price,
            record.stock,
            record.category,
        ))
    }
}

/// Parse a product document
pub fn parse_products(json: &str) -> Result<Vec<Product>, LoadError> {
    let file: ProductFile = serde_json::from_str(json)?;
    file.products.into_iter().map(Product::try_from).collect()
}

/// Read and parse a product file
pub fn load_products(path: impl AsRef<Path>) -> Result<Vec<Product>, LoadError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_products(&data)
}
