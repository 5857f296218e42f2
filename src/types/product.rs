//! Product record stored in the catalog.
//!
//! Prices use the fixed-point representation from [`crate::types::price`]
//! (whole cents in a `u64`).

use std::fmt;

use crate::types::price;

/// A product held in the inventory.
///
/// ## Example
///
/// ```
/// use stockroom::types::Product;
///
/// let product = Product::new("BAT001", "Batman: Year One", 1_599, 10, "Batman");
/// assert_eq!(product.to_string(), "[BAT001] Batman: Year One - $15.99 (Stock: 10)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Product {
    /// Unique product code, used as the catalog key
    pub code: String,

    /// Display name
    pub name: String,

    /// Unit price in fixed-point cents
    pub price: u64,

    /// Units in stock
    pub stock: u32,

    /// Name of the category this product belongs to
    pub category: String,
}

impl Product {
    /// Create a new product
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        price: u64,
        stock: u32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price,
            stock,
            category: category.into(),
        }
    }

    /// Check whether any units are left
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} - ${} (Stock: {})",
            self.code,
            self.name,
            price::from_fixed(self.price),
            self.stock
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_new() {
        let product = Product::new("SUP001", "Superman: Red Son", 1_850, 4, "Superman");

        assert_eq!(product.code, "SUP001");
        assert_eq!(product.name, "Superman: Red Son");
        assert_eq!(product.price, 1_850);
        assert_eq!(product.stock, 4);
        assert_eq!(product.category, "Superman");
        assert!(product.in_stock());
    }

    #[test]
    fn test_product_display() {
        let product = Product::new("MAR001", "Spider-Man: Blue", 1_200, 0, "Spider-Man");

        assert_eq!(
            product.to_string(),
            "[MAR001] Spider-Man: Blue - $12.00 (Stock: 0)"
        );
        assert!(!product.in_stock());
    }
}
