//! Customer order waiting in the processing queue.

use std::fmt;

use crate::types::Product;

/// A customer order.
///
/// Orders are numbered by the store in creation order and hold snapshots
/// of the products they reference, taken when the order was placed.
///
/// ## Example
///
/// ```
/// use stockroom::types::{Order, Product};
///
/// let order = Order::new(
///     1,
///     "Ana",
///     vec![Product::new("BAT001", "Batman: Year One", 1_599, 10, "Batman")],
/// );
/// assert_eq!(order.to_string(), "Order #1 - Customer: Ana");
/// assert_eq!(order.total(), Some(1_599));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Order {
    /// Sequential order number (assigned by the store, starting at 1)
    pub number: u64,

    /// Customer name
    pub customer: String,

    /// Products in the order, in the order they were requested
    pub products: Vec<Product>,
}

impl Order {
    /// Create a new order
    pub fn new(number: u64, customer: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            number,
            customer: customer.into(),
            products,
        }
    }

    /// Number of product lines in the order
    pub fn line_count(&self) -> usize {
        self.products.len()
    }

    /// Sum of product prices in fixed-point cents
    ///
    /// Returns `None` on overflow.
    pub fn total(&self) -> Option<u64> {
        self.products
            .iter()
            .try_fold(0u64, |acc, product| acc.checked_add(product.price))
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Order #{} - Customer: {}", self.number, self.customer)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
