//! Domain values for the inventory core
//!
//! ## Types
//!
//! - [`Product`]: A catalog entry keyed by its product code
//! - [`Order`]: A customer order waiting in the processing queue
//!
//! ## Fixed-Point Prices
//!
//! Prices are stored as `u64` scaled by 10^2 (cents).
//! Example: 15.99 is stored as 1_599u64

mod order;
mod product;
pub mod price;

pub use order::Order;
pub use product::Product;
