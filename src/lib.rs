//! # Stockroom
//!
//! In-memory core of an inventory and order console.
//!
//! ## Architecture
//!
//! - **Collections**: hand-built containers (chained hash table, FIFO queue,
//!   bounded-history stack, category tree)
//! - **Types**: domain values (Product, Order, fixed-point prices)
//! - **Store**: owns one of each container and exposes the inventory,
//!   order, history and category operations
//!
//! ## Design Principles
//!
//! 1. **Determinism**: a fixed sequence of operations always yields the same
//!    table order, queue order and catalog digest
//! 2. **No Floating Point** in prices: fixed-point cents
//! 3. **Explicit ownership**: every container is owned by a `Store` value;
//!    there is no global state
//! 4. **Synchronous, single-threaded**: nothing here is `Sync`-guarded

// ============================================================================
// Module declarations
// ============================================================================

/// Containers: hash table, queue, stack, category tree
pub mod collections;

/// Domain values: Product, Order, price helpers
pub mod types;

/// Inventory and order store
pub mod store;

/// Store configuration
pub mod config;

/// Error types
pub mod error;

/// JSON product ingestion
pub mod loader;

/// Tracing subscriber setup
pub mod logging;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use collections::{CategoryTree, ChainedHashTable, FifoQueue, LifoStack};
pub use config::StoreConfig;
pub use error::{CategoryError, LoadError, StoreError};
pub use store::{OrderPlacement, Store};
pub use types::{Order, Product};
