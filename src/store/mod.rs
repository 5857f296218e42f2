//! Inventory and order store.
//!
//! ## Components
//!
//! The store owns exactly one instance of each container:
//!
//! - **Product table**: [`ChainedHashTable`] keyed by product code
//! - **Order queue**: [`FifoQueue`] of pending [`Order`]s, processed in arrival order
//! - **View history**: [`LifoStack`] of recently viewed products, capped at
//!   [`StoreConfig::history_limit`] by evicting the oldest entry
//! - **Category tree**: [`CategoryTree`] of category names
//!
//! Orders and history entries hold snapshots of products taken when they
//! were recorded; later price or stock edits do not reach them.
//!
//! ## Example
//!
//! ```
//! use stockroom::config::StoreConfig;
//! use stockroom::store::Store;
//! use stockroom::types::Product;
//!
//! let mut store = Store::with_default_categories(StoreConfig::default());
//! store.add_product(Product::new("BAT001", "Batman: Year One", 1_599, 10, "Batman"));
//!
//! let placed = store.create_order("Ana", ["BAT001", "NOPE"]).unwrap();
//! assert_eq!(placed.number, 1);
//! assert_eq!(placed.missing, vec!["NOPE".to_string()]);
//!
//! let order = store.process_next_order().unwrap();
//! assert_eq!(order.customer, "Ana");
//! ```

pub mod categories;

use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use crate::collections::{CategoryId, CategoryTree, ChainedHashTable, FifoQueue, LifoStack};
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::types::{Order, Product};

/// Outcome of a successfully placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderPlacement {
    /// Number assigned to the order
    pub number: u64,

    /// Products that resolved and went into the order
    pub line_count: usize,

    /// Requested codes that were not in the catalog
    pub missing: Vec<String>,
}

/// In-memory inventory, order queue, view history and category tree.
#[derive(Debug, Clone)]
pub struct Store {
    config: StoreConfig,
    products: ChainedHashTable<String, Product>,
    order_queue: FifoQueue<Order>,
    view_history: LifoStack<Product>,
    category_tree: CategoryTree,
    next_order_number: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl Store {
    /// Create an empty store
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            products: ChainedHashTable::with_buckets(config.bucket_count),
            order_queue: FifoQueue::new(),
            view_history: LifoStack::new(),
            category_tree: CategoryTree::new(),
            next_order_number: 1,
        }
    }

    /// Create a store with the default category hierarchy
    pub fn with_default_categories(config: StoreConfig) -> Self {
        let mut store = Self::new(config);
        // Every parent in the default list precedes its children
        if let Err(err) = categories::seed(&mut store.category_tree) {
            warn!(error = %err, "default category seeding incomplete");
        }
        store
    }

    #[inline]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    #[inline]
    pub fn products(&self) -> &ChainedHashTable<String, Product> {
        &self.products
    }

    #[inline]
    pub fn category_tree(&self) -> &CategoryTree {
        &self.category_tree
    }

    /// Number the next placed order will get
    #[inline]
    pub fn peek_next_order_number(&self) -> u64 {
        self.next_order_number
    }

    // ========================================================================
    // Products
    // ========================================================================

    /// Add a product, replacing any product with the same code
    pub fn add_product(&mut self, product: Product) {
        let code = product.code.clone();
        if self.products.insert(code.clone(), product).is_some() {
            info!(%code, "product replaced");
        } else {
            info!(%code, "product added");
        }
    }

    /// Add many products
    ///
    /// # Returns
    ///
    /// The number of products processed
    pub fn add_products(&mut self, products: impl IntoIterator<Item = Product>) -> usize {
        let mut count = 0;
        for product in products {
            self.products.insert(product.code.clone(), product);
            count += 1;
        }

        info!(
            count,
            distinct = self.products.len(),
            load_factor = self.products.load_factor(),
            longest_chain = self.products.longest_chain(),
            "products loaded"
        );
        count
    }

    /// Look up a product by code and record it in the view history
    pub fn search_product(&mut self, code: &str) -> Option<Product> {
        let Some(product) = self.products.search(code).cloned() else {
            debug!(%code, "product lookup missed");
            return None;
        };

        debug!(%code, "product lookup hit");
        self.record_view(product.clone());
        Some(product)
    }

    /// Edit price and/or stock of an existing product in place
    ///
    /// # Arguments
    ///
    /// * `code` - Product code
    /// * `new_price` - New price in cents, or `None` to keep it
    /// * `new_stock` - New stock count, or `None` to keep it
    ///
    /// # Errors
    ///
    /// [`StoreError::ProductNotFound`] if no product has that code.
    pub fn update_product(
        &mut self,
        code: &str,
        new_price: Option<u64>,
        new_stock: Option<u32>,
    ) -> Result<&Product, StoreError> {
        let product = self
            .products
            .search_mut(code)
            .ok_or_else(|| StoreError::ProductNotFound {
                code: code.to_string(),
            })?;

        if let Some(price) = new_price {
            product.price = price;
        }
        if let Some(stock) = new_stock {
            product.stock = stock;
        }

        info!(%code, price = product.price, stock = product.stock, "product updated");
        Ok(&*product)
    }

    /// Remove a product from the catalog
    pub fn delete_product(&mut self, code: &str) -> Result<Product, StoreError> {
        let product = self
            .products
            .remove(code)
            .ok_or_else(|| StoreError::ProductNotFound {
                code: code.to_string(),
            })?;

        info!(%code, "product deleted");
        Ok(product)
    }

    /// All products in table order
    pub fn list_products(&self) -> Vec<&Product> {
        self.products.list_all()
    }

    /// Products filed under a category or any of its subcategories
    pub fn products_in_category(&self, name: &str) -> Vec<&Product> {
        let names = self.category_tree.list_subcategories(name);
        if names.is_empty() {
            return Vec::new();
        }

        self.products
            .list_all()
            .into_iter()
            .filter(|product| names.contains(&product.category.as_str()))
            .collect()
    }

    // ========================================================================
    // Orders
    // ========================================================================

    /// Resolve product codes and queue an order
    ///
    /// Unknown codes are skipped and reported in [`OrderPlacement::missing`].
    ///
    /// # Arguments
    ///
    /// * `customer` - Name recorded on the order
    /// * `codes` - Product codes, in the order they should appear
    ///
    /// # Errors
    ///
    /// [`StoreError::NoValidProducts`] if none of the codes resolve; no
    /// order number is consumed in that case.
    pub fn create_order<I, S>(&mut self, customer: &str, codes: I) -> Result<OrderPlacement, StoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut products = Vec::new();
        let mut missing = Vec::new();

        for code in codes {
            let code = code.as_ref();
            match self.products.search(code) {
                Some(product) => products.push(product.clone()),
                None => missing.push(code.to_string()),
            }
        }

        if !missing.is_empty() {
            warn!(customer, missing = ?missing, "order references unknown product codes");
        }

        if products.is_empty() {
            return Err(StoreError::NoValidProducts { missing });
        }

        let number = self.next_order_number;
        self.next_order_number += 1;

        let line_count = products.len();
        self.order_queue.enqueue(Order::new(number, customer, products));
        info!(number, customer, line_count, pending = self.order_queue.size(), "order queued");

        Ok(OrderPlacement {
            number,
            line_count,
            missing,
        })
    }

    /// Take the oldest pending order
    pub fn process_next_order(&mut self) -> Option<Order> {
        let order = self.order_queue.dequeue()?;
        info!(
            number = order.number,
            customer = %order.customer,
            pending = self.order_queue.size(),
            "order processed"
        );
        Some(order)
    }

    /// Peek at the oldest pending order
    pub fn next_order(&self) -> Option<&Order> {
        self.order_queue.front()
    }

    /// Pending orders, oldest first, numbered from 1
    pub fn pending_orders(&self) -> Vec<(usize, &Order)> {
        self.order_queue.display()
    }

    #[inline]
    pub fn pending_count(&self) -> usize {
        self.order_queue.size()
    }

    // ========================================================================
    // View History
    // ========================================================================

    /// Viewed products, most recent first, numbered from 1
    pub fn view_history(&self) -> Vec<(usize, &Product)> {
        self.view_history.display()
    }

    fn record_view(&mut self, product: Product) {
        let limit = self.config.history_limit;
        if limit == 0 {
            return;
        }

        while self.view_history.size() >= limit {
            if let Some(evicted) = self.view_history.evict_oldest() {
                debug!(code = %evicted.code, "history entry evicted");
            }
        }
        self.view_history.push(product);
    }

    // ========================================================================
    // Categories
    // ========================================================================

    /// Add a category under an optional parent
    ///
    /// # Errors
    ///
    /// [`StoreError::Category`] wrapping `InvalidParent` when the parent is
    /// unknown; the category is still registered by name.
    pub fn create_category(&mut self, name: &str, parent: Option<&str>) -> Result<CategoryId, StoreError> {
        match self.category_tree.add(name, parent) {
            Ok(id) => {
                info!(name, parent, "category created");
                Ok(id)
            }
            Err(err) => {
                warn!(error = %err, "category registered without a parent link");
                Err(err.into())
            }
        }
    }

    /// Indented rendering of the category tree
    pub fn categories(&self) -> String {
        self.category_tree.render()
    }

    // ========================================================================
    // Catalog Digest
    // ========================================================================

    /// SHA-256 over the catalog in table order
    ///
    /// Each product contributes its length-prefixed code, name and category
    /// plus little-endian price and stock. The digest depends on table order,
    /// so two stores agree only if they saw the same operation sequence with
    /// the same bucket count.
    pub fn catalog_digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update((self.products.len() as u64).to_le_bytes());

        for product in self.products.list_all() {
            for field in [&product.code, &product.name, &product.category] {
                hasher.update((field.len() as u64).to_le_bytes());
                hasher.update(field.as_bytes());
            }
            hasher.update(product.price.to_le_bytes());
            hasher.update(product.stock.to_le_bytes());
        }

        let result = hasher.finalize();
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&result);
        hash
    }

    /// Catalog digest as a hex string
    pub fn catalog_digest_hex(&self) -> String {
        hex::encode(self.catalog_digest())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
