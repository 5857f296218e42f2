//! Store configuration.

use crate::collections::hash_table::DEFAULT_BUCKETS;

/// Number of viewed products kept in the history
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// Sizing knobs for a [`crate::store::Store`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Buckets in the product table (fixed for the store's lifetime)
    pub bucket_count: usize,

    /// Maximum entries in the view history; the oldest entry is evicted first
    pub history_limit: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKETS,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl StoreConfig {
    pub fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    pub fn with_history_limit(mut self, history_limit: usize) -> Self {
        self.history_limit = history_limit;
        self
    }
}
