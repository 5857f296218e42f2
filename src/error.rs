//! Error types.
//!
//! Lookups that simply miss return `Option::None`; these enums cover the
//! cases where the caller asked for a change that could not be applied.

use std::path::PathBuf;

use thiserror::Error;

/// Category tree failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    /// The parent name is not registered. The new category was still
    /// registered under `name` but is not linked into the tree.
    #[error("parent category '{parent}' does not exist (category '{name}' left unlinked)")]
    InvalidParent { name: String, parent: String },
}

/// Inventory and order failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("product '{code}' not found")]
    ProductNotFound { code: String },

    #[error("order has no valid products (unknown codes: {})", missing.join(", "))]
    NoValidProducts { missing: Vec<String> },

    #[error(transparent)]
    Category(#[from] CategoryError),
}

/// Product file loading failures
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read product file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed product data")]
    Json(#[from] serde_json::Error),

    #[error("product '{code}' has an invalid price")]
    InvalidPrice { code: String },
}
