//! List node for slab-based storage.
//!
//! ## Design
//!
//! `ListNode` wraps a value with doubly-linked list pointers. The pointers
//! are slab keys (`usize`), not references, so a node can be unlinked from
//! either end of its list in O(1).
//!
//! ## Slab Integration
//!
//! Per the slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - Keys may be reused after `slab.remove()`
//! - O(1) insert, remove, and lookup

/// Node stored in the slab: a value plus its neighbours' keys.
#[derive(Debug, Clone)]
pub struct ListNode<T> {
    /// The stored value
    pub value: T,

    /// Next node towards the tail (slab key)
    /// None if this is the tail
    pub next: Option<usize>,

    /// Previous node towards the head (slab key)
    /// None if this is the head
    pub prev: Option<usize>,
}

impl<T> ListNode<T> {
    /// Create a new node (not yet linked)
    ///
    /// # Example
    ///
    /// ```
    /// use stockroom::collections::ListNode;
    ///
    /// let node = ListNode::new("Order #1");
    /// assert!(node.is_unlinked());
    /// ```
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            value,
            next: None,
            prev: None,
        }
    }

    /// Check if this node has no neighbours
    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }

    /// Consume the node and return its value
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
