//! Slab-backed doubly linked list.
//!
//! ## Structure
//!
//! ```text
//! head (oldest) <-> node2 <-> node3 <-> tail (newest)
//! ```
//!
//! - `push_back` appends at the tail
//! - `pop_front` removes the oldest node, `pop_back` the newest
//! - Node storage lives in a `Slab`, so freed slots are reused
//!
//! The FIFO queue consumes from the head; the LIFO stack treats the tail as
//! its top and the head as its oldest entry.

use slab::Slab;

use crate::collections::ListNode;

/// A doubly linked list whose nodes live in a slab.
#[derive(Debug, Clone)]
pub struct SlabList<T> {
    /// Node storage
    nodes: Slab<ListNode<T>>,

    /// Oldest node (slab key)
    head: Option<usize>,

    /// Newest node (slab key)
    tail: Option<usize>,

    /// Number of linked nodes
    len: usize,
}

impl<T> Default for SlabList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SlabList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Create an empty list with pre-allocated node slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a value at the tail
    ///
    /// # Returns
    ///
    /// The slab key of the new node
    pub fn push_back(&mut self, value: T) -> usize {
        let key = self.nodes.insert(ListNode::new(value));

        if let Some(tail_key) = self.tail {
            self.nodes[key].prev = Some(tail_key);
            self.nodes[tail_key].next = Some(key);
        } else {
            // Empty list - this is also the head
            self.head = Some(key);
        }

        self.tail = Some(key);
        self.len += 1;
        key
    }

    /// Remove and return the head value (oldest)
    pub fn pop_front(&mut self) -> Option<T> {
        let key = self.head?;
        Some(self.unlink(key))
    }

    /// Remove and return the tail value (newest)
    pub fn pop_back(&mut self) -> Option<T> {
        let key = self.tail?;
        Some(self.unlink(key))
    }

    /// Borrow the head value
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|key| &self.nodes[key].value)
    }

    /// Borrow the tail value
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|key| &self.nodes[key].value)
    }

    /// Iterate from head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
            forward: true,
            remaining: self.len,
        }
    }

    /// Iterate from tail to head
    pub fn iter_rev(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cursor: self.tail,
            forward: false,
            remaining: self.len,
        }
    }

    /// Remove all nodes
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Unlink a node by slab key and free its slot
    fn unlink(&mut self, key: usize) -> T {
        let node = self.nodes.remove(key);

        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => self.head = node.next,
        }

        match node.next {
            Some(next) => self.nodes[next].prev = node.prev,
            None => self.tail = node.prev,
        }

        self.len -= 1;
        node.into_value()
    }
}

/// Borrowing iterator over a [`SlabList`] in either direction.
pub struct Iter<'a, T> {
    nodes: &'a Slab<ListNode<T>>,
    cursor: Option<usize>,
    forward: bool,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        let node = &self.nodes[key];
        self.cursor = if self.forward { node.next } else { node.prev };
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

// ============================================================================
// Unit Tests
// ============================================================================
