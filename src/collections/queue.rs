//! FIFO queue for pending orders.
//!
//! Items are appended at the tail and consumed from the head; the queue
//! never reorders entries.
//!
//! ## Example
//!
//! ```
//! use stockroom::collections::FifoQueue;
//!
//! let mut queue = FifoQueue::new();
//! queue.enqueue("Order #1");
//! queue.enqueue("Order #2");
//!
//! assert_eq!(queue.front(), Some(&"Order #1"));
//! assert_eq!(queue.dequeue(), Some("Order #1"));
//! assert_eq!(queue.size(), 1);
//! ```

use crate::collections::list::{Iter, SlabList};

/// First-in, first-out queue.
#[derive(Debug, Clone)]
pub struct FifoQueue<T> {
    items: SlabList<T>,
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FifoQueue<T> {
    pub fn new() -> Self {
        Self {
            items: SlabList::new(),
        }
    }

    /// Append an item at the tail - O(1)
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the head item, or `None` if the queue is empty
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Borrow the head item without removing it
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Iterate from head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    /// Items in head-to-tail order, numbered from 1 for presentation
    pub fn display(&self) -> Vec<(usize, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (i + 1, item))
            .collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
