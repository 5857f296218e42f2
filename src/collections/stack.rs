//! LIFO stack for the product view history.
//!
//! The top of the stack is the list tail. The stack itself is unbounded;
//! a caller that wants a bounded history removes the oldest entry with
//! [`LifoStack::evict_oldest`] before pushing, which takes from the opposite
//! end to [`LifoStack::pop`].
//!
//! ## Example
//!
//! ```
//! use stockroom::collections::LifoStack;
//!
//! let mut history = LifoStack::new();
//! history.push("BAT001");
//! history.push("SUP001");
//!
//! assert_eq!(history.peek(), Some(&"SUP001"));
//! assert_eq!(history.evict_oldest(), Some("BAT001"));
//! assert_eq!(history.size(), 1);
//! ```

use crate::collections::list::{Iter, SlabList};

/// Last-in, first-out stack.
#[derive(Debug, Clone)]
pub struct LifoStack<T> {
    items: SlabList<T>,
}

impl<T> Default for LifoStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LifoStack<T> {
    pub fn new() -> Self {
        Self {
            items: SlabList::new(),
        }
    }

    /// Push an item on top - O(1)
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the top item, or `None` if empty
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// Borrow the top item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.back()
    }

    /// Remove and return the bottom item (least recently pushed)
    pub fn evict_oldest(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Iterate from most recently pushed to least recently pushed
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter_rev()
    }

    /// Items from most recent to oldest, numbered from 1 for presentation
    pub fn display(&self) -> Vec<(usize, &T)> {
        self.iter()
            .enumerate()
            .map(|(i, item)| (i + 1, item))
            .collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
