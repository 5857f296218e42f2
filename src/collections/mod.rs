//! Hand-built containers behind the inventory core.
//!
//! ## Components
//!
//! - [`ChainedHashTable`]: fixed-bucket hash table with chaining (product lookup)
//! - [`FifoQueue`]: first-in, first-out queue (pending orders)
//! - [`LifoStack`]: last-in, first-out stack with oldest-first eviction (view history)
//! - [`CategoryTree`]: n-ary tree with a name registry (category hierarchy)
//!
//! The queue and stack share [`SlabList`], a doubly linked list whose nodes
//! live in a slab.
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Table insert/search/delete | O(1) average, O(n) worst |
//! | Queue enqueue/dequeue | O(1) |
//! | Stack push/pop/evict_oldest | O(1) |
//! | Tree add/search | O(1) average |
//! | Tree list_subcategories | O(subtree) |
//!
//! None of the containers are synchronized; wrap each instance in its own
//! lock if it has to be shared between threads.

pub mod category_tree;
pub mod hash_table;
pub mod list;
pub mod node;
pub mod queue;
pub mod stack;

pub use category_tree::{CategoryId, CategoryNode, CategoryTree};
pub use hash_table::ChainedHashTable;
pub use list::SlabList;
pub use node::ListNode;
pub use queue::FifoQueue;
pub use stack::LifoStack;
