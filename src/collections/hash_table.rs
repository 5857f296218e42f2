//! Chained hash table with a fixed bucket count.
//!
//! ## Design
//!
//! - `B` buckets, fixed at construction (default 100); never resized
//! - Each bucket is a chain of `(key, value)` pairs scanned linearly
//! - At most one pair per distinct key across the whole table
//!
//! ## Hashing
//!
//! The bucket index is the sum of the Unicode scalar values of the key's
//! `Display` text, modulo the bucket count. The text is streamed through a
//! `fmt::Write` adapter, so hashing never allocates. Keys that render to the
//! same text always land in the same bucket; key matching inside a chain
//! uses `Eq` on the key itself.
//!
//! ## Performance
//!
//! | Operation | Average | Worst (all keys collide) |
//! |-----------|---------|--------------------------|
//! | insert    | O(1)    | O(n)                     |
//! | search    | O(1)    | O(n)                     |
//! | delete    | O(1)    | O(n)                     |
//! | list_all  | O(B + n)| O(B + n)                 |
//!
//! ## Example
//!
//! ```
//! use stockroom::collections::ChainedHashTable;
//!
//! let mut table = ChainedHashTable::new();
//! table.insert("BAT001".to_string(), "Batman: Year One");
//!
//! assert_eq!(table.search("BAT001"), Some(&"Batman: Year One"));
//! assert!(table.delete("BAT001"));
//! assert_eq!(table.search("BAT001"), None);
//! ```

use std::borrow::Borrow;
use std::fmt::{self, Display, Write};

/// Default number of buckets
pub const DEFAULT_BUCKETS: usize = 100;

/// Running sum of character codes, fed by `Display` output.
struct CharSum(u64);

impl Write for CharSum {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 = s
            .chars()
            .fold(self.0, |acc, c| acc.wrapping_add(u64::from(c)));
        Ok(())
    }
}

/// Sum of the character codes of a key's textual representation
///
/// # Example
///
/// ```
/// use stockroom::collections::hash_table::char_code_sum;
///
/// assert_eq!(char_code_sum("AB"), 65 + 66);
/// assert_eq!(char_code_sum(&42u32), u64::from('4') + u64::from('2'));
/// ```
pub fn char_code_sum<K: Display + ?Sized>(key: &K) -> u64 {
    let mut sum = CharSum(0);
    // CharSum never fails; a Display impl that errors just truncates the sum
    let _ = write!(sum, "{key}");
    sum.0
}

/// Hash table resolving collisions by chaining.
#[derive(Debug, Clone)]
pub struct ChainedHashTable<K, V> {
    /// Fixed bucket array; each bucket is a collision chain
    buckets: Vec<Vec<(K, V)>>,

    /// Number of distinct keys stored
    len: usize,
}

impl<K: Display + Eq, V> Default for ChainedHashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Display + Eq, V> ChainedHashTable<K, V> {
    /// Create a table with [`DEFAULT_BUCKETS`] buckets
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    /// Create a table with a fixed number of buckets
    ///
    /// A bucket count of zero is clamped to one.
    pub fn with_buckets(bucket_count: usize) -> Self {
        let bucket_count = bucket_count.max(1);
        Self {
            buckets: (0..bucket_count).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of distinct keys stored
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Average chain length (entries per bucket)
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Length of the longest collision chain
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Bucket a key maps to
    pub fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Display + ?Sized,
    {
        (char_code_sum(key) % self.buckets.len() as u64) as usize
    }

    // ========================================================================
    // Entry Operations
    // ========================================================================

    /// Insert a key-value pair
    ///
    /// An existing entry for the key is overwritten in place and its old
    /// value returned; otherwise the pair is appended to the bucket chain.
    ///
    /// # Arguments
    ///
    /// * `key` - Entry key; its `Display` text picks the bucket
    /// * `value` - Value to store
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let chain = &mut self.buckets[index];

        if let Some(slot) = chain.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut slot.1, value));
        }

        chain.push((key, value));
        self.len += 1;
        None
    }

    /// Look up the value stored for a key
    ///
    /// # Arguments
    ///
    /// * `key` - Any borrowed form of the key (`&str` for `String` keys)
    pub fn search<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Display + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    /// Look up the value stored for a key, mutably
    pub fn search_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Display + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Display + Eq + ?Sized,
    {
        self.search(key).is_some()
    }

    /// Remove the entry for a key and return its value
    ///
    /// The remaining chain keeps its order.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Display + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let chain = &mut self.buckets[index];
        let position = chain.iter().position(|(k, _)| k.borrow() == key)?;

        self.len -= 1;
        Some(chain.remove(position).1)
    }

    /// Remove the entry for a key
    ///
    /// # Returns
    ///
    /// `true` if an entry was removed
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Display + Eq + ?Sized,
    {
        self.remove(key).is_some()
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// All stored values, in bucket order then chain order
    pub fn list_all(&self) -> Vec<&V> {
        self.iter().map(|(_, v)| v).collect()
    }

    /// All key-value pairs, in the same order as [`Self::list_all`]
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|(k, v)| (k, v)))
    }

    /// Remove every entry, keeping the bucket count
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.len = 0;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_new() {
        let table: ChainedHashTable<String, u32> = ChainedHashTable::new();

        assert_eq!(table.bucket_count(), DEFAULT_BUCKETS);
        assert!(table.is_empty());
        assert_eq!(table.longest_chain(), 0);
        assert!(table.list_all().is_empty());
    }

    #[test]
    fn test_table_zero_buckets_clamped() {
        let mut table = ChainedHashTable::with_buckets(0);
        assert_eq!(table.bucket_count(), 1);

        table.insert("a".to_string(), 1u32);
        assert_eq!(table.search("a"), Some(&1));
    }

    #[test]
    fn test_char_code_hash() {
        let table: ChainedHashTable<String, u32> = ChainedHashTable::new();

        // 'B'(66) + 'A'(65) + 'T'(84) + '0'(48) + '0'(48) + '1'(49) = 360
        assert_eq!(char_code_sum("BAT001"), 360);
        assert_eq!(table.bucket_index("BAT001"), 60);
    }

    #[test]
    fn test_table_insert_search() {
        let mut table = ChainedHashTable::new();
        table.insert("BAT001".to_string(), "Batman");
        table.insert("SUP001".to_string(), "Superman");

        assert_eq!(table.search("BAT001"), Some(&"Batman"));
        assert_eq!(table.search("SUP001"), Some(&"Superman"));
        assert_eq!(table.search("XXX999"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_table_overwrite_in_place() {
        let mut table = ChainedHashTable::new();

        assert_eq!(table.insert("K".to_string(), 1u32), None);
        assert_eq!(table.insert("K".to_string(), 2), Some(1));

        assert_eq!(table.search("K"), Some(&2));
        assert_eq!(table.len(), 1);
        assert_eq!(table.list_all().len(), 1);
    }

    #[test]
    fn test_table_colliding_keys() {
        let mut table = ChainedHashTable::new();

        // Anagrams share a character sum and therefore a bucket
        table.insert("AB".to_string(), 1u32);
        table.insert("BA".to_string(), 2);
        assert_eq!(table.bucket_index("AB"), table.bucket_index("BA"));
        assert_eq!(table.longest_chain(), 2);

        assert_eq!(table.search("AB"), Some(&1));
        assert_eq!(table.search("BA"), Some(&2));

        assert!(table.delete("AB"));
        assert_eq!(table.search("AB"), None);
        assert_eq!(table.search("BA"), Some(&2));
    }

    #[test]
    fn test_table_delete() {
        let mut table = ChainedHashTable::new();
        table.insert("SUP001".to_string(), "Superman");

        assert!(table.delete("SUP001"));
        assert!(!table.delete("SUP001"));
        assert!(table.is_empty());
        assert_eq!(table.search("SUP001"), None);
    }

    #[test]
    fn test_table_remove_returns_value() {
        let mut table = ChainedHashTable::new();
        table.insert("A".to_string(), 10u32);

        assert_eq!(table.remove("A"), Some(10));
        assert_eq!(table.remove("A"), None);
    }

    #[test]
    fn test_table_search_mut() {
        let mut table = ChainedHashTable::new();
        table.insert("A".to_string(), 10u32);

        if let Some(v) = table.search_mut("A") {
            *v += 5;
        }
        assert_eq!(table.search("A"), Some(&15));
        assert!(table.search_mut("missing").is_none());
    }

    #[test]
    fn test_table_list_all_bucket_order() {
        let mut table = ChainedHashTable::with_buckets(10);

        // '3' = 51 -> bucket 1, '1' = 49 -> bucket 9, '2' = 50 -> bucket 0
        table.insert("3".to_string(), "three");
        table.insert("1".to_string(), "one");
        table.insert("2".to_string(), "two");

        assert_eq!(table.list_all(), vec![&"two", &"three", &"one"]);
    }

    #[test]
    fn test_table_chain_order_after_delete() {
        let mut table = ChainedHashTable::with_buckets(1);
        table.insert("a".to_string(), 1u32);
        table.insert("b".to_string(), 2);
        table.insert("c".to_string(), 3);

        table.delete("a");
        assert_eq!(table.list_all(), vec![&2, &3]);
    }

    #[test]
    fn test_table_integer_keys() {
        let mut table = ChainedHashTable::with_buckets(7);
        table.insert(12u32, "twelve");
        table.insert(21u32, "twenty-one");

        // Same text sum, distinct keys
        assert_eq!(table.bucket_index(&12u32), table.bucket_index(&21u32));
        assert_eq!(table.search(&12u32), Some(&"twelve"));
        assert_eq!(table.search(&21u32), Some(&"twenty-one"));
    }

    #[test]
    fn test_table_load_factor_and_clear() {
        let mut table = ChainedHashTable::with_buckets(4);
        for key in ["a", "b", "c", "d", "e", "f", "g", "h"] {
            table.insert(key.to_string(), ());
        }
        assert!((table.load_factor() - 2.0).abs() < f64::EPSILON);

        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.bucket_count(), 4);
    }
}
