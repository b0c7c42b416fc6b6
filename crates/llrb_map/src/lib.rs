//! Ordered symbol table backed by a left-leaning red-black tree.
//!
//! [`LlrbTreeMap`] keeps its keys sorted and answers rank, floor and ceiling
//! queries in `O(log n)` whatever the insertion order. Red links only lean
//! left, so every tree is the image of exactly one 2-3 tree.

mod balance;
mod error;
mod insert;
mod iter;
mod node;
mod query;
mod remove;
mod std_btree;
mod validate;

#[cfg(test)]
mod test_util;

use std::fmt;

use node::{Color, Link, Node};

pub use error::{Error, InvariantViolation, Result};
pub use iter::Iter;
pub use std_btree::StdBTreeMap;
pub use validate::TreeStats;

/// Ordered map interface.
///
/// - Keys are unique.
/// - `insert` overwrites the existing value and returns the old one.
/// - `floor` returns the largest `(k, v)` with `k <= key`.
/// - `ceiling` returns the smallest `(k, v)` with `k >= key`.
pub trait OrderedMap {
    type Key: Ord;
    type Value;

    fn new() -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value>;

    fn floor(&self, key: &Self::Key) -> Option<(&Self::Key, &Self::Value)>;

    fn ceiling(&self, key: &Self::Key) -> Option<(&Self::Key, &Self::Value)>;
}

/// Sorted map over a left-leaning red-black BST.
///
/// Each node owns its children; there are no parent links. Mutations walk
/// down from the root and repair the invariants on the way back up, so the
/// height stays below `2 * log2(n + 1)`.
///
/// ```
/// use llrb_map::LlrbTreeMap;
///
/// let mut map = LlrbTreeMap::new();
/// for k in [5, 3, 8, 1, 4, 7, 9] {
///     map.insert(k, k * 10);
/// }
/// assert_eq!(map.rank(&7), 4);
/// assert_eq!(map.floor(&6), Some((&5, &50)));
/// assert_eq!(map.ceiling(&6), Some((&7, &70)));
/// ```
pub struct LlrbTreeMap<K, V> {
    root: Link<K, V>,
}

impl<K, V> LlrbTreeMap<K, V> {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn len(&self) -> usize {
        Node::size(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
    }

    /// The root of a non-empty tree is always black.
    fn blacken_root(&mut self) {
        if let Some(root) = self.root.as_deref_mut() {
            root.color = Color::Black;
        }
    }
}

impl<K: Ord, V> LlrbTreeMap<K, V> {
    /// Audit the tree after a mutation when boundary checks are enabled.
    #[inline]
    fn check_boundary(&self) {
        #[cfg(any(test, feature = "validate"))]
        {
            if let Err(violation) = self.validate() {
                panic!("red-black invariant broken after mutation: {violation}");
            }
        }
    }
}

impl<K, V> Default for LlrbTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for LlrbTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for LlrbTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for LlrbTreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a LlrbTreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord, V> OrderedMap for LlrbTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn new() -> Self {
        Self::new()
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, key: &Self::Key) -> Option<&Self::Value> {
        self.get(key)
    }

    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value> {
        self.insert(key, value)
    }

    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value> {
        self.remove(key).ok()
    }

    fn floor(&self, key: &Self::Key) -> Option<(&Self::Key, &Self::Value)> {
        self.floor(key)
    }

    fn ceiling(&self, key: &Self::Key) -> Option<(&Self::Key, &Self::Value)> {
        self.ceiling(key)
    }
}
