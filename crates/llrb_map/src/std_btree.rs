use std::collections::BTreeMap;

use crate::OrderedMap;

/// [`OrderedMap`] over the standard library B-tree, the baseline the
/// red-black map is measured and tested against.
pub struct StdBTreeMap<K: Ord, V> {
    inner: BTreeMap<K, V>,
}

impl<K: Ord, V> OrderedMap for StdBTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn get(&self, key: &Self::Key) -> Option<&Self::Value> {
        self.inner.get(key)
    }

    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value> {
        self.inner.insert(key, value)
    }

    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value> {
        self.inner.remove(key)
    }

    fn floor(&self, key: &Self::Key) -> Option<(&Self::Key, &Self::Value)> {
        self.inner.range(..=key).next_back()
    }

    fn ceiling(&self, key: &Self::Key) -> Option<(&Self::Key, &Self::Value)> {
        self.inner.range(key..).next()
    }
}
