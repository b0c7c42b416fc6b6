use std::cmp::Ordering;

use log::debug;

use crate::LlrbTreeMap;
use crate::error::{Error, Result};
use crate::node::{Link, Node};

impl<K: Ord, V> LlrbTreeMap<K, V> {
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut cur = self.root.as_deref_mut();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref_mut(),
                Ordering::Greater => cur = node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            }
        }
        None
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Entry with the largest key `<= key`.
    pub fn floor(&self, key: &K) -> Option<(&K, &V)> {
        Self::floor_node(&self.root, key).map(|n| (&n.key, &n.value))
    }

    fn floor_node<'a>(node: &'a Link<K, V>, key: &K) -> Option<&'a Node<K, V>> {
        let node = node.as_deref()?;
        match key.cmp(&node.key) {
            Ordering::Equal => Some(node),
            Ordering::Less => Self::floor_node(&node.left, key),
            Ordering::Greater => Self::floor_node(&node.right, key).or(Some(node)),
        }
    }

    /// Entry with the smallest key `>= key`.
    pub fn ceiling(&self, key: &K) -> Option<(&K, &V)> {
        Self::ceiling_node(&self.root, key).map(|n| (&n.key, &n.value))
    }

    fn ceiling_node<'a>(node: &'a Link<K, V>, key: &K) -> Option<&'a Node<K, V>> {
        let node = node.as_deref()?;
        match key.cmp(&node.key) {
            Ordering::Equal => Some(node),
            Ordering::Less => Self::ceiling_node(&node.left, key).or(Some(node)),
            Ordering::Greater => Self::ceiling_node(&node.right, key),
        }
    }

    /// Number of keys strictly less than `key`. `key` need not be present.
    pub fn rank(&self, key: &K) -> usize {
        let mut rank = 0;
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => {
                    rank += 1 + Node::size(&node.left);
                    cur = node.right.as_deref();
                }
                Ordering::Equal => return rank + Node::size(&node.left),
            }
        }
        rank
    }

    /// Number of keys in `lo..=hi`.
    pub fn count_range(&self, lo: &K, hi: &K) -> usize {
        if lo > hi {
            return 0;
        }
        let upper = self.rank(hi) + usize::from(self.contains_key(hi));
        upper - self.rank(lo)
    }
}

impl<K, V> LlrbTreeMap<K, V> {
    pub fn min(&self) -> Result<(&K, &V)> {
        let Some(mut node) = self.root.as_deref() else {
            debug!("min: tree is empty");
            return Err(Error::EmptyTree);
        };
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok((&node.key, &node.value))
    }

    pub fn max(&self) -> Result<(&K, &V)> {
        let Some(mut node) = self.root.as_deref() else {
            debug!("max: tree is empty");
            return Err(Error::EmptyTree);
        };
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok((&node.key, &node.value))
    }

    /// Entry of the given rank (0-indexed), the inverse of [`rank`](Self::rank).
    pub fn select(&self, mut rank: usize) -> Option<(&K, &V)> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            let left = Node::size(&node.left);
            match rank.cmp(&left) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Equal => return Some((&node.key, &node.value)),
                Ordering::Greater => {
                    rank -= left + 1;
                    cur = node.right.as_deref();
                }
            }
        }
        None
    }

    /// Nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn height(&self) -> usize {
        fn height<K, V>(node: &Link<K, V>) -> usize {
            node.as_ref()
                .map(|n| 1 + height(&n.left).max(height(&n.right)))
                .unwrap_or(0)
        }
        height(&self.root)
    }
}
