use std::cmp::Ordering;

use log::trace;

use crate::LlrbTreeMap;
use crate::balance::balance;
use crate::node::{Link, Node};

impl<K: Ord, V> LlrbTreeMap<K, V> {
    /// Insert `key`, or overwrite its value if already present.
    ///
    /// Returns the previous value on overwrite. An overwrite leaves the
    /// shape and the size of the tree unchanged.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (root, old) = Self::put(self.root.take(), key, value);
        self.root = Some(root);
        self.blacken_root();
        trace!("insert: len {}, overwrite {}", self.len(), old.is_some());
        self.check_boundary();
        old
    }

    fn put(h: Link<K, V>, key: K, value: V) -> (Box<Node<K, V>>, Option<V>) {
        let Some(mut h) = h else {
            return (Box::new(Node::new(key, value)), None);
        };

        let old = match key.cmp(&h.key) {
            Ordering::Less => {
                let (left, old) = Self::put(h.left.take(), key, value);
                h.left = Some(left);
                old
            }
            Ordering::Greater => {
                let (right, old) = Self::put(h.right.take(), key, value);
                h.right = Some(right);
                old
            }
            Ordering::Equal => Some(std::mem::replace(&mut h.value, value)),
        };

        (balance(h), old)
    }
}
