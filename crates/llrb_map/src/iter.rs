use std::iter::FusedIterator;

use crate::LlrbTreeMap;
use crate::node::{Link, Node};

impl<K, V> LlrbTreeMap<K, V> {
    /// All values in ascending key order.
    pub fn iter_ordered(&self) -> Vec<&V> {
        fn inorder<'a, K, V>(node: &'a Link<K, V>, out: &mut Vec<&'a V>) {
            if let Some(n) = node {
                inorder(&n.left, out);
                out.push(&n.value);
                inorder(&n.right, out);
            }
        }
        let mut out = Vec::with_capacity(self.len());
        inorder(&self.root, &mut out);
        out
    }

    /// All values in descending key order.
    pub fn iter_reverse(&self) -> Vec<&V> {
        fn reverse<'a, K, V>(node: &'a Link<K, V>, out: &mut Vec<&'a V>) {
            if let Some(n) = node {
                reverse(&n.right, out);
                out.push(&n.value);
                reverse(&n.left, out);
            }
        }
        let mut out = Vec::with_capacity(self.len());
        reverse(&self.root, &mut out);
        out
    }

    /// Lazy in-order iterator over the entries. Iterate from the back for
    /// descending order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            root: self.root.as_deref(),
            forward: None,
            backward: None,
            remaining: self.len(),
        }
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.iter().map(|(_, v)| v)
    }
}

/// In-order iterator over a [`LlrbTreeMap`].
///
/// Each direction keeps its own stack of ancestors that are still to be
/// visited, at most the height of the tree. The shared `remaining` count
/// stops the two ends from crossing.
pub struct Iter<'a, K, V> {
    root: Option<&'a Node<K, V>>,
    forward: Option<Vec<&'a Node<K, V>>>,
    backward: Option<Vec<&'a Node<K, V>>>,
    remaining: usize,
}

/// Push `node` and its whole left (or right, when `backwards`) spine.
fn dig<'a, K, V>(
    stack: &mut Vec<&'a Node<K, V>>,
    mut node: Option<&'a Node<K, V>>,
    backwards: bool,
) {
    while let Some(n) = node {
        stack.push(n);
        node = if backwards {
            n.right.as_deref()
        } else {
            n.left.as_deref()
        };
    }
}

impl<'a, K, V> Iter<'a, K, V> {
    fn step(&mut self, backwards: bool) -> Option<(&'a K, &'a V)> {
        if self.remaining == 0 {
            return None;
        }
        let root = self.root;
        let slot = if backwards {
            &mut self.backward
        } else {
            &mut self.forward
        };
        let stack = slot.get_or_insert_with(|| {
            let mut stack = Vec::new();
            dig(&mut stack, root, backwards);
            stack
        });

        let node = stack.pop()?;
        let next = if backwards {
            node.left.as_deref()
        } else {
            node.right.as_deref()
        };
        dig(stack, next, backwards);
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.step(false)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.step(true)
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            forward: self.forward.clone(),
            backward: self.backward.clone(),
            remaining: self.remaining,
        }
    }
}
