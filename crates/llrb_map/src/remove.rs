//! Top-down deletion.
//!
//! On the way down the current node is kept red or with a red left child, by
//! borrowing red links with `move_red_left` / `move_red_right`, so that the
//! node finally unlinked is never a lone 2-node. Temporary right-leaning reds
//! and 4-nodes created on the way down are repaired by `balance` on the way
//! back up.

use std::cmp::Ordering;

use log::{debug, trace};

use crate::LlrbTreeMap;
use crate::balance::{balance, has_red_left, is_red, move_red_left, move_red_right, rotate_right};
use crate::error::{Error, Result};
use crate::node::{Color, Link, Node};

impl<K: Ord, V> LlrbTreeMap<K, V> {
    /// Remove and return the entry with the smallest key.
    pub fn delete_min(&mut self) -> Result<(K, V)> {
        let Some(root) = self.take_root_for_delete() else {
            debug!("delete_min: tree is empty");
            return Err(Error::EmptyTree);
        };
        let (rest, min) = Self::delete_min_node(root);
        self.root = rest;
        self.blacken_root();
        trace!("delete_min: len {}", self.len());
        self.check_boundary();
        Ok((min.key, min.value))
    }

    /// Remove and return the entry with the largest key.
    pub fn delete_max(&mut self) -> Result<(K, V)> {
        let Some(root) = self.take_root_for_delete() else {
            debug!("delete_max: tree is empty");
            return Err(Error::EmptyTree);
        };
        let (rest, max) = Self::delete_max_node(root);
        self.root = rest;
        self.blacken_root();
        trace!("delete_max: len {}", self.len());
        self.check_boundary();
        Ok((max.key, max.value))
    }

    /// Remove `key` and return its value.
    ///
    /// Fails with [`Error::EmptyTree`] on an empty tree and with
    /// [`Error::NotFound`] when `key` is absent; in both cases the tree is
    /// left untouched.
    pub fn remove(&mut self, key: &K) -> Result<V> {
        if self.is_empty() {
            debug!("remove: tree is empty");
            return Err(Error::EmptyTree);
        }
        // The descent below assumes the key exists.
        if !self.contains_key(key) {
            debug!("remove: key not found, tree left as is");
            return Err(Error::NotFound);
        }
        let Some(root) = self.take_root_for_delete() else {
            return Err(Error::EmptyTree);
        };
        let (rest, removed) = Self::delete_node(root, key);
        self.root = rest;
        self.blacken_root();
        trace!("remove: len {}", self.len());
        self.check_boundary();
        Ok(removed)
    }

    /// Detach the root, reddening it when both children are black so the
    /// descent has a red link to push down.
    fn take_root_for_delete(&mut self) -> Link<K, V> {
        let mut root = self.root.take()?;
        if !is_red(&root.left) && !is_red(&root.right) {
            root.color = Color::Red;
        }
        Some(root)
    }

    /// Returns the remaining subtree and the detached minimum node.
    fn delete_min_node(mut h: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
        if h.left.is_none() {
            return (h.right.take(), h);
        }
        if !is_red(&h.left) && !has_red_left(&h.left) {
            h = move_red_left(h);
        }
        let left = h.left.take().expect("move_red_left keeps a left child");
        let (left, min) = Self::delete_min_node(left);
        h.left = left;
        (Some(balance(h)), min)
    }

    fn delete_max_node(mut h: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
        if is_red(&h.left) {
            h = rotate_right(h);
        }
        if h.right.is_none() {
            return (h.left.take(), h);
        }
        if !is_red(&h.right) && !has_red_left(&h.right) {
            h = move_red_right(h);
        }
        let right = h.right.take().expect("move_red_right keeps a right child");
        let (right, max) = Self::delete_max_node(right);
        h.right = right;
        (Some(balance(h)), max)
    }

    /// `key` must be present in the subtree rooted at `h`.
    fn delete_node(mut h: Box<Node<K, V>>, key: &K) -> (Link<K, V>, V) {
        if *key < h.key {
            if !is_red(&h.left) && !has_red_left(&h.left) {
                h = move_red_left(h);
            }
            let left = h.left.take().expect("present key below a missing left child");
            let (left, removed) = Self::delete_node(left, key);
            h.left = left;
            return (Some(balance(h)), removed);
        }

        if is_red(&h.left) {
            h = rotate_right(h);
        }
        if *key == h.key && h.right.is_none() {
            // A red leaf by now: unlink it.
            let node = *h;
            return (node.left, node.value);
        }
        if !is_red(&h.right) && !has_red_left(&h.right) {
            h = move_red_right(h);
        }

        let right = h.right.take().expect("present key below a missing right child");
        let removed = match key.cmp(&h.key) {
            Ordering::Equal => {
                // Replace with the in-order successor, then unlink the successor.
                let (right, successor) = Self::delete_min_node(right);
                h.right = right;
                let Node {
                    key: next_key,
                    value: next_value,
                    ..
                } = *successor;
                h.key = next_key;
                std::mem::replace(&mut h.value, next_value)
            }
            _ => {
                let (right, removed) = Self::delete_node(right, key);
                h.right = right;
                removed
            }
        };
        (Some(balance(h)), removed)
    }
}
