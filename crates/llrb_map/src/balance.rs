//! Rotations, color flips and the local fix-ups composed from them.
//!
//! Every function takes ownership of a subtree root and hands back the
//! (possibly different) root of the same key set. Subtree sizes are kept
//! exact on every node that changes position.

use crate::node::{Color, Link, Node};

/// Absent links are black.
pub(crate) fn is_red<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().is_some_and(|n| n.is_red())
}

/// Whether `link` exists and its left child is red.
pub(crate) fn has_red_left<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().is_some_and(|n| is_red(&n.left))
}

/// Turn a right-leaning red link into a left-leaning one.
pub(crate) fn rotate_left<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut x = h.right.take().expect("rotate_left requires a right child");
    h.right = x.left.take();
    x.color = h.color;
    h.color = Color::Red;
    x.size = h.size;
    h.recalc();
    x.left = Some(h);
    x
}

/// Turn a left-leaning red link into a right-leaning one.
pub(crate) fn rotate_right<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut x = h.left.take().expect("rotate_right requires a left child");
    h.left = x.right.take();
    x.color = h.color;
    h.color = Color::Red;
    x.size = h.size;
    h.recalc();
    x.right = Some(h);
    x
}

/// Toggle `h` and both children. Splits a temporary 4-node on the way up,
/// or borrows a red link from the parent on the way down.
pub(crate) fn flip_colors<K, V>(h: &mut Node<K, V>) {
    h.color = h.color.flip();
    if let Some(left) = h.left.as_deref_mut() {
        left.color = left.color.flip();
    }
    if let Some(right) = h.right.as_deref_mut() {
        right.color = right.color.flip();
    }
}

/// Requires `h` red with `h.left` and `h.left.left` black. Makes `h.left` or
/// one of its children red so the descent can continue to the left.
pub(crate) fn move_red_left<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    flip_colors(&mut h);
    if has_red_left(&h.right) {
        h.right = h.right.take().map(rotate_right);
        h = rotate_left(h);
        flip_colors(&mut h);
    }
    h
}

/// Requires `h` red with `h.right` and `h.right.left` black. Makes `h.right`
/// or one of its children red so the descent can continue to the right.
pub(crate) fn move_red_right<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    flip_colors(&mut h);
    if has_red_left(&h.left) {
        h = rotate_right(h);
        flip_colors(&mut h);
    }
    h
}

/// Restore the left-leaning invariants at `h` on the way back up.
///
/// The order of the three checks matters: a right-leaning red is rotated
/// first, which can expose two reds in a row on the left, which in turn can
/// produce a node with two red children.
pub(crate) fn balance<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if is_red(&h.right) && !is_red(&h.left) {
        h = rotate_left(h);
    }
    if is_red(&h.left) && has_red_left(&h.left) {
        h = rotate_right(h);
    }
    if is_red(&h.left) && is_red(&h.right) {
        flip_colors(&mut h);
    }
    h.recalc();
    h
}
