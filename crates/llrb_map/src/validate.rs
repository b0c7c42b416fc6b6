use crate::LlrbTreeMap;
use crate::balance::is_red;
use crate::error::InvariantViolation;
use crate::node::{Link, Node};

/// Shape summary returned by a successful [`LlrbTreeMap::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    pub len: usize,
    pub height: usize,
    /// Black links on every root-to-leaf path.
    pub black_height: usize,
}

impl<K: Ord, V> LlrbTreeMap<K, V> {
    /// Check every red-black invariant: black root, left-leaning reds, no two
    /// reds in a row, perfect black balance, exact subtree sizes and key order.
    pub fn validate(&self) -> Result<TreeStats, InvariantViolation> {
        if is_red(&self.root) {
            return Err(InvariantViolation::RedRoot);
        }
        let black_height = Self::validate_node(&self.root, None, None)?;
        Ok(TreeStats {
            len: self.len(),
            height: self.height(),
            black_height,
        })
    }

    /// Returns the black height of `node`. Keys must lie strictly between
    /// `lo` and `hi` when given.
    fn validate_node(
        node: &Link<K, V>,
        lo: Option<&K>,
        hi: Option<&K>,
    ) -> Result<usize, InvariantViolation> {
        let Some(n) = node.as_deref() else {
            return Ok(0);
        };

        if is_red(&n.right) {
            return Err(InvariantViolation::RightLeaningRed);
        }
        if n.is_red() && is_red(&n.left) {
            return Err(InvariantViolation::ConsecutiveReds);
        }
        if lo.is_some_and(|lo| n.key <= *lo) || hi.is_some_and(|hi| n.key >= *hi) {
            return Err(InvariantViolation::OutOfOrder);
        }

        let left = Self::validate_node(&n.left, lo, Some(&n.key))?;
        let right = Self::validate_node(&n.right, Some(&n.key), hi)?;
        if left != right {
            return Err(InvariantViolation::UnbalancedBlacks { left, right });
        }

        let expected = 1 + Node::size(&n.left) + Node::size(&n.right);
        if n.size != expected {
            return Err(InvariantViolation::SizeMismatch {
                expected,
                actual: n.size,
            });
        }

        Ok(left + usize::from(!n.is_red()))
    }
}
