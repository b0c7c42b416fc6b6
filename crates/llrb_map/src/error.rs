use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("operation requires a non-empty tree")]
    EmptyTree,

    #[error("key not found")]
    NotFound,
}

/// A broken red-black invariant, as reported by [`LlrbTreeMap::validate`].
///
/// [`LlrbTreeMap::validate`]: crate::LlrbTreeMap::validate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("root is red")]
    RedRoot,

    #[error("red link leans right")]
    RightLeaningRed,

    #[error("two consecutive red links")]
    ConsecutiveReds,

    #[error("black height differs: left {left}, right {right}")]
    UnbalancedBlacks { left: usize, right: usize },

    #[error("subtree size is {actual}, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("keys are not in ascending order")]
    OutOfOrder,
}
