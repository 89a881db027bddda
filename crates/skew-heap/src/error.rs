//! Heap error types.

use std::error::Error;
use std::fmt;

use skew_arena::ArenaError;

/// Errors from heap operations.
///
/// A returned error means the heap was not modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeapError {
    /// `top` or `pop` on an empty heap.
    Empty,
    /// Arena release requested while the heap still holds nodes.
    NotEmpty {
        /// Number of elements still in the heap.
        len: usize,
    },
    /// The node arena failed.
    Arena(ArenaError),
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "heap is empty"),
            Self::NotEmpty { len } => {
                write!(f, "heap still holds {len} elements")
            }
            Self::Arena(e) => write!(f, "node arena: {e}"),
        }
    }
}

impl Error for HeapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ArenaError> for HeapError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}
