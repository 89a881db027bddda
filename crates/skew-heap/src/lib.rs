//! Mergeable skew heap with pluggable ordering and node storage.
//!
//! A skew heap is a self-adjusting binary tree: every operation reduces to
//! one merge primitive, and an unconditional child swap after each merge
//! step yields O(log n) amortized push, pop, and merge without balance
//! metadata.
//!
//! # Architecture
//!
//! ```text
//! Heap<T, C, S>
//! ├── C: Compare<T>     (MinOrder, MaxOrder, FnOrder)
//! ├── S: NodeStore<T>   (BoxStore: one Box per node
//! │                      ArenaStore<T>: slots in an owned skew_arena::Arena)
//! └── root + len
//! ```
//!
//! [`SkewHeap`] is the free-store heap; [`ArenaSkewHeap`] draws nodes from
//! an arena it owns. Both are instances of [`Heap`].
//!
//! # Quick start
//!
//! ```rust
//! use skew_heap::{MaxOrder, SkewHeap};
//!
//! let mut heap = SkewHeap::with_comparator(MaxOrder);
//! heap.extend([5, 3, 7]);
//! assert_eq!(heap.top(), Ok(&7));
//! assert_eq!(heap.into_sorted_vec(), vec![7, 5, 3]);
//! ```
//!
//! # Recursion
//!
//! Merge and teardown walk the tree with an explicit stack. Adversarial
//! insertion orders can build O(n)-deep trees; dropping them never
//! overflows the native stack.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod arena_heap;
pub mod compare;
pub mod error;
pub mod heap;
pub mod iter;
mod merge;
pub mod store;

// Public re-exports for the primary API surface.
pub use compare::{Compare, FnOrder, MaxOrder, MinOrder};
pub use error::HeapError;
pub use heap::{ArenaSkewHeap, Heap, SkewHeap};
pub use iter::{DrainSorted, IntoSorted};
pub use store::{ArenaStore, BoxStore, Node, NodeStore, Relocatable};
