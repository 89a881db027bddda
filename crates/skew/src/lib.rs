//! Skew: mergeable priority queues backed by a block-stable slab arena.
//!
//! This is the top-level facade crate that re-exports the public API of
//! the Skew sub-crates. For most users, adding `skew` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use skew::prelude::*;
//!
//! // Free-store heap, smallest key on top.
//! let mut a = SkewHeap::new();
//! a.extend([5, 1, 9]);
//! let mut b = SkewHeap::new();
//! b.extend([2, 6, 3]);
//! a.merge(&mut b);
//! assert!(b.is_empty());
//! assert_eq!(a.into_sorted_vec(), vec![1, 2, 3, 5, 6, 9]);
//!
//! // Arena-backed heap, largest key on top, sized up front.
//! let config = ArenaConfig::new(64).with_max_slots(1024);
//! let mut heap = ArenaSkewHeap::with_comparator_and_config(MaxOrder, config).unwrap();
//! heap.reserve_nodes(7).unwrap();
//! for k in [5, 3, 7, 2, 9, 1, 8] {
//!     heap.push(k).unwrap();
//! }
//! assert_eq!(heap.pop(), Ok(9));
//! heap.clear();
//! heap.release_all_to_pool().unwrap();
//! assert_eq!(heap.arena().memory_bytes(), 0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `skew-arena` | Slab arena, handles, configuration |
//! | [`heap`] | `skew-heap` | Heap engine, comparators, node stores |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Slab arena with generation-checked handles (`skew-arena`).
///
/// [`arena::Arena`] is usable on its own as a typed object pool.
pub use skew_arena as arena;

/// Skew heap engine (`skew-heap`).
///
/// [`heap::SkewHeap`] allocates one box per node;
/// [`heap::ArenaSkewHeap`] keeps its nodes in an owned [`arena::Arena`].
pub use skew_heap as heap;

/// Common imports for typical Skew usage.
///
/// ```rust
/// use skew::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use skew_arena::{Arena, ArenaConfig, ArenaError, SlotHandle};

    // Heaps and policies
    pub use skew_heap::{
        ArenaSkewHeap, Compare, FnOrder, HeapError, MaxOrder, MinOrder, SkewHeap,
    };
}
