//! Block-stable slab arena for Skew heaps.
//!
//! [`Arena<T>`] hands out fixed-size, typed slots from large blocks and
//! recycles them through a free-list, so workloads that create and destroy
//! many small objects avoid one system allocation per object.
//!
//! # Architecture
//!
//! ```text
//! Arena<T>
//! ├── Block<T>[]      (fixed-length slot runs, appended, never reallocated)
//! │   └── Slot<T>     (generation + Option<T>)
//! ├── free-list       (SlotPos of every non-live slot)
//! └── ArenaId         (process-unique instance id, renewed on release)
//! ```
//!
//! # Handles
//!
//! A [`SlotHandle`] names a slot by `(arena, block, offset, generation)`.
//! Blocks never move, so a handle stays valid until its object is
//! destroyed. Handles from another arena, or to a slot that has since been
//! destroyed or reused, are rejected with a structured [`ArenaError`]
//! instead of aliasing a live object.
//!
//! # Safety
//!
//! Slots are plain `Option<T>` values inside boxed slices. No `unsafe`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
mod block;
pub mod config;
pub mod error;
pub mod handle;

// Public re-exports for the primary API surface.
pub use arena::Arena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use handle::{ArenaId, Rebase, SlotHandle};
