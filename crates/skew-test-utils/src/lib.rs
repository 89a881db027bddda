//! Test utilities for skew heap development.
//!
//! Provides a drop-counting key ([`Tracked`] with its [`DropLedger`]) for
//! checking that every element is destroyed exactly once, plus helpers
//! for draining heaps and checking pop order.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use skew_heap::{Compare, Heap, NodeStore};

/// Shared drop counter for [`Tracked`] keys.
#[derive(Clone, Default)]
pub struct DropLedger {
    drops: Rc<Cell<usize>>,
}

impl DropLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a key that bumps this ledger when dropped.
    pub fn track(&self, key: i64) -> Tracked {
        Tracked {
            key,
            ledger: Rc::clone(&self.drops),
        }
    }

    /// Number of tracked keys dropped so far.
    pub fn dropped(&self) -> usize {
        self.drops.get()
    }
}

/// Key that records its own drop in a [`DropLedger`].
///
/// Ordering and equality look at `key` only.
pub struct Tracked {
    pub key: i64,
    ledger: Rc<Cell<usize>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.ledger.set(self.ledger.get() + 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tracked {}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.key)
    }
}

/// Pop every element, returning them in pop order.
pub fn drain<T, C, S>(heap: &mut Heap<T, C, S>) -> Vec<T>
where
    C: Compare<T>,
    S: NodeStore<T>,
{
    let mut out = Vec::with_capacity(heap.len());
    while let Ok(value) = heap.pop() {
        out.push(value);
    }
    out
}

/// Whether no element of `items` is preferred over the one before it.
pub fn is_pop_ordered<T, C: Compare<T>>(items: &[T], cmp: &C) -> bool {
    items.windows(2).all(|w| !cmp.prefers(&w[1], &w[0]))
}

/// Sorted copy of `values`, for multiset comparison.
pub fn sorted<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let mut out = values.to_vec();
    out.sort();
    out
}
