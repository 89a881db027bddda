//! Reusable heap fixtures.
//!
//! - [`SCENARIO_KEYS`]: the seven-key workload used across ordering tests.
//! - [`boxed_heap`] / [`arena_heap`]: heaps pre-filled from a key slice.

use skew_heap::{ArenaSkewHeap, Compare, SkewHeap};

/// Seven distinct keys in no particular order.
pub const SCENARIO_KEYS: [i32; 7] = [5, 3, 7, 2, 9, 1, 8];

/// Free-store heap holding `keys`.
pub fn boxed_heap<C: Compare<i32>>(cmp: C, keys: &[i32]) -> SkewHeap<i32, C> {
    let mut heap = SkewHeap::with_comparator(cmp);
    heap.extend(keys.iter().copied());
    heap
}

/// Arena-backed heap holding `keys`.
///
/// # Panics
///
/// If the default arena cannot grow.
pub fn arena_heap<C: Compare<i32>>(cmp: C, keys: &[i32]) -> ArenaSkewHeap<i32, C> {
    let mut heap = ArenaSkewHeap::with_comparator(cmp);
    for &k in keys {
        heap.push(k).expect("default arena push");
    }
    heap
}

#[cfg(test)]
mod tests {
    use super::*;
    use skew_heap::MinOrder;

    #[test]
    fn fixtures_hold_every_key() {
        let boxed = boxed_heap(MinOrder, &SCENARIO_KEYS);
        let arena = arena_heap(MinOrder, &SCENARIO_KEYS);
        assert_eq!(boxed.len(), SCENARIO_KEYS.len());
        assert_eq!(arena.len(), SCENARIO_KEYS.len());
        assert_eq!(arena.arena().live(), SCENARIO_KEYS.len());
    }
}
