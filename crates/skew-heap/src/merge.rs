//! The merge primitive and tree teardown.
//!
//! Recursive definition of skew merge:
//!
//! ```text
//! merge(a, ∅) = a        merge(∅, b) = b
//! merge(a, b) = let a be the preferred root;
//!               a.right = merge(a.right, b);
//!               swap(a.left, a.right);
//!               a
//! ```
//!
//! [`merge_trees`] runs the same recursion with an explicit stack: the
//! descent collects the preferred node of each step along the merged right
//! spine, the ascent attaches the accumulated tail and skews.

use smallvec::SmallVec;

use crate::compare::Compare;
use crate::store::NodeStore;

/// Inline capacity of the spine and teardown stacks. Amortized spine
/// length is O(log n), so heaps of a few million elements rarely spill.
const STACK_INLINE: usize = 32;

/// Merge two optional trees and return the new root.
pub(crate) fn merge_trees<T, C, S>(
    store: &mut S,
    cmp: &C,
    a: Option<S::Link>,
    b: Option<S::Link>,
) -> Option<S::Link>
where
    C: Compare<T>,
    S: NodeStore<T>,
{
    let (mut a, mut b) = match (a, b) {
        (None, b) => return b,
        (a, None) => return a,
        (Some(a), Some(b)) => (a, b),
    };

    let mut spine: SmallVec<[S::Link; STACK_INLINE]> = SmallVec::new();
    let mut tail = loop {
        if cmp.prefers(store.key(&b), store.key(&a)) {
            std::mem::swap(&mut a, &mut b);
        }
        let right = store.take_right(&mut a);
        spine.push(a);
        match right {
            Some(next) => a = next,
            None => break b,
        }
    };

    while let Some(mut node) = spine.pop() {
        store.attach_right_and_skew(&mut node, Some(tail));
        tail = node;
    }
    Some(tail)
}

/// Free every node reachable from `root`, dropping the keys.
///
/// Returns the number of nodes freed.
pub(crate) fn dismantle_tree<T, S>(store: &mut S, root: Option<S::Link>) -> usize
where
    S: NodeStore<T>,
{
    let mut pending: SmallVec<[S::Link; STACK_INLINE]> = root.into_iter().collect();
    let mut freed = 0;
    while let Some(link) = pending.pop() {
        let (_key, left, right) = store.dismantle(link);
        pending.extend(left);
        pending.extend(right);
        freed += 1;
    }
    freed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{MaxOrder, MinOrder};
    use crate::store::BoxStore;

    fn leaf(store: &mut BoxStore, key: i32) -> Option<<BoxStore as NodeStore<i32>>::Link> {
        Some(store.alloc(key).unwrap_or_else(|e| match e {}))
    }

    fn drain<C: Compare<i32>>(
        store: &mut BoxStore,
        cmp: &C,
        mut root: Option<<BoxStore as NodeStore<i32>>::Link>,
    ) -> Vec<i32> {
        let mut out = Vec::new();
        while let Some(link) = root {
            let (key, left, right) = store.dismantle(link);
            out.push(key);
            root = merge_trees::<i32, _, _>(store, cmp, left, right);
        }
        out
    }

    #[test]
    fn empty_is_identity() {
        let mut store = BoxStore;
        let a = leaf(&mut store, 4);
        let merged = merge_trees::<i32, _, _>(&mut store, &MinOrder, a, None);
        let merged = merge_trees::<i32, _, _>(&mut store, &MinOrder, None, merged);
        assert_eq!(drain(&mut store, &MinOrder, merged), vec![4]);
        assert!(merge_trees::<i32, _, _>(&mut store, &MinOrder, None, None).is_none());
    }

    #[test]
    fn preferred_root_wins() {
        let mut store = BoxStore;
        let a = leaf(&mut store, 9);
        let b = leaf(&mut store, 2);
        let root = merge_trees::<i32, _, _>(&mut store, &MinOrder, a, b).unwrap();
        assert_eq!(*store.key(&root), 2);
        let _ = dismantle_tree::<i32, _>(&mut store, Some(root));
    }

    #[test]
    fn skew_step_moves_merged_subtree_left() {
        let mut store = BoxStore;
        let a = leaf(&mut store, 1);
        let b = leaf(&mut store, 2);
        let mut root = merge_trees::<i32, _, _>(&mut store, &MinOrder, a, b).unwrap();
        // 2 was merged into the empty right subtree of 1, then swapped left.
        assert!(store.take_right(&mut root).is_none());
        let (_, left, _) = store.dismantle(root);
        assert_eq!(*store.key(left.as_ref().unwrap()), 2);
        let _ = dismantle_tree::<i32, _>(&mut store, left);
    }

    #[test]
    fn merged_trees_drain_in_order() {
        let mut store = BoxStore;
        let mut left = None;
        for k in [5, 1, 9] {
            let node = leaf(&mut store, k);
            left = merge_trees::<i32, _, _>(&mut store, &MaxOrder, left, node);
        }
        let mut right = None;
        for k in [2, 6, 3] {
            let node = leaf(&mut store, k);
            right = merge_trees::<i32, _, _>(&mut store, &MaxOrder, right, node);
        }
        let root = merge_trees::<i32, _, _>(&mut store, &MaxOrder, left, right);
        assert_eq!(drain(&mut store, &MaxOrder, root), vec![9, 6, 5, 3, 2, 1]);
    }

    #[test]
    fn dismantle_counts_every_node() {
        let mut store = BoxStore;
        let mut root = None;
        for k in 0..100 {
            let node = leaf(&mut store, k);
            root = merge_trees::<i32, _, _>(&mut store, &MinOrder, root, node);
        }
        assert_eq!(dismantle_tree::<i32, _>(&mut store, root), 100);
    }
}
