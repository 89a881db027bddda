//! The heap type and its storage-independent operations.
//!
//! [`Heap<T, C, S>`] owns a root link, the element count, a comparator,
//! and a node store. Operations common to every store live here; the
//! store-specific surface is split by store type:
//!
//! - [`SkewHeap`] (`S = BoxStore`): infallible `push`/`emplace`/`merge`,
//!   plus `take`, `Extend`, and `FromIterator`.
//! - [`ArenaSkewHeap`] (`S = ArenaStore<T>`): fallible `push`/`emplace`/
//!   `merge` and the arena controls `reserve_nodes` and
//!   `release_all_to_pool`.

use std::fmt;
use std::mem;

use crate::compare::{Compare, MinOrder};
use crate::error::HeapError;
use crate::iter::{DrainSorted, IntoSorted};
use crate::merge::{dismantle_tree, merge_trees};
use crate::store::{ArenaStore, BoxStore, NodeStore, Relocatable};

/// Mergeable priority queue over a pluggable comparator and node store.
///
/// Invariants: every node's key is not outranked by either child's key
/// under `C`, and `len` equals the number of nodes reachable from the
/// root.
pub struct Heap<T, C = MinOrder, S = BoxStore>
where
    S: NodeStore<T>,
{
    root: Option<S::Link>,
    len: usize,
    cmp: C,
    store: S,
}

/// Free-store skew heap: one allocation per node.
pub type SkewHeap<T, C = MinOrder> = Heap<T, C, BoxStore>;

/// Skew heap whose nodes live in an arena owned by the heap.
pub type ArenaSkewHeap<T, C = MinOrder> = Heap<T, C, ArenaStore<T>>;

impl<T, C, S> Heap<T, C, S>
where
    S: NodeStore<T>,
{
    pub(crate) fn from_parts(cmp: C, store: S) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
            store,
        }
    }

    /// Whether the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The ordering policy fixed at construction.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// The preferred element.
    ///
    /// # Errors
    ///
    /// [`HeapError::Empty`] if the heap is empty.
    pub fn top(&self) -> Result<&T, HeapError> {
        self.root
            .as_ref()
            .map(|root| self.store.key(root))
            .ok_or(HeapError::Empty)
    }

    /// Destroy every node and reset to empty. O(n), iterative.
    pub fn clear(&mut self) {
        let freed = dismantle_tree(&mut self.store, self.root.take());
        debug_assert_eq!(freed, self.len, "len disagrees with reachable nodes");
        self.len = 0;
    }

    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub(crate) fn root(&self) -> Option<&S::Link> {
        self.root.as_ref()
    }

    /// Detach the whole tree, leaving the heap empty.
    pub(crate) fn detach(&mut self) -> (Option<S::Link>, usize) {
        (self.root.take(), mem::take(&mut self.len))
    }
}

impl<T, C, S> Heap<T, C, S>
where
    C: Compare<T>,
    S: NodeStore<T>,
{
    /// Remove and return the preferred element.
    ///
    /// The root's two subtrees are merged into the new root.
    ///
    /// # Errors
    ///
    /// [`HeapError::Empty`] if the heap is empty.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        let root = self.root.take().ok_or(HeapError::Empty)?;
        let (key, left, right) = self.store.dismantle(root);
        self.root = merge_trees(&mut self.store, &self.cmp, left, right);
        self.len -= 1;
        Ok(key)
    }

    /// Iterator popping elements in preference order.
    ///
    /// Elements not consumed when the iterator is dropped are destroyed.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C, S> {
        DrainSorted::new(self)
    }

    /// Consume the heap, returning its elements in preference order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.drain_sorted());
        out
    }

    pub(crate) fn try_push(&mut self, key: T) -> Result<(), S::Error> {
        let node = self.store.alloc(key)?;
        self.graft(Some(node), 1);
        Ok(())
    }

    /// Merge a detached tree of `len` nodes, already owned by this store,
    /// into the root.
    pub(crate) fn graft(&mut self, tree: Option<S::Link>, len: usize) {
        let root = self.root.take();
        self.root = merge_trees(&mut self.store, &self.cmp, root, tree);
        self.len += len;
    }
}

// ── Free store ──────────────────────────────────────────────────────

impl<T: Ord> Heap<T, MinOrder, BoxStore> {
    /// Create an empty minimum-ordered heap.
    pub fn new() -> Self {
        Self::from_parts(MinOrder, BoxStore)
    }
}

impl<T, C> Heap<T, C, BoxStore>
where
    C: Compare<T>,
{
    /// Create an empty heap ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self::from_parts(cmp, BoxStore)
    }

    /// Insert `value`. O(log n) amortized.
    pub fn push(&mut self, value: T) {
        self.try_push(value).unwrap_or_else(|never| match never {});
    }

    /// Construct a key from `args` and insert it.
    pub fn emplace<A: Into<T>>(&mut self, args: A) {
        self.push(args.into());
    }

    /// No-op: free-store nodes are allocated one at a time. Present so
    /// code can switch storage modes without edits.
    pub fn reserve_nodes(&mut self, _n: usize) {}

    /// Move every element of `other` into `self`, leaving `other` empty.
    ///
    /// Structural: the two trees are merged without copying nodes.
    /// O(log n) amortized. Merging a heap with itself is rejected at
    /// compile time, since `self` and `other` cannot alias:
    ///
    /// ```compile_fail
    /// let mut heap: skew_heap::SkewHeap<i32> = skew_heap::SkewHeap::new();
    /// heap.merge(&mut heap);
    /// ```
    pub fn merge(&mut self, other: &mut Self) {
        let (tree, len) = other.detach();
        self.graft(tree, len);
    }
}

impl<T, C, S> Heap<T, C, S>
where
    C: Clone,
    S: NodeStore<T> + Relocatable + Default,
{
    /// Move the whole tree into a new heap value, leaving `self` empty.
    ///
    /// Only available for stores whose links stay valid across store
    /// instances.
    pub fn take(&mut self) -> Self {
        let empty = Self::from_parts(self.cmp.clone(), S::default());
        mem::replace(self, empty)
    }
}

impl<T, C, S> Default for Heap<T, C, S>
where
    C: Default,
    S: NodeStore<T> + Default,
{
    fn default() -> Self {
        Self::from_parts(C::default(), S::default())
    }
}

impl<T, C> Extend<T> for Heap<T, C, BoxStore>
where
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, C> FromIterator<T> for Heap<T, C, BoxStore>
where
    C: Compare<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::with_comparator(C::default());
        heap.extend(iter);
        heap
    }
}

// ── Common trait impls ──────────────────────────────────────────────

impl<T, C, S> IntoIterator for Heap<T, C, S>
where
    C: Compare<T>,
    S: NodeStore<T>,
{
    type Item = T;
    type IntoIter = IntoSorted<T, C, S>;

    fn into_iter(self) -> IntoSorted<T, C, S> {
        IntoSorted::new(self)
    }
}

impl<T, C, S> fmt::Debug for Heap<T, C, S>
where
    T: fmt::Debug,
    C: fmt::Debug,
    S: NodeStore<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("len", &self.len)
            .field("top", &self.root.as_ref().map(|r| self.store.key(r)))
            .field("comparator", &self.cmp)
            .finish()
    }
}

impl<T, C, S> Drop for Heap<T, C, S>
where
    S: NodeStore<T>,
{
    fn drop(&mut self) {
        dismantle_tree(&mut self.store, self.root.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{FnOrder, MaxOrder};

    fn drain<C: Compare<i32>>(heap: &mut SkewHeap<i32, C>) -> Vec<i32> {
        let mut out = Vec::new();
        while let Ok(v) = heap.pop() {
            out.push(v);
        }
        out
    }

    #[test]
    fn min_heap_pops_ascending() {
        let mut h = SkewHeap::new();
        for x in [5, 3, 7, 2, 9, 1, 8] {
            h.push(x);
        }
        assert_eq!(drain(&mut h), vec![1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn max_heap_pops_descending() {
        let mut h = SkewHeap::with_comparator(MaxOrder);
        for x in [5, 3, 7, 2, 9, 1, 8] {
            h.push(x);
        }
        assert_eq!(drain(&mut h), vec![9, 8, 7, 5, 3, 2, 1]);
    }

    #[test]
    fn empty_heap_reports_errors() {
        let mut h: SkewHeap<i32> = SkewHeap::new();
        assert!(h.is_empty());
        assert_eq!(h.len(), 0);
        assert_eq!(h.top(), Err(HeapError::Empty));
        assert_eq!(h.pop(), Err(HeapError::Empty));
        assert_eq!(h.len(), 0);
    }

    #[test]
    fn size_and_empty_track_operations() {
        let mut h = SkewHeap::new();
        h.push(10);
        h.push(5);
        assert!(!h.is_empty());
        assert_eq!(h.len(), 2);
        assert_eq!(h.top(), Ok(&5));

        assert_eq!(h.pop(), Ok(5));
        assert_eq!(h.len(), 1);
        assert_eq!(h.top(), Ok(&10));

        assert_eq!(h.pop(), Ok(10));
        assert!(h.is_empty());
        assert_eq!(h.len(), 0);
    }

    #[test]
    fn merge_empties_donor() {
        let mut a = SkewHeap::new();
        let mut b = SkewHeap::new();
        a.extend([5, 1, 9]);
        b.extend([2, 6, 3]);
        a.merge(&mut b);
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
        assert_eq!(a.len(), 6);
        assert_eq!(drain(&mut a), vec![1, 2, 3, 5, 6, 9]);
    }

    #[test]
    fn merge_with_empty_either_side() {
        let mut a = SkewHeap::new();
        let mut b = SkewHeap::new();
        a.merge(&mut b);
        assert!(a.is_empty());

        b.extend([4, 2]);
        a.merge(&mut b);
        assert_eq!(a.len(), 2);
        let mut c = SkewHeap::new();
        a.merge(&mut c);
        assert_eq!(drain(&mut a), vec![2, 4]);
    }

    #[test]
    fn donor_is_reusable_after_merge() {
        let mut a = SkewHeap::new();
        let mut b = SkewHeap::new();
        b.extend([3, 1]);
        a.merge(&mut b);
        b.push(7);
        assert_eq!(b.top(), Ok(&7));
        assert_eq!(b.len(), 1);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn emplace_converts_arguments() {
        let mut h: SkewHeap<String> = SkewHeap::new();
        h.emplace("ccc");
        h.emplace("aaa");
        h.push(String::from("bbb"));
        assert_eq!(h.into_sorted_vec(), vec!["aaa", "bbb", "ccc"]);
    }

    #[test]
    fn clear_resets_and_allows_reuse() {
        let mut h = SkewHeap::new();
        h.extend(0..100);
        h.clear();
        assert!(h.is_empty());
        assert_eq!(h.len(), 0);
        h.push(3);
        assert_eq!(h.top(), Ok(&3));
    }

    #[test]
    fn reserve_nodes_leaves_free_store_heap_unchanged() {
        let mut h = SkewHeap::new();
        h.push(1);
        h.reserve_nodes(1024);
        assert_eq!(h.len(), 1);
        assert_eq!(h.top(), Ok(&1));
    }

    #[test]
    fn take_moves_tree_out() {
        let mut h = SkewHeap::with_comparator(MaxOrder);
        h.extend([1, 4, 2]);
        let moved = h.take();
        assert!(h.is_empty());
        assert_eq!(moved.len(), 3);
        assert_eq!(moved.into_sorted_vec(), vec![4, 2, 1]);
    }

    #[test]
    fn from_iterator_and_into_iter() {
        let h: SkewHeap<i32, MaxOrder> = [3, 9, 1].into_iter().collect();
        let out: Vec<_> = h.into_iter().collect();
        assert_eq!(out, vec![9, 3, 1]);
    }

    #[test]
    fn custom_comparator_orders_by_key_field() {
        let by_second = FnOrder(|a: &(i32, i32), b: &(i32, i32)| a.1 < b.1);
        let mut h = SkewHeap::with_comparator(by_second);
        h.extend([(1, 30), (2, 10), (3, 20)]);
        let firsts: Vec<_> = h.into_sorted_vec().into_iter().map(|p| p.0).collect();
        assert_eq!(firsts, vec![2, 3, 1]);
    }

    #[test]
    fn duplicates_are_all_kept() {
        let mut h = SkewHeap::new();
        h.extend([2, 2, 1, 2, 1]);
        assert_eq!(drain(&mut h), vec![1, 1, 2, 2, 2]);
    }

    #[test]
    fn debug_shows_len_and_top() {
        let mut h = SkewHeap::new();
        h.extend([4, 2]);
        let s = format!("{h:?}");
        assert!(s.contains("len: 2"));
        assert!(s.contains("top: Some(2)"));
    }

    #[test]
    fn degenerate_deep_tree_drops_without_overflow() {
        // Ascending keys into a max-heap chain every node down the left.
        let mut h = SkewHeap::with_comparator(MaxOrder);
        for k in 0..1_000_000u32 {
            h.push(k);
        }
        assert_eq!(h.top(), Ok(&999_999));
        drop(h);
    }

    #[test]
    fn degenerate_deep_tree_clears_without_overflow() {
        let mut h = SkewHeap::with_comparator(MaxOrder);
        h.extend(0..1_000_000u32);
        h.clear();
        assert!(h.is_empty());
    }
}
