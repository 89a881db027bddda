//! Arena-backed heap surface.
//!
//! Every [`ArenaSkewHeap`] owns one [`Arena`]; node links are handles into
//! it. Merging two arena-backed heaps moves the donor's blocks into the
//! recipient's arena and rewrites the donor tree's handles, so the merged
//! tree never references storage the recipient does not own.

use smallvec::SmallVec;

use skew_arena::{Arena, ArenaConfig, SlotHandle};

use crate::compare::{Compare, MinOrder};
use crate::error::HeapError;
use crate::heap::{ArenaSkewHeap, Heap};
use crate::store::{ArenaStore, Node};

impl<T: Ord> Heap<T, MinOrder, ArenaStore<T>> {
    /// Create an empty minimum-ordered heap over a default-configured
    /// arena. No memory is allocated until the first push.
    pub fn new() -> Self {
        Self::from_parts(MinOrder, ArenaStore::default())
    }

    /// Create an empty minimum-ordered heap over an arena built from
    /// `config`.
    ///
    /// # Errors
    ///
    /// [`HeapError::Arena`] if `config` is invalid.
    pub fn with_config(config: ArenaConfig) -> Result<Self, HeapError> {
        Self::with_comparator_and_config(MinOrder, config)
    }
}

impl<T, C> Heap<T, C, ArenaStore<T>>
where
    C: Compare<T>,
{
    /// Create an empty heap ordered by `cmp` over a default-configured
    /// arena.
    pub fn with_comparator(cmp: C) -> Self {
        Self::from_parts(cmp, ArenaStore::default())
    }

    /// Create an empty heap ordered by `cmp` over an arena built from
    /// `config`.
    ///
    /// # Errors
    ///
    /// [`HeapError::Arena`] if `config` is invalid.
    pub fn with_comparator_and_config(cmp: C, config: ArenaConfig) -> Result<Self, HeapError> {
        Ok(Self::from_parts(cmp, ArenaStore::new(config)?))
    }

    /// Insert `value`. O(log n) amortized.
    ///
    /// # Errors
    ///
    /// [`HeapError::Arena`] if the arena cannot provide a slot. The heap
    /// is unchanged and `value` is dropped.
    pub fn push(&mut self, value: T) -> Result<(), HeapError> {
        self.try_push(value)?;
        Ok(())
    }

    /// Construct a key from `args` and insert it.
    ///
    /// # Errors
    ///
    /// As for [`push`](Self::push).
    pub fn emplace<A: Into<T>>(&mut self, args: A) -> Result<(), HeapError> {
        self.push(args.into())
    }

    /// Move every element of `other` into `self`, leaving `other` empty.
    ///
    /// The donor's arena blocks are transferred to `self`'s arena without
    /// moving any node, then the donor tree's handles are rewritten.
    /// O(|other|) for the rewrite plus O(log n) amortized for the merge.
    /// `other` keeps a usable, empty arena.
    ///
    /// # Errors
    ///
    /// [`HeapError::Arena`] if the combined arena would exceed its
    /// addressing or `max_slots` limits. Neither heap is modified.
    pub fn merge(&mut self, other: &mut Self) -> Result<(), HeapError> {
        let Some(&donor_root) = other.root() else {
            return Ok(());
        };
        let rebase = self
            .store_mut()
            .arena
            .absorb(&mut other.store_mut().arena)?;
        let (_, len) = other.detach();

        let arena = &mut self.store_mut().arena;
        let root = rebase.apply(donor_root);
        let mut pending: SmallVec<[SlotHandle; 32]> = SmallVec::new();
        pending.push(root);
        while let Some(handle) = pending.pop() {
            let node = &mut arena[handle];
            for child in [&mut node.left, &mut node.right].into_iter().flatten() {
                *child = rebase.apply(*child);
                pending.push(*child);
            }
        }

        self.graft(Some(root), len);
        Ok(())
    }

    /// Pre-allocate arena slots so that `n` further pushes succeed without
    /// growing the arena.
    ///
    /// # Errors
    ///
    /// [`HeapError::Arena`] if the slots cannot be provided.
    pub fn reserve_nodes(&mut self, n: usize) -> Result<(), HeapError> {
        self.store_mut().arena.reserve(n)?;
        Ok(())
    }

    /// Return every arena block to the allocator.
    ///
    /// # Errors
    ///
    /// [`HeapError::NotEmpty`] if the heap still holds elements; call
    /// [`clear`](Heap::clear) first.
    pub fn release_all_to_pool(&mut self) -> Result<(), HeapError> {
        if !self.is_empty() {
            return Err(HeapError::NotEmpty { len: self.len() });
        }
        self.store_mut().arena.release_all()?;
        Ok(())
    }
}

impl<T, C> ArenaSkewHeap<T, C> {
    /// The arena holding this heap's nodes.
    pub fn arena(&self) -> &Arena<Node<T, SlotHandle>> {
        self.store().arena()
    }
}
