//! Fixed-length slot blocks.
//!
//! A [`Block`] is a boxed slice of [`Slot`]s allocated once at full length.
//! The slice is never resized, so slot addresses are stable for the
//! block's lifetime even while the arena's block list grows.

use crate::error::ArenaError;

/// One fixed-size storage cell.
///
/// `value` is `Some` exactly when the slot is live. `generation` counts
/// how many times the slot has been destroyed and is compared against the
/// handle's generation to detect stale handles.
pub(crate) struct Slot<T> {
    pub(crate) generation: u32,
    pub(crate) value: Option<T>,
}

impl<T> Slot<T> {
    fn vacant() -> Self {
        Self {
            generation: 0,
            value: None,
        }
    }
}

/// A contiguous run of slots.
pub(crate) struct Block<T> {
    slots: Box<[Slot<T>]>,
}

impl<T> Block<T> {
    /// Allocate a block of `len` vacant slots.
    ///
    /// Returns [`ArenaError::AllocationFailed`] if the allocator refuses
    /// the request.
    pub(crate) fn try_new(len: usize) -> Result<Self, ArenaError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(len)
            .map_err(|_| ArenaError::AllocationFailed {
                requested_slots: len,
            })?;
        slots.resize_with(len, Slot::vacant);
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    pub(crate) fn slot(&self, offset: u32) -> Option<&Slot<T>> {
        self.slots.get(offset as usize)
    }

    pub(crate) fn slot_mut(&mut self, offset: u32) -> Option<&mut Slot<T>> {
        self.slots.get_mut(offset as usize)
    }

    /// Number of slots in this block.
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots currently holding a value. O(len).
    pub(crate) fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| s.value.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_block_is_all_vacant() {
        let block: Block<u64> = Block::try_new(16).unwrap();
        assert_eq!(block.len(), 16);
        assert_eq!(block.live_count(), 0);
        assert!(block.slot(15).is_some());
        assert!(block.slot(16).is_none());
    }

    #[test]
    fn slot_address_stable_after_writes() {
        let mut block: Block<u64> = Block::try_new(4).unwrap();
        let before = block.slot(2).unwrap() as *const Slot<u64>;
        block.slot_mut(2).unwrap().value = Some(9);
        block.slot_mut(3).unwrap().value = Some(1);
        let after = block.slot(2).unwrap() as *const Slot<u64>;
        assert_eq!(before, after);
        assert_eq!(block.live_count(), 2);
    }

    #[test]
    fn absurd_length_reports_allocation_failure() {
        let result: Result<Block<[u8; 1024]>, _> = Block::try_new(usize::MAX / 2);
        assert!(matches!(result, Err(ArenaError::AllocationFailed { .. })));
    }
}
