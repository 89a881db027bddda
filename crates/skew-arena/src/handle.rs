//! Arena instance ids, slot handles, and block rebasing.
//!
//! A [`SlotHandle`] encodes the physical location of an object within an
//! arena. The `generation` field allows O(1) staleness checks without a
//! lookup table; the `arena` field rejects handles from other instances.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`ArenaId`] allocation.
static ARENA_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for an [`Arena`](crate::Arena).
///
/// Allocated from a monotonic atomic counter. An arena takes a fresh id
/// whenever its blocks are released or handed to another arena, so
/// handles issued before that point can never resolve again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArenaId(u64);

impl ArenaId {
    /// Allocate a fresh, unique instance id.
    pub fn next() -> Self {
        Self(ARENA_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ArenaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a slot within an arena: block index and offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SlotPos {
    pub(crate) block: u32,
    pub(crate) offset: u32,
}

/// Opaque reference to an object living in an [`Arena`](crate::Arena).
///
/// Returned by [`Arena::create`](crate::Arena::create). Copying a handle
/// does not copy the object; destroying through one copy makes every copy
/// stale.
///
/// A slot whose generation counter is exhausted is retired rather than
/// reissued, so a stale handle never matches a later occupant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct SlotHandle {
    /// Issuing arena.
    pub(crate) arena: ArenaId,
    /// Index of the block holding the slot.
    pub(crate) block: u32,
    /// Slot offset within the block.
    pub(crate) offset: u32,
    /// Slot generation at the time of issue.
    pub(crate) generation: u32,
}

impl SlotHandle {
    pub(crate) fn new(arena: ArenaId, pos: SlotPos, generation: u32) -> Self {
        Self {
            arena,
            block: pos.block,
            offset: pos.offset,
            generation,
        }
    }

    /// The arena that issued this handle.
    pub fn arena(&self) -> ArenaId {
        self.arena
    }

    /// The slot generation this handle was issued for.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub(crate) fn pos(&self) -> SlotPos {
        SlotPos {
            block: self.block,
            offset: self.offset,
        }
    }
}

impl fmt::Display for SlotHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SlotHandle(arena={}, block={}, off={}, gen={})",
            self.arena, self.block, self.offset, self.generation
        )
    }
}

/// Handle translation produced by [`Arena::absorb`](crate::Arena::absorb).
///
/// After a donor arena's blocks are appended to a recipient, every handle
/// the donor issued must be rewritten with [`Rebase::apply`] before it can
/// be used against the recipient. Handles from any other arena pass
/// through unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rebase {
    pub(crate) from: ArenaId,
    pub(crate) to: ArenaId,
    pub(crate) block_base: u32,
}

impl Rebase {
    /// Translate a donor handle into the recipient arena.
    pub fn apply(&self, handle: SlotHandle) -> SlotHandle {
        if handle.arena != self.from {
            return handle;
        }
        SlotHandle {
            arena: self.to,
            block: handle.block + self.block_base,
            offset: handle.offset,
            generation: handle.generation,
        }
    }

    /// The donor arena's id before absorption.
    pub fn donor(&self) -> ArenaId {
        self.from
    }

    /// The recipient arena's id.
    pub fn recipient(&self) -> ArenaId {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_ids_are_unique() {
        let a = ArenaId::next();
        let b = ArenaId::next();
        assert_ne!(a, b);
        assert!(b.as_u64() > a.as_u64());
    }

    #[test]
    fn handle_round_trip() {
        let id = ArenaId::next();
        let h = SlotHandle::new(id, SlotPos { block: 2, offset: 7 }, 5);
        assert_eq!(h.arena(), id);
        assert_eq!(h.generation(), 5);
        assert_eq!(h.pos(), SlotPos { block: 2, offset: 7 });
    }

    #[test]
    fn rebase_shifts_donor_handles_only() {
        let donor = ArenaId::next();
        let recipient = ArenaId::next();
        let other = ArenaId::next();
        let rebase = Rebase {
            from: donor,
            to: recipient,
            block_base: 3,
        };

        let moved = rebase.apply(SlotHandle::new(donor, SlotPos { block: 1, offset: 9 }, 4));
        assert_eq!(moved.arena(), recipient);
        assert_eq!(moved.pos(), SlotPos { block: 4, offset: 9 });
        assert_eq!(moved.generation(), 4);

        let untouched = SlotHandle::new(other, SlotPos { block: 1, offset: 9 }, 4);
        assert_eq!(rebase.apply(untouched), untouched);
    }
}
