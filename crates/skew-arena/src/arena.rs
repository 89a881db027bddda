//! The slab arena.
//!
//! [`Arena<T>`] owns a list of [`Block`]s and a free-list of slot
//! positions. Every slot is in exactly one state:
//!
//! - **live**: holds a value, not on the free-list;
//! - **free**: on the free-list, previously destroyed;
//! - **never issued**: on the free-list, never held a value;
//! - **retired**: generation exhausted, never handed out again.
//!
//! Blocks are only appended, never reallocated, and are dropped wholesale
//! by [`Arena::release_all`] once no object is live.

use std::ops::{Index, IndexMut};

use crate::block::{Block, Slot};
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::handle::{ArenaId, Rebase, SlotHandle, SlotPos};

/// Fixed-size typed object pool with geometric block growth.
///
/// `create` and `destroy` are amortized O(1). Growth allocates one block
/// of `max(next_block_capacity, need)` slots and doubles
/// `next_block_capacity` up to [`ArenaConfig::max_block_capacity`].
///
/// The free-list's capacity always covers every slot in the arena, so
/// `destroy` never allocates.
pub struct Arena<T> {
    id: ArenaId,
    blocks: Vec<Block<T>>,
    /// Positions of every non-live slot. Popped from the back.
    free: Vec<SlotPos>,
    config: ArenaConfig,
    next_block_capacity: usize,
    total_slots: usize,
    live: usize,
    /// Slots whose generation counter is exhausted.
    retired: usize,
}

impl<T> Arena<T> {
    /// Create an empty arena. No block is allocated until first use.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::InvalidConfig`] if `config` fails
    /// [`ArenaConfig::validate`].
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: ArenaConfig) -> Self {
        Self {
            id: ArenaId::next(),
            blocks: Vec::new(),
            free: Vec::new(),
            next_block_capacity: config.initial_block_capacity,
            config,
            total_slots: 0,
            live: 0,
            retired: 0,
        }
    }

    /// Ensure at least `n` free slots exist.
    ///
    /// No-op if already satisfied. Otherwise allocates exactly one block
    /// covering the shortfall.
    pub fn reserve(&mut self, n: usize) -> Result<(), ArenaError> {
        if self.free.len() >= n {
            return Ok(());
        }
        self.grow(n - self.free.len())
    }

    /// Move `value` into a free slot and return its handle.
    ///
    /// Grows by one block first if no slot is free. On error the value is
    /// dropped and the arena is unchanged.
    pub fn create(&mut self, value: T) -> Result<SlotHandle, ArenaError> {
        if self.free.is_empty() {
            self.grow(1)?;
        }
        let Some(pos) = self.free.pop() else {
            return Err(ArenaError::AllocationFailed { requested_slots: 1 });
        };
        let slot = self.blocks[pos.block as usize]
            .slot_mut(pos.offset)
            .expect("free-list positions always lie inside their block");
        debug_assert!(slot.value.is_none(), "free-list held a live slot");
        slot.value = Some(value);
        let generation = slot.generation;
        self.live += 1;
        Ok(SlotHandle::new(self.id, pos, generation))
    }

    /// Move the object out of its slot and return the slot to the free-list.
    ///
    /// A slot whose generation would wrap is retired instead, so no handle
    /// can ever match a reissued slot. It is reclaimed by
    /// [`release_all`](Self::release_all).
    ///
    /// # Errors
    ///
    /// - [`ArenaError::ForeignHandle`] if `handle` was issued by another
    ///   arena or before the last [`release_all`](Self::release_all).
    /// - [`ArenaError::StaleHandle`] if the slot was already destroyed.
    pub fn destroy(&mut self, handle: SlotHandle) -> Result<T, ArenaError> {
        let slot = self.checked_slot_mut(handle)?;
        let value = slot.value.take().ok_or(ArenaError::StaleHandle)?;
        match slot.generation.checked_add(1) {
            Some(next) => {
                slot.generation = next;
                debug_assert!(self.free.len() < self.free.capacity());
                self.free.push(handle.pos());
            }
            None => self.retired += 1,
        }
        self.live -= 1;
        Ok(value)
    }

    /// Shared access to a live object. `None` for foreign or stale handles.
    pub fn get(&self, handle: SlotHandle) -> Option<&T> {
        if handle.arena != self.id {
            return None;
        }
        let slot = self.blocks.get(handle.block as usize)?.slot(handle.offset)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.value.as_ref()
    }

    /// Mutable access to a live object. `None` for foreign or stale handles.
    pub fn get_mut(&mut self, handle: SlotHandle) -> Option<&mut T> {
        self.checked_slot_mut(handle).ok()?.value.as_mut()
    }

    /// Whether `handle` refers to a live object in this arena.
    pub fn contains(&self, handle: SlotHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Drop every block and clear the free-list.
    ///
    /// The arena takes a fresh [`ArenaId`], so every handle issued before
    /// this call becomes foreign. The growth schedule is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::LiveObjects`] without touching the arena if
    /// any object is still live.
    pub fn release_all(&mut self) -> Result<(), ArenaError> {
        if self.live != 0 {
            return Err(ArenaError::LiveObjects { live: self.live });
        }
        debug_assert_eq!(
            self.blocks.iter().map(Block::live_count).sum::<usize>(),
            0,
            "live counter disagrees with block contents"
        );
        self.blocks = Vec::new();
        self.free = Vec::new();
        self.total_slots = 0;
        self.retired = 0;
        self.id = ArenaId::next();
        Ok(())
    }

    /// Take ownership of every block in `donor`.
    ///
    /// Donor blocks are appended to this arena without moving slot memory,
    /// together with the donor's free slots and live count. Handles the
    /// donor issued must be translated through the returned [`Rebase`].
    /// The donor is left empty with a fresh [`ArenaId`]; its growth
    /// schedule is kept. O(donor blocks + donor free slots).
    ///
    /// # Errors
    ///
    /// - [`ArenaError::CapacityExceeded`] if the combined block count or
    ///   slot count would exceed what handles or `max_slots` can address.
    /// - [`ArenaError::AllocationFailed`] if the bookkeeping vectors cannot
    ///   grow.
    ///
    /// Neither arena is modified on error.
    pub fn absorb(&mut self, donor: &mut Arena<T>) -> Result<Rebase, ArenaError> {
        let combined_slots = self.total_slots + donor.total_slots;
        if let Some(max) = self.config.max_slots {
            if combined_slots > max {
                return Err(ArenaError::CapacityExceeded {
                    requested: donor.total_slots,
                    capacity: max,
                });
            }
        }
        let block_base =
            u32::try_from(self.blocks.len()).map_err(|_| ArenaError::CapacityExceeded {
                requested: donor.total_slots,
                capacity: self.total_slots,
            })?;
        if u32::try_from(self.blocks.len() + donor.blocks.len()).is_err() {
            return Err(ArenaError::CapacityExceeded {
                requested: donor.total_slots,
                capacity: self.total_slots,
            });
        }

        self.blocks
            .try_reserve(donor.blocks.len())
            .map_err(|_| ArenaError::AllocationFailed {
                requested_slots: donor.total_slots,
            })?;
        self.free
            .try_reserve(combined_slots - self.free.len())
            .map_err(|_| ArenaError::AllocationFailed {
                requested_slots: donor.total_slots,
            })?;

        let rebase = Rebase {
            from: donor.id,
            to: self.id,
            block_base,
        };
        self.free.extend(donor.free.drain(..).map(|pos| SlotPos {
            block: pos.block + block_base,
            offset: pos.offset,
        }));
        self.blocks.append(&mut donor.blocks);
        self.total_slots = combined_slots;
        self.live += donor.live;
        self.retired += donor.retired;

        donor.free = Vec::new();
        donor.total_slots = 0;
        donor.live = 0;
        donor.retired = 0;
        donor.id = ArenaId::next();
        Ok(rebase)
    }

    /// Number of live objects.
    pub fn live(&self) -> usize {
        self.live
    }

    /// Total slots across all blocks (live + free + never issued + retired).
    pub fn capacity_slots(&self) -> usize {
        self.total_slots
    }

    /// Slots available without growing.
    pub fn free_slots(&self) -> usize {
        self.free.len()
    }

    /// Slots taken out of service because their generation is exhausted.
    pub fn retired_slots(&self) -> usize {
        self.retired
    }

    /// Number of blocks currently owned.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Slot count the next growth will use at minimum.
    pub fn next_block_capacity(&self) -> usize {
        self.next_block_capacity
    }

    /// Memory used by slot storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.total_slots * std::mem::size_of::<Slot<T>>()
    }

    /// This arena's current instance id.
    pub fn id(&self) -> ArenaId {
        self.id
    }

    /// The configuration this arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    fn checked_slot_mut(&mut self, handle: SlotHandle) -> Result<&mut Slot<T>, ArenaError> {
        if handle.arena != self.id {
            return Err(ArenaError::ForeignHandle);
        }
        let slot = self
            .blocks
            .get_mut(handle.block as usize)
            .and_then(|b| b.slot_mut(handle.offset))
            .ok_or(ArenaError::ForeignHandle)?;
        if slot.generation != handle.generation {
            return Err(ArenaError::StaleHandle);
        }
        Ok(slot)
    }

    /// Allocate one block covering at least `need` slots.
    fn grow(&mut self, need: usize) -> Result<(), ArenaError> {
        let mut count = self.next_block_capacity.max(need);
        if let Some(max) = self.config.max_slots {
            let remaining = max.saturating_sub(self.total_slots);
            if remaining < need {
                return Err(ArenaError::CapacityExceeded {
                    requested: need,
                    capacity: max,
                });
            }
            count = count.min(remaining);
        }
        let block_index =
            u32::try_from(self.blocks.len()).map_err(|_| ArenaError::CapacityExceeded {
                requested: need,
                capacity: self.total_slots,
            })?;
        let slot_count = u32::try_from(count).map_err(|_| ArenaError::CapacityExceeded {
            requested: need,
            capacity: u32::MAX as usize,
        })?;

        self.blocks
            .try_reserve(1)
            .map_err(|_| ArenaError::AllocationFailed {
                requested_slots: count,
            })?;
        self.free
            .try_reserve(self.total_slots + count - self.free.len())
            .map_err(|_| ArenaError::AllocationFailed {
                requested_slots: count,
            })?;
        let block = Block::try_new(count)?;

        // Reverse order so pops hand out ascending offsets.
        self.free.extend((0..slot_count).rev().map(|offset| SlotPos {
            block: block_index,
            offset,
        }));
        self.blocks.push(block);
        self.total_slots += count;
        debug_assert_eq!(
            self.blocks.iter().map(Block::len).sum::<usize>(),
            self.total_slots
        );
        self.next_block_capacity = self
            .next_block_capacity
            .saturating_mul(2)
            .min(self.config.max_block_capacity);
        Ok(())
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::with_valid_config(ArenaConfig::default())
    }
}

/// # Panics
///
/// Panics if `handle` is foreign or stale. Use [`Arena::get`] for a
/// checked lookup.
impl<T> Index<SlotHandle> for Arena<T> {
    type Output = T;

    fn index(&self, handle: SlotHandle) -> &T {
        match self.get(handle) {
            Some(value) => value,
            None => panic!("invalid arena handle: {handle}"),
        }
    }
}

/// # Panics
///
/// Panics if `handle` is foreign or stale. Use [`Arena::get_mut`] for a
/// checked lookup.
impl<T> IndexMut<SlotHandle> for Arena<T> {
    fn index_mut(&mut self, handle: SlotHandle) -> &mut T {
        match self.get_mut(handle) {
            Some(value) => value,
            None => panic!("invalid arena handle: {handle}"),
        }
    }
}

impl<T> std::fmt::Debug for Arena<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("id", &self.id)
            .field("live", &self.live)
            .field("capacity_slots", &self.total_slots)
            .field("free_slots", &self.free.len())
            .field("retired_slots", &self.retired)
            .field("blocks", &self.blocks.len())
            .finish()
    }
}

impl<T> Drop for Arena<T> {
    fn drop(&mut self) {
        if cfg!(debug_assertions) && self.live > 0 {
            eprintln!(
                "skew-arena: arena {} dropped with {} live objects; dropping them in place",
                self.id, self.live
            );
        }
    }
}
