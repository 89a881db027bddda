//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for the slab arena.
///
/// Controls block sizing and the optional total slot budget. Validated at
/// construction; immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Slot count of the first block grown on demand.
    ///
    /// Default: 4096. Doubles after every growth until
    /// [`max_block_capacity`](Self::max_block_capacity).
    pub initial_block_capacity: usize,

    /// Ceiling for the geometric block growth.
    ///
    /// Default: 2^28 slots. Once reached, every further block is sized
    /// `max(max_block_capacity, need)`. Must not exceed `u32::MAX`, since
    /// handles address slots within a block by `u32` offset.
    pub max_block_capacity: usize,

    /// Upper bound on the total number of slots across all blocks.
    ///
    /// `None` (default) leaves growth bounded only by the allocator.
    pub max_slots: Option<usize>,
}

impl ArenaConfig {
    /// Default slot count of the first block.
    pub const DEFAULT_INITIAL_BLOCK_CAPACITY: usize = 4096;

    /// Default ceiling for geometric block growth.
    pub const DEFAULT_MAX_BLOCK_CAPACITY: usize = 1 << 28;

    /// Create a config with the given initial block capacity.
    ///
    /// Uses default values for all other parameters.
    pub fn new(initial_block_capacity: usize) -> Self {
        Self {
            initial_block_capacity,
            max_block_capacity: Self::DEFAULT_MAX_BLOCK_CAPACITY,
            max_slots: None,
        }
    }

    /// Set the total slot budget.
    pub fn with_max_slots(mut self, max_slots: usize) -> Self {
        self.max_slots = Some(max_slots);
        self
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::InvalidConfig`] if:
    /// - `initial_block_capacity` is zero
    /// - `max_block_capacity` is below `initial_block_capacity`
    /// - `max_block_capacity` exceeds `u32::MAX`
    /// - `max_slots` is `Some(0)`
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.initial_block_capacity == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "initial_block_capacity must be at least 1".into(),
            });
        }
        if self.max_block_capacity < self.initial_block_capacity {
            return Err(ArenaError::InvalidConfig {
                reason: format!(
                    "max_block_capacity ({}) is below initial_block_capacity ({})",
                    self.max_block_capacity, self.initial_block_capacity
                ),
            });
        }
        if self.max_block_capacity > u32::MAX as usize {
            return Err(ArenaError::InvalidConfig {
                reason: format!(
                    "max_block_capacity ({}) exceeds u32::MAX",
                    self.max_block_capacity
                ),
            });
        }
        if self.max_slots == Some(0) {
            return Err(ArenaError::InvalidConfig {
                reason: "max_slots must be at least 1 when set".into(),
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_BLOCK_CAPACITY)
    }
}
