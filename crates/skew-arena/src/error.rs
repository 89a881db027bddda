//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
///
/// Allocation failures are reported once and never retried. Every other
/// variant is a caller contract breach; the arena is left untouched when
/// one is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The system allocator refused a new block.
    AllocationFailed {
        /// Number of slots the failed block would have held.
        requested_slots: usize,
    },
    /// Growing would exceed the configured slot budget or the
    /// addressable range of a handle.
    CapacityExceeded {
        /// Number of additional slots requested.
        requested: usize,
        /// Maximum number of slots this arena may hold.
        capacity: usize,
    },
    /// The handle was issued by a different arena, or by this arena
    /// before its blocks were released.
    ForeignHandle,
    /// The handle's slot was already destroyed (and possibly reused).
    StaleHandle,
    /// `release_all` was called while objects were still live.
    LiveObjects {
        /// Number of objects still live.
        live: usize,
    },
    /// An [`ArenaConfig`](crate::ArenaConfig) failed validation.
    InvalidConfig {
        /// Description of the violated constraint.
        reason: String,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested_slots } => {
                write!(f, "block allocation failed: {requested_slots} slots")
            }
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} more slots, capacity {capacity} slots"
                )
            }
            Self::ForeignHandle => write!(f, "handle does not belong to this arena"),
            Self::StaleHandle => write!(f, "handle refers to a destroyed slot"),
            Self::LiveObjects { live } => {
                write!(f, "cannot release arena with {live} live objects")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid arena config: {reason}"),
        }
    }
}

impl Error for ArenaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_live_count() {
        let err = ArenaError::LiveObjects { live: 3 };
        assert_eq!(err.to_string(), "cannot release arena with 3 live objects");
    }

    #[test]
    fn display_capacity_exceeded() {
        let err = ArenaError::CapacityExceeded {
            requested: 10,
            capacity: 8,
        };
        assert!(err.to_string().contains("requested 10"));
        assert!(err.to_string().contains("capacity 8"));
    }
}
