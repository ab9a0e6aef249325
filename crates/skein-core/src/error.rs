//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use crate::Handle;

/// Errors that can occur during arena operations.
///
/// Every failure is reported synchronously and leaves the arena in the
/// state it had before the call — partial writes are never observable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Not enough unallocated bytes remain for the request.
    CapacityExhausted {
        /// Number of bytes the operation needed.
        requested: usize,
        /// Number of bytes that were actually available to it.
        unallocated: usize,
    },
    /// The handle table is full — no more strings can be allocated.
    SlotsExhausted {
        /// Size of the handle table.
        slots: usize,
    },
    /// A handle that is freed, recycled, or belongs to a different arena.
    StaleHandle {
        /// The handle that failed to resolve.
        handle: Handle,
    },
    /// The region holds no terminator within its capacity, so its logical
    /// length cannot be measured. Only a caller writing raw bytes past the
    /// logical string can produce this state.
    Unterminated {
        /// The handle of the corrupted region.
        handle: Handle,
    },
    /// An index or range argument lies outside the region.
    OutOfBounds {
        /// The offending index (for ranges, the end of the range).
        index: usize,
        /// The first out-of-range value.
        limit: usize,
    },
    /// A top-of-stack operation was attempted on an empty arena.
    Empty,
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExhausted {
                requested,
                unallocated,
            } => {
                write!(
                    f,
                    "arena capacity exhausted: requested {requested} bytes, {unallocated} unallocated"
                )
            }
            Self::SlotsExhausted { slots } => {
                write!(f, "all {slots} string slots are in use")
            }
            Self::StaleHandle { handle } => {
                write!(f, "stale or foreign handle {handle}")
            }
            Self::Unterminated { handle } => {
                write!(f, "region of handle {handle} has no terminator")
            }
            Self::OutOfBounds { index, limit } => {
                write!(f, "index {index} out of bounds (limit {limit})")
            }
            Self::Empty => write!(f, "arena holds no strings"),
        }
    }
}

impl Error for ArenaError {}
