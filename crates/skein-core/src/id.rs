//! Stable string handles and arena instance identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// Stable identifier for one string slot within an arena.
///
/// A handle survives relocation of its region: the arena maps handles to
/// region indices through an indirection table, so compaction performed on
/// behalf of one string never invalidates the handles of the others. A
/// handle freed by removal may later be recycled for a new allocation.
///
/// Equality is slot identity, not content. String content is compared
/// through the view layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(pub u8);

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for Handle {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

/// Counter for unique [`ArenaId`] allocation.
static ARENA_COUNTER: AtomicU32 = AtomicU32::new(1);

/// Unique per-instance identifier for an arena.
///
/// Allocated from a monotonic atomic counter via [`ArenaId::next`]. Two
/// distinct arenas always have different IDs, even if one is dropped and
/// another is constructed at the same address. Views carry the ID of the
/// arena that created them, so a handle presented to a foreign arena
/// resolves to nothing instead of aliasing an unrelated slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArenaId(u32);

impl ArenaId {
    /// Allocate a fresh, unique instance ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(ARENA_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ArenaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
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
    }

    #[test]
    fn handle_round_trip() {
        let h = Handle::from(7);
        assert_eq!(h, Handle(7));
        assert_eq!(h.to_string(), "7");
    }
}
