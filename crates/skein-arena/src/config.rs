//! Arena configuration parameters.

/// Configuration for a [`StackArena`](crate::StackArena).
///
/// Both values are fixed for the arena's lifetime; the arena itself is
/// never resized. Validated at construction.
#[derive(Clone, Debug)]
pub struct ArenaConfig {
    /// Total byte capacity of the arena.
    ///
    /// Every live region's capacity plus the unallocated tail always sums
    /// to this value. Must be at least 1.
    pub capacity: usize,

    /// Size of the handle table — the maximum number of simultaneously
    /// live strings. Must be in `1..=254`.
    pub max_slots: u8,
}

impl ArenaConfig {
    /// Default byte capacity.
    pub const DEFAULT_CAPACITY: usize = 4096;

    /// Default handle table size.
    pub const DEFAULT_MAX_SLOTS: u8 = 16;

    /// Create a config with the given byte capacity and the default
    /// slot count.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            max_slots: Self::DEFAULT_MAX_SLOTS,
        }
    }

    /// Create a config with explicit byte capacity and slot count.
    pub fn with_slots(capacity: usize, max_slots: u8) -> Self {
        Self {
            capacity,
            max_slots,
        }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_slots() {
        let config = ArenaConfig::new(128);
        assert_eq!(config.capacity, 128);
        assert_eq!(config.max_slots, ArenaConfig::DEFAULT_MAX_SLOTS);
    }

    #[test]
    fn with_slots_preserves_both() {
        let config = ArenaConfig::with_slots(64, 4);
        assert_eq!(config.capacity, 64);
        assert_eq!(config.max_slots, 4);
    }
}
