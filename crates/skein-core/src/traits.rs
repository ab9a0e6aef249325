//! Capability traits decoupling the text layer from the arena strategy.
//!
//! Views perform every operation through these traits rather than a
//! concrete arena type, so an alternative slot or capacity policy can be
//! substituted without touching the text algorithms.

use crate::{ArenaError, ArenaId, Handle};

/// Read access to a store of string regions.
///
/// A region is a contiguous byte span holding one logical string; the
/// logical string ends at the first NUL byte within the region, and bytes
/// past it up to the region's capacity are unspecified until written.
pub trait RegionRead {
    /// The unique instance ID of this store.
    ///
    /// Views compare this against the ID they carry; a mismatch means the
    /// handle is foreign and resolves to nothing.
    fn id(&self) -> ArenaId;

    /// Resolve a handle to its current region index.
    ///
    /// Returns `None` for freed or never-allocated handles.
    fn resolve(&self, handle: Handle) -> Option<usize>;

    /// The full capacity slice of the region at `index`.
    ///
    /// Returns `None` if `index` is not a live region.
    fn region(&self, index: usize) -> Option<&[u8]>;

    /// Number of live regions.
    fn live(&self) -> usize;

    /// Size of the handle table (maximum simultaneously live regions).
    fn max_slots(&self) -> usize;

    /// Total byte capacity of the store.
    fn capacity(&self) -> usize;

    /// Bytes not allocated to any region.
    fn unallocated_bytes(&self) -> usize;
}

/// Structural mutation of a stack-ordered region store.
///
/// The stack discipline lives here: only the top region can change
/// capacity ([`resize_top`](StackStore::resize_top)) or grow at its
/// physical end ([`extend_top`](StackStore::extend_top)); any other
/// region must first be promoted.
pub trait StackStore: RegionRead {
    /// The full capacity slice of the region at `index`, mutable.
    fn region_mut(&mut self, index: usize) -> Option<&mut [u8]>;

    /// Grow the top region in place, copying from `bytes`.
    ///
    /// Copying starts at the byte currently holding the region's last
    /// byte (by convention its terminator) and stops at `limit` bytes, at
    /// a NUL in the source, or at the source's end; a terminator is
    /// written after the copied bytes. Fails with state unchanged if the
    /// unallocated tail cannot hold the full request. On an empty store
    /// this degrades to an allocation.
    fn extend_top(&mut self, bytes: &[u8], limit: usize) -> Result<Handle, ArenaError>;

    /// Change the top region's capacity to `max_len + 1` bytes.
    ///
    /// Writes a terminator at the new last byte. Shrinking below the
    /// logical length truncates the string.
    fn resize_top(&mut self, max_len: usize) -> Result<Handle, ArenaError>;

    /// Relocate the region of `handle` to the top of the stack.
    ///
    /// Preserves total bytes in use and every other live region's
    /// relative order and content. A no-op success when already top.
    fn promote(&mut self, handle: Handle) -> Result<(), ArenaError>;

    /// Free the region of `handle`, compacting the regions above it.
    fn release(&mut self, handle: Handle) -> Result<(), ArenaError>;

    /// Allocate a new region holding a copy of another region's content.
    ///
    /// Copies from offset `start` within the source region, stopping at a
    /// NUL, at `limit` bytes, or at the source's capacity. The source is
    /// never mutated.
    fn duplicate(&mut self, handle: Handle, start: usize, limit: usize)
        -> Result<Handle, ArenaError>;
}
