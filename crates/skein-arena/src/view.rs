//! String views and the text-operation surface.
//!
//! An [`ArenaStr`] is the caller-facing value for one arena string: the
//! owning arena's ID plus a stable [`Handle`]. It stores no offset,
//! length, or capacity — every call re-resolves through the store's
//! indirection table, which is what keeps views valid while other
//! operations compact the arena underneath them.
//!
//! All operations are total with respect to stale or foreign views: they
//! return `None`/`Err`/`false` and leave the store unchanged.

use std::cmp::Ordering;
use std::fmt;

use skein_core::{ArenaError, ArenaId, Handle, RegionRead, StackStore};

use crate::stack::{clip_source, NUL};

/// A string stored in an arena, addressed by stable handle.
///
/// Copyable and cheap; copies alias the same string. Equality on the
/// view itself is slot identity — use [`content_eq`](ArenaStr::content_eq)
/// or [`compare`](ArenaStr::compare) for content.
///
/// Operations take the store explicitly (`&impl RegionRead` to read,
/// `&mut impl StackStore` to mutate), so view code is independent of the
/// arena strategy behind the traits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct ArenaStr {
    arena: ArenaId,
    handle: Handle,
}

impl ArenaStr {
    pub(crate) fn new(arena: ArenaId, handle: Handle) -> Self {
        Self { arena, handle }
    }

    /// The stable handle within the owning arena.
    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// The ID of the owning arena.
    pub fn arena_id(&self) -> ArenaId {
        self.arena
    }

    fn stale(&self) -> ArenaError {
        ArenaError::StaleHandle {
            handle: self.handle,
        }
    }

    // ── resolution & queries ───────────────────────────────────────

    /// Current region index within the owning store, or `None` if this
    /// view is stale or `store` is not its owner.
    pub fn index<S: RegionRead + ?Sized>(&self, store: &S) -> Option<usize> {
        if store.id() != self.arena {
            return None;
        }
        store.resolve(self.handle)
    }

    /// Whether this view currently resolves to a live region.
    pub fn is_allocated<S: RegionRead + ?Sized>(&self, store: &S) -> bool {
        self.index(store).is_some()
    }

    /// The full region slice, including spare capacity past the logical
    /// string.
    pub fn raw<'s, S: RegionRead + ?Sized>(&self, store: &'s S) -> Option<&'s [u8]> {
        store.region(self.index(store)?)
    }

    /// Region capacity in bytes (content plus terminator); 0 when stale.
    pub fn capacity<S: RegionRead + ?Sized>(&self, store: &S) -> usize {
        self.raw(store).map_or(0, <[u8]>::len)
    }

    /// Longest content the region can hold, `capacity - 1`.
    pub fn max_len<S: RegionRead + ?Sized>(&self, store: &S) -> usize {
        self.capacity(store).saturating_sub(1)
    }

    /// Logical length: bytes before the first terminator.
    ///
    /// `None` when the view is stale, or when no terminator exists within
    /// the region's capacity (possible only after a caller overwrote it
    /// through [`set_byte`](Self::set_byte) or [`raw`](Self::raw) access).
    pub fn len<S: RegionRead + ?Sized>(&self, store: &S) -> Option<usize> {
        self.raw(store)?.iter().position(|&b| b == NUL)
    }

    /// Whether the view resolves to an empty string.
    pub fn is_empty<S: RegionRead + ?Sized>(&self, store: &S) -> bool {
        matches!(self.len(store), Some(0))
    }

    /// The logical content bytes.
    pub fn as_bytes<'s, S: RegionRead + ?Sized>(&self, store: &'s S) -> Option<&'s [u8]> {
        let region = self.raw(store)?;
        let len = region.iter().position(|&b| b == NUL)?;
        Some(&region[..len])
    }

    /// The logical content as UTF-8, if valid.
    pub fn as_str<'s, S: RegionRead + ?Sized>(&self, store: &'s S) -> Option<&'s str> {
        std::str::from_utf8(self.as_bytes(store)?).ok()
    }

    /// The byte at `index` within the region's capacity.
    pub fn byte_at<S: RegionRead + ?Sized>(&self, store: &S, index: usize) -> Option<u8> {
        self.raw(store)?.get(index).copied()
    }

    /// Overwrite the byte at `index` within the region's capacity.
    ///
    /// This is the raw escape hatch: writing over the terminator leaves
    /// the region unmeasurable (`len` returns `None`) until a terminator
    /// is written back.
    pub fn set_byte<S: StackStore + ?Sized>(
        &self,
        store: &mut S,
        index: usize,
        byte: u8,
    ) -> Result<(), ArenaError> {
        let i = self.index(store).ok_or(self.stale())?;
        let region = store.region_mut(i).expect("resolved above");
        let cap = region.len();
        let slot = region
            .get_mut(index)
            .ok_or(ArenaError::OutOfBounds { index, limit: cap })?;
        *slot = byte;
        Ok(())
    }

    /// Logical length, with the failure cause distinguished.
    fn measured_len<S: RegionRead + ?Sized>(&self, store: &S) -> Result<usize, ArenaError> {
        let index = self.index(store).ok_or(self.stale())?;
        let region = store.region(index).expect("resolved above");
        region
            .iter()
            .position(|&b| b == NUL)
            .ok_or(ArenaError::Unterminated {
                handle: self.handle,
            })
    }

    // ── append family ──────────────────────────────────────────────

    /// Append `bytes` to the string.
    ///
    /// Fast path writes into the region's spare capacity with no
    /// structural change. When the spare runs out, the region is promoted
    /// to the top of the stack, shrunk to its logical length, and
    /// extended. Feasibility is checked before the first byte is written:
    /// on failure the content is untouched.
    pub fn append<S: StackStore + ?Sized>(
        &self,
        store: &mut S,
        bytes: &[u8],
    ) -> Result<(), ArenaError> {
        self.append_limited(store, bytes, usize::MAX)
    }

    /// [`append`](Self::append), copying at most `limit` bytes.
    pub fn append_limited<S: StackStore + ?Sized>(
        &self,
        store: &mut S,
        bytes: &[u8],
        limit: usize,
    ) -> Result<(), ArenaError> {
        let index = self.index(store).ok_or(self.stale())?;
        let region = store.region(index).expect("resolved above");
        let cap = region.len();
        let len = region
            .iter()
            .position(|&b| b == NUL)
            .ok_or(ArenaError::Unterminated {
                handle: self.handle,
            })?;
        let src = clip_source(bytes, limit);
        let spare = cap - 1 - len;

        if src.len() <= spare {
            let region = store.region_mut(index).expect("resolved above");
            region[len..len + src.len()].copy_from_slice(src);
            region[len + src.len()] = NUL;
            return Ok(());
        }

        if src.len() > spare + store.unallocated_bytes() {
            return Err(ArenaError::CapacityExhausted {
                requested: src.len() - spare,
                unallocated: store.unallocated_bytes(),
            });
        }
        store.promote(self.handle)?;
        store.resize_top(len)?;
        store.extend_top(src, src.len())?;
        Ok(())
    }

    /// Append as much of `bytes` as the arena's unallocated tail allows.
    ///
    /// Never fails; returns the number of bytes appended. The clamp is
    /// the arena's unallocated byte count — spare capacity inside the
    /// region beyond that is deliberately not counted, matching the
    /// all-or-truncate contract of the append-most family.
    pub fn append_most<S: StackStore + ?Sized>(&self, store: &mut S, bytes: &[u8]) -> usize {
        self.append_most_limited(store, bytes, usize::MAX)
    }

    /// [`append_most`](Self::append_most), with an additional caller limit.
    pub fn append_most_limited<S: StackStore + ?Sized>(
        &self,
        store: &mut S,
        bytes: &[u8],
        limit: usize,
    ) -> usize {
        let clamp = limit.min(store.unallocated_bytes());
        let appended = clip_source(bytes, clamp).len();
        match self.append_limited(store, bytes, clamp) {
            Ok(()) => appended,
            Err(_) => 0,
        }
    }

    /// Append a `format_args!` rendering.
    ///
    /// The rendering is measured first and committed only when it fits
    /// (in the spare capacity, or after relocation in the arena's tail),
    /// so a failed append leaves the string byte-identical.
    pub fn append_fmt<S: StackStore + ?Sized>(
        &self,
        store: &mut S,
        args: fmt::Arguments<'_>,
    ) -> Result<(), ArenaError> {
        let index = self.index(store).ok_or(self.stale())?;
        let region = store.region(index).expect("resolved above");
        let cap = region.len();
        let len = region
            .iter()
            .position(|&b| b == NUL)
            .ok_or(ArenaError::Unterminated {
                handle: self.handle,
            })?;
        let spare = cap - 1 - len;
        let required = crate::fmt::measure(args);

        if required <= spare {
            let region = store.region_mut(index).expect("resolved above");
            let written = crate::fmt::render(&mut region[len..len + required], args);
            region[len + written] = NUL;
            return Ok(());
        }

        if required > spare + store.unallocated_bytes() {
            return Err(ArenaError::CapacityExhausted {
                requested: required - spare,
                unallocated: store.unallocated_bytes(),
            });
        }
        store.promote(self.handle)?;
        store.resize_top(len + required)?;
        let index = store.resolve(self.handle).expect("promoted to top");
        let region = store.region_mut(index).expect("resolved above");
        let written = crate::fmt::render(&mut region[len..len + required], args);
        region[len + written] = NUL;
        Ok(())
    }

    /// Append a rendering into the region's spare capacity only,
    /// truncating what does not fit. Never relocates, never fails;
    /// returns the number of bytes appended.
    pub fn append_most_fmt<S: StackStore + ?Sized>(
        &self,
        store: &mut S,
        args: fmt::Arguments<'_>,
    ) -> usize {
        let Some(index) = self.index(store) else {
            return 0;
        };
        let region = store.region_mut(index).expect("resolved above");
        let cap = region.len();
        let Some(len) = region.iter().position(|&b| b == NUL) else {
            return 0;
        };
        let spare = cap - 1 - len;
        if spare == 0 {
            return 0;
        }
        let written = crate::fmt::render(&mut region[len..len + spare], args);
        region[len + written] = NUL;
        written
    }

    /// Replace the content with `bytes`.
    ///
    /// Equivalent to [`clear`](Self::clear) + [`append`](Self::append);
    /// if the append fails the string is left cleared.
    pub fn set<S: StackStore + ?Sized>(
        &self,
        store: &mut S,
        bytes: &[u8],
    ) -> Result<(), ArenaError> {
        self.clear(store)?;
        self.append(store, bytes)
    }

    /// Replace the content with a `format_args!` rendering.
    pub fn set_fmt<S: StackStore + ?Sized>(
        &self,
        store: &mut S,
        args: fmt::Arguments<'_>,
    ) -> Result<(), ArenaError> {
        self.clear(store)?;
        self.append_fmt(store, args)
    }

    // ── structural edits ───────────────────────────────────────────

    /// Truncate to the empty string. Capacity is unchanged.
    pub fn clear<S: StackStore + ?Sized>(&self, store: &mut S) -> Result<(), ArenaError> {
        let index = self.index(store).ok_or(self.stale())?;
        let region = store.region_mut(index).expect("resolved above");
        region[0] = NUL;
        Ok(())
    }

    /// Change the region's capacity to `max_len + 1` bytes.
    ///
    /// Promotes the region to the top of the stack first (the only place
    /// capacity can change), then resizes. Shrinking below the logical
    /// length truncates the string.
    pub fn resize<S: StackStore + ?Sized>(
        &self,
        store: &mut S,
        max_len: usize,
    ) -> Result<(), ArenaError> {
        if self.index(store).is_none() {
            return Err(self.stale());
        }
        store.promote(self.handle)?;
        store.resize_top(max_len)?;
        Ok(())
    }

    /// Shrink the region's capacity to the logical length plus terminator.
    pub fn shrink_to_fit<S: StackStore + ?Sized>(&self, store: &mut S) -> Result<(), ArenaError> {
        let len = self.measured_len(store)?;
        self.resize(store, len)
    }

    /// Keep only the content from `start` to the end of the region,
    /// shifting it to the front.
    pub fn substring<S: StackStore + ?Sized>(
        &self,
        store: &mut S,
        start: usize,
    ) -> Result<(), ArenaError> {
        let index = self.index(store).ok_or(self.stale())?;
        let cap = store.region(index).expect("resolved above").len();
        if start > cap {
            return Err(ArenaError::OutOfBounds {
                index: start,
                limit: cap,
            });
        }
        self.substring_range(store, start, cap - start)
    }

    /// Keep only the `len` bytes starting at `start`, shifting them to
    /// the front of the region and reterminating.
    pub fn substring_range<S: StackStore + ?Sized>(
        &self,
        store: &mut S,
        start: usize,
        len: usize,
    ) -> Result<(), ArenaError> {
        let index = self.index(store).ok_or(self.stale())?;
        let region = store.region_mut(index).expect("resolved above");
        let cap = region.len();
        let end = start.checked_add(len).filter(|&e| e <= cap).ok_or(
            ArenaError::OutOfBounds {
                index: start.saturating_add(len),
                limit: cap,
            },
        )?;
        region.copy_within(start..end, 0);
        if len < cap {
            region[len] = NUL;
        }
        Ok(())
    }

    /// Remove this string from the arena. The handle becomes stale and
    /// may be recycled by a later allocation.
    pub fn deallocate<S: StackStore + ?Sized>(&self, store: &mut S) -> Result<(), ArenaError> {
        if store.id() != self.arena {
            return Err(self.stale());
        }
        store.release(self.handle)
    }

    // ── trimming ───────────────────────────────────────────────────

    /// Remove leading and trailing ASCII whitespace.
    pub fn trim<S: StackStore + ?Sized>(&self, store: &mut S) -> Result<(), ArenaError> {
        self.trim_with(store, |b| b.is_ascii_whitespace())
    }

    /// Remove leading and trailing bytes contained in `set`.
    pub fn trim_matching<S: StackStore + ?Sized>(
        &self,
        store: &mut S,
        set: &[u8],
    ) -> Result<(), ArenaError> {
        self.trim_with(store, |b| set.contains(&b))
    }

    /// Remove leading and trailing bytes matched by `pred`.
    pub fn trim_with<S, F>(&self, store: &mut S, pred: F) -> Result<(), ArenaError>
    where
        S: StackStore + ?Sized,
        F: Fn(u8) -> bool,
    {
        self.trim_end_with(store, &pred)?;
        self.trim_start_with(store, &pred)
    }

    /// Remove leading ASCII whitespace.
    pub fn trim_start<S: StackStore + ?Sized>(&self, store: &mut S) -> Result<(), ArenaError> {
        self.trim_start_with(store, |b| b.is_ascii_whitespace())
    }

    /// Remove leading bytes contained in `set`.
    pub fn trim_start_matching<S: StackStore + ?Sized>(
        &self,
        store: &mut S,
        set: &[u8],
    ) -> Result<(), ArenaError> {
        self.trim_start_with(store, |b| set.contains(&b))
    }

    /// Remove leading bytes matched by `pred` — a substring shift within
    /// the same region.
    pub fn trim_start_with<S, F>(&self, store: &mut S, pred: F) -> Result<(), ArenaError>
    where
        S: StackStore + ?Sized,
        F: Fn(u8) -> bool,
    {
        let index = self.index(store).ok_or(self.stale())?;
        let region = store.region(index).expect("resolved above");
        let cap = region.len();
        let cut = region.iter().take_while(|&&b| pred(b)).count();
        self.substring_range(store, cut, cap - cut)
    }

    /// Remove trailing ASCII whitespace.
    pub fn trim_end<S: StackStore + ?Sized>(&self, store: &mut S) -> Result<(), ArenaError> {
        self.trim_end_with(store, |b| b.is_ascii_whitespace())
    }

    /// Remove trailing bytes contained in `set`.
    pub fn trim_end_matching<S: StackStore + ?Sized>(
        &self,
        store: &mut S,
        set: &[u8],
    ) -> Result<(), ArenaError> {
        self.trim_end_with(store, |b| set.contains(&b))
    }

    /// Remove trailing bytes matched by `pred` — writes an earlier
    /// terminator, capacity unchanged.
    pub fn trim_end_with<S, F>(&self, store: &mut S, pred: F) -> Result<(), ArenaError>
    where
        S: StackStore + ?Sized,
        F: Fn(u8) -> bool,
    {
        let len = self.measured_len(store)?;
        let index = self.index(store).expect("measured above");
        let region = store.region_mut(index).expect("resolved above");
        match region[..len].iter().rposition(|&b| !pred(b)) {
            Some(keep) => region[keep + 1] = NUL,
            None => region[0] = NUL,
        }
        Ok(())
    }

    // ── case folding ───────────────────────────────────────────────

    /// Fold ASCII letters to lower case in place; other bytes (including
    /// multi-byte UTF-8 sequences) pass through unchanged.
    pub fn to_lower<S: StackStore + ?Sized>(&self, store: &mut S) -> Result<(), ArenaError> {
        let index = self.index(store).ok_or(self.stale())?;
        let region = store.region_mut(index).expect("resolved above");
        for b in region.iter_mut() {
            if *b == NUL {
                break;
            }
            b.make_ascii_lowercase();
        }
        Ok(())
    }

    /// Fold ASCII letters to upper case in place; other bytes pass
    /// through unchanged.
    pub fn to_upper<S: StackStore + ?Sized>(&self, store: &mut S) -> Result<(), ArenaError> {
        let index = self.index(store).ok_or(self.stale())?;
        let region = store.region_mut(index).expect("resolved above");
        for b in region.iter_mut() {
            if *b == NUL {
                break;
            }
            b.make_ascii_uppercase();
        }
        Ok(())
    }

    // ── searching ──────────────────────────────────────────────────
    //
    // Forward searches scan the region's ENTIRE capacity from `start`,
    // not just the logical string: a match can land in unspecified bytes
    // past the terminator when the region is larger than its content.
    // Backward searches start at the logical end, confining them to
    // content unless an explicit `from` is given.

    /// First occurrence of `byte` at or after `start`, over the full
    /// region capacity.
    pub fn find_byte<S: RegionRead + ?Sized>(
        &self,
        store: &S,
        byte: u8,
        start: usize,
    ) -> Option<usize> {
        let region = self.raw(store)?;
        region
            .get(start..)?
            .iter()
            .position(|&b| b == byte)
            .map(|i| start + i)
    }

    /// First occurrence of `needle` at or after `start`, over the full
    /// region capacity. An empty needle matches at `start`.
    pub fn find<S: RegionRead + ?Sized>(
        &self,
        store: &S,
        needle: &[u8],
        start: usize,
    ) -> Option<usize> {
        let region = self.raw(store)?;
        let hay = region.get(start..)?;
        if needle.is_empty() {
            return Some(start);
        }
        hay.windows(needle.len())
            .position(|w| w == needle)
            .map(|i| start + i)
    }

    /// First occurrence of any byte in `set` at or after `start`.
    pub fn find_any<S: RegionRead + ?Sized>(
        &self,
        store: &S,
        set: &[u8],
        start: usize,
    ) -> Option<usize> {
        self.find_where(store, |b| set.contains(&b), start)
    }

    /// First byte at or after `start` matched by `pred`.
    pub fn find_where<S, F>(&self, store: &S, pred: F, start: usize) -> Option<usize>
    where
        S: RegionRead + ?Sized,
        F: Fn(u8) -> bool,
    {
        let region = self.raw(store)?;
        region
            .get(start..)?
            .iter()
            .position(|&b| pred(b))
            .map(|i| start + i)
    }

    /// Last occurrence of `byte` within the logical string.
    pub fn rfind_byte<S: RegionRead + ?Sized>(&self, store: &S, byte: u8) -> Option<usize> {
        let from = self.len(store)?.checked_sub(1)?;
        self.rfind_byte_from(store, byte, from)
    }

    /// Last occurrence of `byte` at or before `from` (which may lie past
    /// the terminator, up to the region capacity).
    pub fn rfind_byte_from<S: RegionRead + ?Sized>(
        &self,
        store: &S,
        byte: u8,
        from: usize,
    ) -> Option<usize> {
        let region = self.raw(store)?;
        if from >= region.len() {
            return None;
        }
        region[..=from].iter().rposition(|&b| b == byte)
    }

    /// Last occurrence of `needle` ending within the logical string.
    pub fn rfind<S: RegionRead + ?Sized>(&self, store: &S, needle: &[u8]) -> Option<usize> {
        let from = self.len(store)?.checked_sub(1)?;
        self.rfind_from(store, needle, from)
    }

    /// Last occurrence of `needle` ending at or before `from + 1`.
    pub fn rfind_from<S: RegionRead + ?Sized>(
        &self,
        store: &S,
        needle: &[u8],
        from: usize,
    ) -> Option<usize> {
        let region = self.raw(store)?;
        if from >= region.len() {
            return None;
        }
        let hay = &region[..=from];
        if needle.is_empty() {
            return Some(from);
        }
        if needle.len() > hay.len() {
            return None;
        }
        hay.windows(needle.len()).rposition(|w| w == needle)
    }

    /// Last occurrence of any byte in `set` within the logical string.
    pub fn rfind_any<S: RegionRead + ?Sized>(&self, store: &S, set: &[u8]) -> Option<usize> {
        let from = self.len(store)?.checked_sub(1)?;
        self.rfind_where_from(store, |b| set.contains(&b), from)
    }

    /// Last occurrence of any byte in `set` at or before `from`.
    pub fn rfind_any_from<S: RegionRead + ?Sized>(
        &self,
        store: &S,
        set: &[u8],
        from: usize,
    ) -> Option<usize> {
        self.rfind_where_from(store, |b| set.contains(&b), from)
    }

    /// Last byte within the logical string matched by `pred`.
    pub fn rfind_where<S, F>(&self, store: &S, pred: F) -> Option<usize>
    where
        S: RegionRead + ?Sized,
        F: Fn(u8) -> bool,
    {
        let from = self.len(store)?.checked_sub(1)?;
        self.rfind_where_from(store, pred, from)
    }

    /// Last byte at or before `from` matched by `pred`.
    pub fn rfind_where_from<S, F>(&self, store: &S, pred: F, from: usize) -> Option<usize>
    where
        S: RegionRead + ?Sized,
        F: Fn(u8) -> bool,
    {
        let region = self.raw(store)?;
        if from >= region.len() {
            return None;
        }
        region[..=from].iter().rposition(|&b| pred(b))
    }

    // ── prefix / suffix / comparison ───────────────────────────────

    /// Whether the region starts with `prefix`.
    ///
    /// Compared against raw region bytes, so a prefix can match into
    /// spare capacity only if it contains no terminator byte mismatch.
    pub fn starts_with<S: RegionRead + ?Sized>(&self, store: &S, prefix: &[u8]) -> bool {
        match self.raw(store) {
            Some(region) => {
                region.len() >= prefix.len() && &region[..prefix.len()] == prefix
            }
            None => false,
        }
    }

    /// Whether the region starts with the logical content of `other`.
    pub fn starts_with_str<S: RegionRead + ?Sized>(&self, store: &S, other: ArenaStr) -> bool {
        match other.as_bytes(store) {
            Some(b) => self.starts_with(store, b),
            None => false,
        }
    }

    /// Whether the logical string ends with `suffix`.
    ///
    /// `false` whenever the string is unmeasurable or shorter than
    /// `suffix`.
    pub fn ends_with<S: RegionRead + ?Sized>(&self, store: &S, suffix: &[u8]) -> bool {
        let Some(len) = self.len(store) else {
            return false;
        };
        if suffix.len() > len {
            return false;
        }
        let region = self.raw(store).expect("len() implies resolvable");
        &region[len - suffix.len()..len] == suffix
    }

    /// Whether the logical string ends with the logical content of
    /// `other`.
    pub fn ends_with_str<S: RegionRead + ?Sized>(&self, store: &S, other: ArenaStr) -> bool {
        match other.as_bytes(store) {
            Some(b) => self.ends_with(store, b),
            None => false,
        }
    }

    /// Total order over views: unmeasurable (stale or unterminated)
    /// sorts below every measurable string and equal to other
    /// unmeasurable views; measurable strings order by length first,
    /// then bytewise.
    pub fn compare<S: RegionRead + ?Sized>(&self, store: &S, other: ArenaStr) -> Ordering {
        match (self.as_bytes(store), other.as_bytes(store)) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => shortlex(a, b),
        }
    }

    /// [`compare`](Self::compare) against literal bytes; an unmeasurable
    /// view sorts below any byte string.
    pub fn compare_bytes<S: RegionRead + ?Sized>(&self, store: &S, other: &[u8]) -> Ordering {
        match self.as_bytes(store) {
            Some(a) => shortlex(a, other),
            None => Ordering::Less,
        }
    }

    /// Content equality with another view.
    pub fn content_eq<S: RegionRead + ?Sized>(&self, store: &S, other: ArenaStr) -> bool {
        self.compare(store, other) == Ordering::Equal
    }

    /// Content equality with literal bytes.
    pub fn content_eq_bytes<S: RegionRead + ?Sized>(&self, store: &S, other: &[u8]) -> bool {
        self.as_bytes(store).is_some_and(|a| a == other)
    }

    // ── duplication ────────────────────────────────────────────────

    /// Allocate an independent copy of this string on the same arena.
    pub fn duplicate<S: StackStore + ?Sized>(&self, store: &mut S) -> Result<ArenaStr, ArenaError> {
        self.duplicate_limited(store, 0, usize::MAX)
    }

    /// Copy of the content from `start` to the end of the region.
    pub fn duplicate_from<S: StackStore + ?Sized>(
        &self,
        store: &mut S,
        start: usize,
    ) -> Result<ArenaStr, ArenaError> {
        self.duplicate_limited(store, start, usize::MAX)
    }

    /// Copy of exactly the window `start..start + len`, which must lie
    /// within the region's capacity.
    pub fn duplicate_range<S: StackStore + ?Sized>(
        &self,
        store: &mut S,
        start: usize,
        len: usize,
    ) -> Result<ArenaStr, ArenaError> {
        let cap = self.capacity(store);
        if start.checked_add(len).is_none_or(|e| e > cap) {
            return Err(ArenaError::OutOfBounds {
                index: start.saturating_add(len),
                limit: cap,
            });
        }
        self.duplicate_limited(store, start, len)
    }

    /// Copy of at most `limit` bytes starting at `start`; the source is
    /// never mutated.
    pub fn duplicate_limited<S: StackStore + ?Sized>(
        &self,
        store: &mut S,
        start: usize,
        limit: usize,
    ) -> Result<ArenaStr, ArenaError> {
        if store.id() != self.arena {
            return Err(self.stale());
        }
        let handle = store.duplicate(self.handle, start, limit)?;
        Ok(ArenaStr::new(self.arena, handle))
    }
}

/// Length-first, then bytewise — the order used by `compare`.
fn shortlex(a: &[u8], b: &[u8]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
