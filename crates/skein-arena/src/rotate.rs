//! Adjacent-range rotation with bounded scratch space.
//!
//! Relocating a region to the top of the stack rewrites `[moved][tail]`
//! as `[tail][moved]` — a left rotation of one contiguous span. The
//! primitive below performs it through an external scratch buffer,
//! chunking the moved range when the scratch is smaller than it, so the
//! arena can rotate with whatever free tail it has left (or a tiny stack
//! buffer when it has none). Independent of string semantics.

/// Chunk size used when the arena has no usable free tail.
pub(crate) const MIN_SCRATCH: usize = 8;

/// Rotate `span` left by `mid` bytes, staging chunks in `scratch`.
///
/// Equivalent to `span.rotate_left(mid)`. Each iteration stashes the
/// trailing chunk of the not-yet-moved range, shifts the tail left over
/// it, and drops the chunk in behind — total extra copying is
/// O(`span.len()`) however small `scratch` is.
///
/// # Panics
///
/// Panics if `mid > span.len()` or `scratch` is empty.
pub(crate) fn rotate_left_with_scratch(span: &mut [u8], mid: usize, scratch: &mut [u8]) {
    assert!(mid <= span.len(), "rotation midpoint outside span");
    assert!(!scratch.is_empty(), "rotation requires scratch space");

    let tail = span.len() - mid;
    if mid == 0 || tail == 0 {
        return;
    }

    let mut remaining = mid;
    let mut chunk = remaining.min(scratch.len());
    while remaining > 0 {
        let from = remaining - chunk;
        scratch[..chunk].copy_from_slice(&span[from..from + chunk]);
        span.copy_within(from + chunk..from + chunk + tail, from);
        span[from + tail..from + tail + chunk].copy_from_slice(&scratch[..chunk]);

        remaining -= chunk;
        chunk = chunk.min(remaining);
    }
}
