//! Arena fixtures and invariant assertions.

use skein_arena::{ArenaConfig, ArenaStr, StackArena};
use skein_core::RegionRead;

/// Build an arena with the given byte capacity and slot count.
pub fn arena(capacity: usize, slots: u8) -> StackArena {
    StackArena::new(ArenaConfig::with_slots(capacity, slots))
}

/// Build an arena pre-filled with `contents`, returning the views in
/// push order.
///
/// # Panics
///
/// Panics if the contents do not fit the given capacity or slot count.
pub fn filled(capacity: usize, slots: u8, contents: &[&[u8]]) -> (StackArena, Vec<ArenaStr>) {
    let mut a = arena(capacity, slots);
    let views = contents
        .iter()
        .map(|c| a.push(c).expect("fixture contents must fit the arena"))
        .collect();
    (a, views)
}

/// Assert the arena's structural invariants through its public API:
/// capacity conservation (live region capacities plus the unallocated
/// tail sum to the arena capacity) and the handle table permutation
/// (index → view → index round-trips for every live region).
///
/// # Panics
///
/// Panics if any invariant is violated.
pub fn assert_consistent(a: &StackArena) {
    assert!(a.live() <= a.max_slots(), "live count exceeds slot table");

    let mut used = 0;
    for i in 0..a.live() {
        let view = a.get(i).unwrap_or_else(|| panic!("no view for live region {i}"));
        assert_eq!(view.index(a), Some(i), "handle round-trip broken at {i}");
        let cap = view.capacity(a);
        assert!(cap >= 1, "region {i} has no room for a terminator");
        used += cap;
    }
    assert_eq!(
        used + a.unallocated_bytes(),
        a.capacity(),
        "capacity not conserved",
    );
}

/// Assert the arena holds exactly `expected`, in stack order, and is
/// structurally consistent.
///
/// # Panics
///
/// Panics on any content or invariant mismatch.
pub fn assert_contents(a: &StackArena, expected: &[&[u8]]) {
    assert_consistent(a);
    assert_eq!(a.live(), expected.len(), "live region count mismatch");
    for (i, want) in expected.iter().enumerate() {
        let view = a.get(i).expect("checked live above");
        let got = view
            .as_bytes(a)
            .unwrap_or_else(|| panic!("region {i} is unmeasurable"));
        assert_eq!(&got, want, "content mismatch at region {i}");
    }
}
