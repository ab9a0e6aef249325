//! Integration tests for the stack discipline: promotion, compaction,
//! and handle stability across structural churn.

use skein::prelude::*;
use skein_test_utils::{assert_consistent, assert_contents, filled};

#[test]
fn single_slot_clear_and_regrow() {
    // Ten bytes, one slot: the slot's region must be able to shrink and
    // regrow through the whole arena.
    let mut arena = StackArena::new(ArenaConfig::with_slots(10, 1));
    let s = arena.push(b"123").unwrap();
    s.clear(&mut arena).unwrap();
    s.append(&mut arena, b"123456").unwrap();
    assert_eq!(s.as_bytes(&arena), Some(&b"123456"[..]));
    assert_eq!(s.len(&arena), Some(6));
    assert_consistent(&arena);
}

#[test]
fn move_to_top_preserves_every_byte() {
    let (mut arena, views) = filled(50, 4, &[b"1234", b"567", b"89", b"0"]);

    arena.move_to_top(views[0]).unwrap();
    assert_contents(&arena, &[b"567", b"89", b"0", b"1234"]);

    // Every view still resolves to its original content.
    assert_eq!(views[0].as_bytes(&arena), Some(&b"1234"[..]));
    assert_eq!(views[1].as_bytes(&arena), Some(&b"567"[..]));
    assert_eq!(views[2].as_bytes(&arena), Some(&b"89"[..]));
    assert_eq!(views[3].as_bytes(&arena), Some(&b"0"[..]));
}

#[test]
fn full_arena_append_fails_and_leaves_no_trace() {
    let mut arena = StackArena::new(ArenaConfig::with_slots(10, 2));
    let s = arena.allocate_remaining().unwrap();
    assert_eq!(arena.unallocated_bytes(), 0);

    let err = arena.append_to_topmost(b"123456789").unwrap_err();
    assert!(matches!(err, ArenaError::CapacityExhausted { .. }));
    assert_eq!(s.len(&arena), Some(0));
    assert_eq!(arena.unallocated_bytes(), 0);
    assert_consistent(&arena);
}

#[test]
fn removing_the_first_region_compacts_the_rest() {
    let (mut arena, views) = filled(32, 4, &[b"1234", b"567", b"89"]);

    arena.remove(views[0]).unwrap();
    assert!(!views[0].is_allocated(&arena));
    assert_contents(&arena, &[b"567", b"89"]);
}

#[test]
fn interleaved_edits_keep_unrelated_views_stable() {
    let (mut arena, views) = filled(128, 8, &[b"alpha", b"beta", b"gamma", b"delta"]);

    // Grow an interior string (relocates it), remove another, then trim
    // a third; the untouched one must never change.
    views[1].append(&mut arena, b"-prime").unwrap();
    assert_consistent(&arena);
    arena.remove(views[2]).unwrap();
    assert_consistent(&arena);
    views[0].trim_matching(&mut arena, b"a").unwrap();
    assert_consistent(&arena);

    assert_eq!(views[0].as_bytes(&arena), Some(&b"lph"[..]));
    assert_eq!(views[1].as_bytes(&arena), Some(&b"beta-prime"[..]));
    assert!(!views[2].is_allocated(&arena));
    assert_eq!(views[3].as_bytes(&arena), Some(&b"delta"[..]));
}

#[test]
fn exhausting_and_recycling_every_slot() {
    let mut arena = StackArena::new(ArenaConfig::with_slots(64, 4));
    let views: Vec<ArenaStr> = (0..4)
        .map(|i| arena.push_fmt(format_args!("s{i}")).unwrap())
        .collect();
    assert!(matches!(
        arena.push(b"overflow"),
        Err(ArenaError::SlotsExhausted { .. }),
    ));

    for v in &views {
        arena.remove(*v).unwrap();
    }
    assert_eq!(arena.live(), 0);
    assert_eq!(arena.unallocated_bytes(), 64);

    // Freed handles are recyclable for a fresh generation of strings.
    for i in 0..4 {
        arena.push_fmt(format_args!("t{i}")).unwrap();
    }
    assert_contents(&arena, &[b"t0", b"t1", b"t2", b"t3"]);
}

#[test]
fn peek_pop_follow_stack_order() {
    let (mut arena, views) = filled(64, 4, &[b"bottom", b"middle", b"top"]);

    assert_eq!(arena.peek(), Some(views[2]));
    assert!(arena.pop());
    assert_eq!(arena.peek(), Some(views[1]));

    // Promotion changes what pop removes next.
    arena.move_to_top(views[0]).unwrap();
    assert!(arena.pop());
    assert!(!views[0].is_allocated(&arena));
    assert_contents(&arena, &[b"middle"]);
    assert!(arena.pop());
    assert!(!arena.pop());
}

#[test]
fn resize_is_promotion_plus_capacity_change() {
    let (mut arena, views) = filled(64, 4, &[b"aa", b"bb", b"cc"]);

    // Resizing an interior string moves it to the top first.
    views[0].resize(&mut arena, 10).unwrap();
    assert_eq!(views[0].index(&arena), Some(2));
    assert_eq!(views[0].capacity(&arena), 11);
    assert_eq!(views[0].as_bytes(&arena), Some(&b"aa"[..]));
    assert_contents(&arena, &[b"bb", b"cc", b"aa"]);
}
