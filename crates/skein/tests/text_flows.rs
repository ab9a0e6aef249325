//! Integration tests for text workflows layered over the arena: building
//! strings piecewise, normalising them, and carving out copies while the
//! arena compacts underneath.

use std::cmp::Ordering;

use skein::prelude::*;
use skein_test_utils::{assert_consistent, filled};

#[test]
fn build_a_line_from_fragments() {
    let mut arena = StackArena::new(ArenaConfig::with_slots(128, 4));
    let line = arena.push(b"GET").unwrap();
    line.append(&mut arena, b" /index.html").unwrap();
    line.append_fmt(&mut arena, format_args!(" HTTP/{}.{}", 1, 1))
        .unwrap();
    assert_eq!(line.as_str(&arena), Some("GET /index.html HTTP/1.1"));

    let path_start = line.find_byte(&arena, b' ', 0).unwrap() + 1;
    let path_end = line.find_byte(&arena, b' ', path_start).unwrap();
    let path = line
        .duplicate_range(&mut arena, path_start, path_end - path_start)
        .unwrap();
    assert_eq!(path.as_str(&arena), Some("/index.html"));
    assert_consistent(&arena);
}

#[test]
fn normalise_user_input() {
    let (mut arena, views) = filled(64, 2, &[b"  MIXED case Input \t"]);
    let s = views[0];
    s.trim(&mut arena).unwrap();
    s.to_lower(&mut arena).unwrap();
    assert_eq!(s.as_str(&arena), Some("mixed case input"));
    // Trimming and folding never change the region's footprint.
    assert_eq!(s.capacity(&arena), 21);
    assert_consistent(&arena);
}

#[test]
fn duplicates_survive_source_removal() {
    let (mut arena, views) = filled(64, 4, &[b"keeper", b"doomed"]);
    let copy = views[1].duplicate(&mut arena).unwrap();
    arena.remove(views[1]).unwrap();

    assert!(!views[1].is_allocated(&arena));
    assert_eq!(copy.as_bytes(&arena), Some(&b"doomed"[..]));
    assert_eq!(views[0].as_bytes(&arena), Some(&b"keeper"[..]));
    assert_consistent(&arena);
}

#[test]
fn sort_keys_via_compare() {
    let (arena, views) = filled(128, 8, &[b"pear", b"fig", b"apple", b"fig"]);

    let mut sorted = views.clone();
    sorted.sort_by(|a, b| a.compare(&arena, *b));
    let names: Vec<&str> = sorted.iter().map(|v| v.as_str(&arena).unwrap()).collect();
    // Shortlex: length first, ties bytewise.
    assert_eq!(names, vec!["fig", "fig", "pear", "apple"]);
    assert_eq!(views[1].compare(&arena, views[3]), Ordering::Equal);
}

#[test]
fn append_most_fills_the_arena_to_the_brim() {
    let mut arena = StackArena::new(ArenaConfig::with_slots(24, 2));
    let s = arena.push(b"log:").unwrap();
    let wrote = s.append_most(&mut arena, b"0123456789abcdefghijklmnop");
    assert_eq!(wrote, arena.capacity() - 5);
    assert_eq!(arena.unallocated_bytes(), 0);
    assert!(s.as_bytes(&arena).unwrap().starts_with(b"log:0123"));
    assert_consistent(&arena);
}

#[test]
fn searches_and_suffix_checks_after_relocation() {
    let (mut arena, views) = filled(128, 4, &[b"needle in haystack", b"other"]);
    let s = views[0];

    // Force a relocation by growing the interior string.
    s.append(&mut arena, b" and more").unwrap();
    assert_eq!(s.index(&arena), Some(1));

    assert_eq!(s.find(&arena, b"haystack", 0), Some(10));
    assert_eq!(s.rfind(&arena, b"and"), Some(19));
    assert!(s.starts_with(&arena, b"needle"));
    assert!(s.ends_with(&arena, b"more"));
    assert!(!s.ends_with(&arena, b"haystack"));
}

#[test]
fn formatted_push_composes_with_text_ops() {
    let mut arena = StackArena::new(ArenaConfig::with_slots(96, 4));
    for id in 0..3 {
        arena
            .push_fmt(format_args!("sensor-{id}: {:.1}", 20.0 + id as f64))
            .unwrap();
    }
    assert_eq!(arena.live(), 3);

    let first = arena.get(0).unwrap();
    assert_eq!(first.as_str(&arena), Some("sensor-0: 20.0"));
    let reading = first.duplicate_from(&mut arena, 10).unwrap();
    assert_eq!(reading.as_str(&arena), Some("20.0"));
    assert_consistent(&arena);
}
