//! Test utilities for skein development.
//!
//! Fixtures for building pre-filled arenas and assertion helpers that
//! check the arena's structural invariants through its public API.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::{arena, assert_consistent, assert_contents, filled};
