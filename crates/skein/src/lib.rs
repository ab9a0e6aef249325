//! Skein: a fixed-capacity string arena for allocation-averse environments.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the skein sub-crates. For most users, adding `skein` as a single
//! dependency is sufficient.
//!
//! A [`prelude::StackArena`] packs a bounded number of variable-length
//! strings into one pre-sized byte block; a [`prelude::ArenaStr`] is a
//! small copyable view through which all string operations run. Strings
//! grow, shrink, and reorder without any allocation after construction —
//! the arena relocates regions by in-place byte shuffling and keeps views
//! valid through a handle indirection table.
//!
//! # Quick start
//!
//! ```rust
//! use skein::prelude::*;
//!
//! let mut arena = StackArena::new(ArenaConfig::with_slots(64, 4));
//!
//! let greeting = arena.push(b"hello").unwrap();
//! greeting.append(&mut arena, b", world").unwrap();
//! assert_eq!(greeting.as_str(&arena), Some("hello, world"));
//!
//! // Views are independent copies of content, not aliases.
//! let shout = greeting.duplicate(&mut arena).unwrap();
//! shout.to_upper(&mut arena).unwrap();
//! assert_eq!(shout.as_str(&arena), Some("HELLO, WORLD"));
//! assert_eq!(greeting.as_str(&arena), Some("hello, world"));
//!
//! // Removing one string compacts the arena; other views stay valid.
//! arena.remove(greeting).unwrap();
//! assert_eq!(shout.as_str(&arena), Some("HELLO, WORLD"));
//! assert_eq!(
//!     arena.capacity(),
//!     arena.allocated_bytes() + arena.unallocated_bytes(),
//! );
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `skein-arena` | `StackArena`, `ArenaStr`, `ArenaConfig` |
//! | [`types`] | `skein-core` | handles, IDs, errors, store traits |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The arena, its configuration, and string views (`skein-arena`).
pub use skein_arena as arena;

/// Core types and traits (`skein-core`).
///
/// Contains [`types::Handle`], [`types::ArenaId`], [`types::ArenaError`],
/// and the [`types::RegionRead`]/[`types::StackStore`] capability traits.
pub use skein_core as types;

/// Common imports for typical skein usage.
///
/// ```rust
/// use skein::prelude::*;
/// ```
pub mod prelude {
    // Arena and views
    pub use skein_arena::{ArenaConfig, ArenaStr, StackArena};

    // Core types, errors, and the store traits
    pub use skein_core::{ArenaError, ArenaId, Handle, RegionRead, StackStore};
}
