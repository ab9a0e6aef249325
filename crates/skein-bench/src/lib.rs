//! Benchmark workloads for the skein string arena.
//!
//! Deterministic string workloads seeded through ChaCha8, so benchmark
//! runs are reproducible across machines and sessions.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Byte alphabet for generated strings. Printable, no terminator byte.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789 .,-";

/// Generate `count` deterministic strings of length `0..=max_len`.
pub fn workload(seed: u64, count: usize, max_len: usize) -> Vec<Vec<u8>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.next_u32() as usize % (max_len + 1);
            (0..len)
                .map(|_| ALPHABET[rng.next_u32() as usize % ALPHABET.len()])
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workload_is_deterministic() {
        assert_eq!(workload(42, 10, 16), workload(42, 10, 16));
    }

    #[test]
    fn workload_respects_max_len() {
        for s in workload(7, 100, 8) {
            assert!(s.len() <= 8);
            assert!(!s.contains(&0));
        }
    }
}
