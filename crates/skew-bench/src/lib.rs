//! Benchmark workloads for Skew heaps and the slab arena.
//!
//! Every workload is a pure function of its seed, so runs compare like
//! with like:
//!
//! - [`random_keys`]: uniformly distributed keys
//! - [`ascending_keys`]: sorted keys, the degenerate-shape workload
//! - [`mixed_ops`]: interleaved push/pop script with a push bias

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Default seed used by the benches.
pub const BENCH_SEED: u64 = 0x5eed_cafe;

/// One step of a [`mixed_ops`] script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeapOp {
    /// Insert the key.
    Push(u64),
    /// Remove the preferred key (no-op on an empty heap).
    Pop,
}

/// `n` keys drawn from a ChaCha8 stream seeded with `seed`.
pub fn random_keys(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.next_u64()).collect()
}

/// `0..n` in ascending order.
pub fn ascending_keys(n: usize) -> Vec<u64> {
    (0..n as u64).collect()
}

/// `n` operations, roughly two pushes for every pop.
pub fn mixed_ops(n: usize, seed: u64) -> Vec<HeapOp> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let draw = rng.next_u64();
            if draw % 3 == 0 {
                HeapOp::Pop
            } else {
                HeapOp::Push(draw >> 2)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_keys_deterministic() {
        assert_eq!(random_keys(64, 7), random_keys(64, 7));
        assert_ne!(random_keys(64, 7), random_keys(64, 8));
    }

    #[test]
    fn ascending_keys_sorted() {
        let keys = ascending_keys(100);
        assert_eq!(keys.len(), 100);
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn mixed_ops_contains_both_kinds() {
        let ops = mixed_ops(1000, BENCH_SEED);
        assert_eq!(ops, mixed_ops(1000, BENCH_SEED));
        let pops = ops.iter().filter(|op| **op == HeapOp::Pop).count();
        assert!(pops > 0 && pops < ops.len() / 2, "pops = {pops}");
    }
}
