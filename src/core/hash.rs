//! Deterministic seeded hashing for all "random" choices in the pipeline.
//!
//! Nothing in the pipeline uses a pseudo-random generator. Every choice that
//! looks random (palette pick, noise sample, layer intensity) routes through
//! the functions here, keyed by the request seed plus a context string. The
//! exact bit mixing is load-bearing: a port of this pipeline to another
//! language must reproduce these functions bit-for-bit to produce identical
//! output, so the constants are written out rather than delegated to a
//! library hasher.

/// FNV-1a offset basis (64-bit).
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime (64-bit).
const FNV_PRIME: u64 = 0x00000100000001b3;

/// splitmix64 finalizer. Three xor-shift/multiply rounds with the published
/// constants; bijective over u64, so distinct inputs never collapse early.
pub fn mix64(mut x: u64) -> u64 {
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d049bb133111eb);
    x ^ (x >> 31)
}

/// Hash a seed string plus a context string into a u64.
///
/// FNV-1a over `seed`, a 0xFF separator byte (not valid UTF-8, so no
/// seed/context pair can alias another by shifting the boundary), FNV-1a over
/// `context`, then one splitmix64 round to spread low-entropy inputs.
pub fn hash_str(seed: &str, context: &str) -> u64 {
    let mut h = FNV_OFFSET;
    for b in seed.bytes() {
        h = (h ^ b as u64).wrapping_mul(FNV_PRIME);
    }
    h = (h ^ 0xFF).wrapping_mul(FNV_PRIME);
    for b in context.bytes() {
        h = (h ^ b as u64).wrapping_mul(FNV_PRIME);
    }
    mix64(h)
}

/// Deterministic index pick: `hash(seed ‖ context) mod n`.
///
/// `n` must be non-zero; registries that call this are never empty.
pub fn pick(seed: &str, context: &str, n: usize) -> usize {
    debug_assert!(n > 0);
    (hash_str(seed, context) % n as u64) as usize
}

/// Deterministic value in `[0, 1)` from the top 53 bits of the hash.
pub fn unit_f64(seed: &str, context: &str) -> f64 {
    (hash_str(seed, context) >> 11) as f64 / (1u64 << 53) as f64
}

/// Sample value noise at an integer lattice point for one layer.
///
/// The lattice coordinates and layer index are folded into the pre-mixed
/// state with distinct odd multipliers so that transposed coordinates do not
/// collide.
pub fn lattice_unit(base: u64, x: i64, y: i64, layer: u32) -> f64 {
    let mut h = base;
    h ^= (x as u64).wrapping_mul(0x9e3779b97f4a7c15);
    h ^= (y as u64).wrapping_mul(0xc2b2ae3d27d4eb4f);
    h ^= (layer as u64).wrapping_mul(0x165667b19e3779f9);
    (mix64(h) >> 11) as f64 / (1u64 << 53) as f64
}
