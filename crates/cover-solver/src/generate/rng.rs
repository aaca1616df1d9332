//! Seeded ChaCha8 streams for instance generation.
//!
//! Stream 0 draws the subset count; subset `i` (1-based) draws from stream
//! `i`. Same seed -> same instance, always.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for a given seed and stream ID.
pub fn stream_rng(seed: u64, stream: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}
