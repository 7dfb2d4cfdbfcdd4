//! Seeded randomness helpers.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Random generator used by the optimizer.
pub type TspRng = ChaCha8Rng;

/// Creates a reproducible generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> TspRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Picks a closed range `[start, end]` inside `0..n`.
///
/// Both endpoints are drawn independently and swapped into order, so each
/// endpoint is uniform on its own; the pair is not uniform over unordered
/// ranges. Returns `None` when `n == 0`.
pub fn random_segment<R: Rng>(n: usize, rng: &mut R) -> Option<(usize, usize)> {
    if n == 0 {
        return None;
    }
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    Some(if a <= b { (a, b) } else { (b, a) })
}
