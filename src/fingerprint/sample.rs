//! Coordinate sampling and generator seeding.

use rand::rngs::{OsRng, StdRng};
use rand::seq::index;
use rand::{Rng, SeedableRng, TryRngCore};

/// Returns a generator seeded from a 64-bit value read from the OS.
///
/// # Panics
///
/// Panics if the operating system randomness source fails. A predictable
/// seed would make every fingerprint identical.
pub fn os_seeded_rng() -> StdRng {
    let seed = match OsRng.try_next_u64() {
        Ok(seed) => seed,
        Err(err) => panic!("secure randomness unavailable, refusing to seed fingerprint: {err}"),
    };
    StdRng::seed_from_u64(seed)
}

/// Draws `count` coordinates independently; repeats are possible.
pub(crate) fn uniform_coords<G: Rng>(
    width: usize,
    height: usize,
    count: usize,
    rng: &mut G,
) -> Vec<(usize, usize)> {
    (0..count)
        .map(|_| {
            let x = rng.random_range(0..width);
            let y = rng.random_range(0..height);
            (x, y)
        })
        .collect()
}

/// Draws up to `count` pairwise distinct coordinates.
pub(crate) fn distinct_coords<G: Rng>(
    width: usize,
    height: usize,
    count: usize,
    rng: &mut G,
) -> Vec<(usize, usize)> {
    let total = width.saturating_mul(height);
    let amount = count.min(total);
    index::sample(rng, total, amount)
        .into_iter()
        .map(|idx| (idx % width, idx / width))
        .collect()
}
