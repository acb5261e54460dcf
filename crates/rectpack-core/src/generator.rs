use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::PackRect;

/// Generates `count` unplaced rectangles with ids `1..=count`.
///
/// Width and height are drawn independently and uniformly from `min_side..max_side`.
/// The range must be non-empty and `count` must fit a `u32` id; `RunConfig::validate` checks both
/// before a run. A larger `count` is capped at `u32::MAX`.
pub fn generate_rects<R: Rng + ?Sized>(
    count: usize,
    min_side: u32,
    max_side: u32,
    rng: &mut R,
) -> Vec<PackRect> {
    let count = u32::try_from(count).unwrap_or(u32::MAX);
    (1..=count)
        .map(|id| {
            let w = rng.gen_range(min_side..max_side);
            let h = rng.gen_range(min_side..max_side);
            PackRect::new(id, w, h)
        })
        .collect()
}

/// Seed derived from the wall clock, for runs without an explicit seed.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() ^ (d.subsec_nanos() as u64).rotate_left(32))
        .unwrap_or(0)
}

/// RNG for a run, plus the seed it was built from.
pub fn seeded_rng(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(time_seed);
    (StdRng::seed_from_u64(seed), seed)
}
