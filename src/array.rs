//! Sample array helpers: generation, fallible allocation, copy and sortedness.

use crate::error::{Error, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Exclusive upper bound of generated sample values.
pub const SAMPLE_MAX: f32 = 10_000.0;

/// Allocates a zero-filled array of `len` samples without aborting on failure.
pub fn allocate(len: usize) -> Result<Vec<f32>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|source| Error::Allocation { len, source })?;
    data.resize(len, 0.0);
    Ok(data)
}

/// Generates `len` samples uniformly drawn from `[0, SAMPLE_MAX)`.
///
/// The same seed always yields the same array.
pub fn generate(len: usize, seed: u64) -> Result<Vec<f32>> {
    let mut data = allocate(len)?;
    fill_random(&mut data, seed);
    Ok(data)
}

pub fn fill_random(data: &mut [f32], seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for x in data.iter_mut() {
        *x = rng.gen_range(0.0..SAMPLE_MAX);
    }
}

/// Restores `dest` from `src`. Both must have the same length.
#[inline]
pub fn copy_into(dest: &mut [f32], src: &[f32]) {
    dest.copy_from_slice(src);
}

/// Check if array is sorted in non-descending order
pub fn is_sorted(data: &[f32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
