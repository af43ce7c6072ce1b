use super::lane::{Lane, NativeLane, LANES};
use super::{Kernel, KernelKind, Scalar};
use std::marker::PhantomData;

/// Lane-accelerated kernel, generic over the lane backend.
///
/// ## Where lanes are used
///
/// - merge: leftover-run copy and copy-back move 4 values per load/store
///   (the head comparison stays scalar)
/// - selection: each 4-value block is reduced to its minimum; only a block
///   that beats the running minimum is rescanned for the exact index
/// - bubble: a block whose left window max does not exceed the right window
///   min is already ordered and is skipped
///
/// Tails shorter than a lane always fall back to scalar code.
pub struct Vector<L: Lane = NativeLane>(PhantomData<L>);

impl<L: Lane> Kernel for Vector<L> {
    const KIND: KernelKind = KernelKind::Vector;

    #[inline]
    fn merge_step(left: f32, right: f32) -> (f32, bool) {
        Scalar::merge_step(left, right)
    }

    fn copy_run(src: &[f32], dst: &mut [f32]) {
        let mut src_chunks = src.chunks_exact(LANES);
        let mut dst_chunks = dst.chunks_exact_mut(LANES);

        for (s, d) in (&mut src_chunks).zip(&mut dst_chunks) {
            L::load(s).store(d);
        }

        // Handle remainder
        for (s, d) in src_chunks
            .remainder()
            .iter()
            .zip(dst_chunks.into_remainder())
        {
            *d = *s;
        }
    }

    fn min_index(data: &[f32]) -> usize {
        let mut min_idx = 0;
        let mut min_val = data[0];

        let rest = &data[1..];
        let chunks = rest.chunks_exact(LANES);
        let remainder_start = 1 + rest.len() - chunks.remainder().len();

        for (block, chunk) in chunks.enumerate() {
            let block_min = L::load(chunk).reduce_min();
            if block_min < min_val {
                // The block holds a new minimum: find where
                let base = 1 + block * LANES;
                for (k, &x) in chunk.iter().enumerate() {
                    if x < min_val {
                        min_val = x;
                        min_idx = base + k;
                    }
                }
            }
        }

        for (k, &x) in data[remainder_start..].iter().enumerate() {
            if x < min_val {
                min_val = x;
                min_idx = remainder_start + k;
            }
        }

        min_idx
    }

    fn bubble_pass(data: &mut [f32]) -> bool {
        let len = data.len();
        let mut swapped = false;
        let mut j = 0;

        // Windows [j, j+4) and [j+1, j+5) must both fit
        while j + LANES < len {
            let left_max = L::load(&data[j..]).reduce_max();
            let right_min = L::load(&data[j + 1..]).reduce_min();

            // max(left) <= min(right) implies every pair in the block is
            // already ordered
            if left_max > right_min {
                for k in j..j + LANES {
                    if data[k] > data[k + 1] {
                        data.swap(k, k + 1);
                        swapped = true;
                    }
                }
            }
            j += LANES;
        }

        while j + 1 < len {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
            }
            j += 1;
        }

        swapped
    }
}
