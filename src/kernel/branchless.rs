use super::{Kernel, KernelKind};

/// Kernel built on the library min/max primitives (`f32::min`, `f32::max`).
///
/// The primitives only ever produce comparison values. Which element moves is
/// decided by an explicit comparison carried alongside, never by testing the
/// primitive's result for equality with an input, so signed zeros and ties
/// cannot redirect an index.
pub struct Branchless;

impl Kernel for Branchless {
    const KIND: KernelKind = KernelKind::Branchless;

    #[inline]
    fn merge_step(left: f32, right: f32) -> (f32, bool) {
        let took_left = left <= right;
        let min = f32::min(left, right);
        // Equal heads may differ in sign bit (0.0 / -0.0); the left one is
        // the element that moves.
        let value = [min, left][(left == right) as usize];
        (value, took_left)
    }

    #[inline]
    fn copy_run(src: &[f32], dst: &mut [f32]) {
        dst.copy_from_slice(src);
    }

    fn min_index(data: &[f32]) -> usize {
        let mut min_idx = 0;
        let mut min_val = data[0];
        for (j, &x) in data.iter().enumerate().skip(1) {
            let better = x < min_val;
            min_idx = if better { j } else { min_idx };
            min_val = f32::min(min_val, x);
        }
        min_idx
    }

    fn bubble_pass(data: &mut [f32]) -> bool {
        let mut swapped = false;
        for j in 0..data.len().saturating_sub(1) {
            let a = data[j];
            let b = data[j + 1];
            let lo = f32::min(a, b);
            let hi = f32::max(a, b);
            // Strictly out of order means lo == b and hi == a bit for bit.
            if b < a {
                data[j] = lo;
                data[j + 1] = hi;
                swapped = true;
            }
        }
        swapped
    }
}
