use super::{Kernel, KernelKind};

/// Baseline kernel: one comparison per step, element-by-element copies.
pub struct Scalar;

impl Kernel for Scalar {
    const KIND: KernelKind = KernelKind::Scalar;

    #[inline]
    fn merge_step(left: f32, right: f32) -> (f32, bool) {
        if left <= right {
            (left, true)
        } else {
            (right, false)
        }
    }

    #[inline]
    fn copy_run(src: &[f32], dst: &mut [f32]) {
        dst.copy_from_slice(src);
    }

    fn min_index(data: &[f32]) -> usize {
        let mut min_idx = 0;
        let mut min_val = data[0];
        for (j, &x) in data.iter().enumerate().skip(1) {
            if x < min_val {
                min_val = x;
                min_idx = j;
            }
        }
        min_idx
    }

    fn bubble_pass(data: &mut [f32]) -> bool {
        let mut swapped = false;
        for j in 0..data.len().saturating_sub(1) {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        swapped
    }
}
