//! Merge, selection and bubble sort, each written once against [`Kernel`].
//!
//! All routines sort in place into non-descending order. Inputs are expected
//! to be finite; NaN ordering is not defined.

use crate::kernel::{Branchless, Kernel, KernelKind, Scalar, Vector};
use serde::Serialize;
use std::fmt;

// ============================================================================
// Merge sort
// ============================================================================
//
// Top-down split over inclusive ranges with one scratch buffer per call:
//
// ```text
// [left ..= mid] [mid+1 ..= right]  --merge-->  scratch[0..len]  --copy back-->
// ```

/// O(n log n) merge sort with an O(n) scratch buffer.
pub fn merge_sort<K: Kernel>(data: &mut [f32]) {
    let n = data.len();
    if n < 2 {
        return;
    }
    let mut scratch = vec![0.0f32; n];
    merge_sort_range::<K>(data, &mut scratch, 0, n - 1);
}

fn merge_sort_range<K: Kernel>(data: &mut [f32], scratch: &mut [f32], left: usize, right: usize) {
    if left < right {
        let mid = left + (right - left) / 2;
        merge_sort_range::<K>(data, scratch, left, mid);
        merge_sort_range::<K>(data, scratch, mid + 1, right);
        merge::<K>(data, scratch, left, mid, right);
    }
}

fn merge<K: Kernel>(data: &mut [f32], scratch: &mut [f32], left: usize, mid: usize, right: usize) {
    let mut i = left;
    let mut j = mid + 1;
    let mut k = 0;

    while i <= mid && j <= right {
        let (value, took_left) = K::merge_step(data[i], data[j]);
        scratch[k] = value;
        k += 1;
        if took_left {
            i += 1;
        } else {
            j += 1;
        }
    }

    // At most one side still has values
    let left_rest = &data[i..=mid];
    K::copy_run(left_rest, &mut scratch[k..k + left_rest.len()]);
    k += left_rest.len();

    let right_rest = &data[j..=right];
    K::copy_run(right_rest, &mut scratch[k..k + right_rest.len()]);
    k += right_rest.len();

    K::copy_run(&scratch[..k], &mut data[left..=right]);
}

// ============================================================================
// Selection sort
// ============================================================================

/// O(n²) selection sort: swap the first minimum of each suffix into place.
pub fn selection_sort<K: Kernel>(data: &mut [f32]) {
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        let min_idx = i + K::min_index(&data[i..]);
        if min_idx != i {
            data.swap(i, min_idx);
        }
    }
}

// ============================================================================
// Bubble sort
// ============================================================================

/// O(n²) bubble sort with early exit.
///
/// Returns the number of passes executed: 0 for fewer than two values, 1 for
/// input that is already sorted.
pub fn bubble_sort<K: Kernel>(data: &mut [f32]) -> usize {
    let n = data.len();
    let mut passes = 0;
    for i in 0..n.saturating_sub(1) {
        passes += 1;
        if !K::bubble_pass(&mut data[..n - i]) {
            break;
        }
    }
    passes
}

// ============================================================================
// Runtime dispatch
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Merge,
    Selection,
    Bubble,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Merge, Algorithm::Selection, Algorithm::Bubble];

    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Merge => "Merge sort",
            Algorithm::Selection => "Selection sort",
            Algorithm::Bubble => "Bubble sort",
        }
    }

    /// Sorts `data` with this algorithm using the statically chosen kernel.
    pub fn sort_with<K: Kernel>(self, data: &mut [f32]) {
        match self {
            Algorithm::Merge => merge_sort::<K>(data),
            Algorithm::Selection => selection_sort::<K>(data),
            Algorithm::Bubble => {
                bubble_sort::<K>(data);
            }
        }
    }

    /// Sorts `data` with this algorithm and the kernel picked at runtime.
    pub fn sort(self, kernel: KernelKind, data: &mut [f32]) {
        match kernel {
            KernelKind::Scalar => self.sort_with::<Scalar>(data),
            KernelKind::Branchless => self.sort_with::<Branchless>(data),
            KernelKind::Vector => self.sort_with::<Vector>(data),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Merge => "merge",
            Algorithm::Selection => "selection",
            Algorithm::Bubble => "bubble",
        })
    }
}
