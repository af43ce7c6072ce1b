//! Comparison and copy strategies shared by every sort algorithm.
//!
//! Three implementation approaches are compared:
//! 1. Scalar - direct comparisons, the baseline
//! 2. Branchless - library min/max primitives with select-style index tracking
//! 3. Vector - 4-wide lanes (NEON / SSE / std::simd)
//!
//! The algorithms in [`crate::sort`] are written once against [`Kernel`];
//! each kernel only decides how the hot inner steps are carried out.

pub mod branchless;
pub mod lane;
pub mod scalar;
pub mod vector;

pub use branchless::Branchless;
pub use lane::{ArrayLane, Lane, NativeLane, LANES};
pub use scalar::Scalar;
pub use vector::Vector;

use serde::Serialize;
use std::fmt;

pub trait Kernel {
    const KIND: KernelKind;

    /// Picks the next merge output from two run heads.
    ///
    /// Returns the emitted value and whether it came from the left run. Ties
    /// always take the left head.
    fn merge_step(left: f32, right: f32) -> (f32, bool);

    /// Copies a run of values. `src` and `dst` have equal length.
    fn copy_run(src: &[f32], dst: &mut [f32]);

    /// Index of the first minimum of a non-empty slice.
    fn min_index(data: &[f32]) -> usize;

    /// One adjacent compare-and-swap pass over `data`; returns whether
    /// anything was swapped.
    fn bubble_pass(data: &mut [f32]) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KernelKind {
    Scalar,
    Branchless,
    Vector,
}

impl KernelKind {
    pub const ALL: [KernelKind; 3] = [KernelKind::Scalar, KernelKind::Branchless, KernelKind::Vector];

    pub fn label(self) -> &'static str {
        match self {
            KernelKind::Scalar => "scalar",
            KernelKind::Branchless => "branchless",
            KernelKind::Vector => "vector",
        }
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_min_index<K: Kernel>() {
        let cases: &[(&[f32], usize)] = &[
            (&[1.0], 0),
            (&[2.0, 1.0], 1),
            (&[3.0, 1.0, 2.0, 1.0], 1),
            (&[5.0, 4.0, 3.0, 2.0, 1.0, 0.5, 7.0, 8.0, 9.0], 5),
            (&[1.0, 1.0, 1.0, 1.0, 1.0, 1.0], 0),
            (&[9.0, 8.0, 8.0, 8.0, 8.0, 2.0, 3.0, 2.0, 4.0, 2.0], 5),
            (&[0.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0], 0),
        ];
        for &(data, expected) in cases {
            assert_eq!(K::min_index(data), expected, "{} on {:?}", K::KIND, data);
        }
    }

    fn check_merge_step<K: Kernel>() {
        assert_eq!(K::merge_step(1.0, 2.0), (1.0, true));
        assert_eq!(K::merge_step(2.0, 1.0), (1.0, false));
        assert_eq!(K::merge_step(3.0, 3.0), (3.0, true));
    }

    fn check_copy_run<K: Kernel>() {
        for len in 0..13 {
            let src: Vec<f32> = (0..len).map(|i| i as f32 * 1.5).collect();
            let mut dst = vec![-1.0; len];
            K::copy_run(&src, &mut dst);
            assert_eq!(dst, src, "{} copy of {} values", K::KIND, len);
        }
    }

    fn check_bubble_pass<K: Kernel>() {
        let mut data = [3.0, 1.0, 2.0, 0.0, 5.0, 4.0, 6.0, 7.0];
        assert!(K::bubble_pass(&mut data));
        assert_eq!(data, [1.0, 2.0, 0.0, 3.0, 4.0, 5.0, 6.0, 7.0]);

        let mut sorted = [1.0, 2.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        assert!(!K::bubble_pass(&mut sorted));

        let mut empty: [f32; 0] = [];
        assert!(!K::bubble_pass(&mut empty));
    }

    fn check_kernel<K: Kernel>() {
        check_min_index::<K>();
        check_merge_step::<K>();
        check_copy_run::<K>();
        check_bubble_pass::<K>();
    }

    #[test]
    fn scalar_kernel() {
        check_kernel::<Scalar>();
    }

    #[test]
    fn branchless_kernel() {
        check_kernel::<Branchless>();
    }

    #[test]
    fn vector_kernel() {
        check_kernel::<Vector>();
        check_kernel::<Vector<ArrayLane>>();
    }

    #[test]
    fn labels() {
        let labels: Vec<_> = KernelKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(labels, ["scalar", "branchless", "vector"]);
    }
}
