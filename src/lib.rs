//! # Sorting Kernels Benchmark
//!
//! Three textbook comparison sorts, each measured under three kernels:
//! 1. Scalar - Baseline implementation
//! 2. Branchless - Library min/max primitives (`f32::min` / `f32::max`)
//! 3. Vector - 4-wide lanes (ARM NEON, x86_64 SSE, or `std::simd` on nightly)
//!
//! | Algorithm | Time | Extra space | Where lanes help |
//! |-----------|------|-------------|------------------|
//! | merge     | O(n log n) | O(n) scratch | run copies and copy-back |
//! | selection | O(n²) | O(1) | block minimum skips whole lanes |
//! | bubble    | O(n²), O(n) if sorted | O(1) | ordered blocks are skipped |
//!
//! Kernels only change *how* a step is performed, never *which* element moves,
//! so every kernel produces bit-identical output for the same input.
//!
//! ```
//! use float_sort_bench::kernel::{KernelKind, Vector};
//! use float_sort_bench::sort::{merge_sort, Algorithm};
//!
//! let mut data = [5.0, 3.0, 4.0, 1.0, 2.0];
//! merge_sort::<Vector>(&mut data);
//! assert_eq!(data, [1.0, 2.0, 3.0, 4.0, 5.0]);
//!
//! let mut data = [2.0, 1.0];
//! Algorithm::Bubble.sort(KernelKind::Branchless, &mut data);
//! assert_eq!(data, [1.0, 2.0]);
//! ```

#![cfg_attr(feature = "nightly", feature(portable_simd))]

pub mod array;
pub mod bench;
pub mod error;
pub mod kernel;
pub mod sort;

pub use error::{Error, Result};
