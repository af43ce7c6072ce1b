//! 4-wide f32 lanes.
//!
//! Every backend exposes the same four operations, so the vector kernel is
//! written once and instantiated per backend:
//!
//! ```text
//! load      [a0,a1,a2,a3] <- &src[..4]
//! store     [a0,a1,a2,a3] -> &mut dst[..4]
//! reduce    min(min(a0,a1), min(a2,a3))   (pairwise, same for max)
//! ```
//!
//! Inputs are assumed finite: the backends disagree on NaN propagation, and
//! the sort kernels only use reductions for comparisons.

/// Number of f32 values in one lane.
pub const LANES: usize = 4;

pub trait Lane: Copy {
    const NAME: &'static str;

    /// Loads the first `LANES` values of `src`.
    ///
    /// Panics if `src` is shorter than `LANES`.
    fn load(src: &[f32]) -> Self;

    /// Stores into the first `LANES` values of `dst`.
    ///
    /// Panics if `dst` is shorter than `LANES`.
    fn store(self, dst: &mut [f32]);

    fn reduce_min(self) -> f32;

    fn reduce_max(self) -> f32;
}

// ============================================================================
// Portable array backend
// ============================================================================

/// Plain `[f32; 4]` lane, available on every target.
///
/// The compiler is free to auto-vectorize it; it doubles as the reference
/// the intrinsic backends are tested against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrayLane([f32; LANES]);

impl Lane for ArrayLane {
    const NAME: &'static str = "array";

    #[inline]
    fn load(src: &[f32]) -> Self {
        let mut v = [0.0; LANES];
        v.copy_from_slice(&src[..LANES]);
        ArrayLane(v)
    }

    #[inline]
    fn store(self, dst: &mut [f32]) {
        dst[..LANES].copy_from_slice(&self.0);
    }

    #[inline]
    fn reduce_min(self) -> f32 {
        let [a, b, c, d] = self.0;
        f32::min(f32::min(a, b), f32::min(c, d))
    }

    #[inline]
    fn reduce_max(self) -> f32 {
        let [a, b, c, d] = self.0;
        f32::max(f32::max(a, b), f32::max(c, d))
    }
}

// ============================================================================
// ARM NEON backend
// ============================================================================

#[cfg(target_arch = "aarch64")]
pub use neon::NeonLane;

#[cfg(target_arch = "aarch64")]
mod neon {
    use super::{Lane, LANES};
    use std::arch::aarch64::*;

    /// NEON lane (`float32x4_t`)
    ///
    /// ## Instructions Used
    ///
    /// | Instruction | Function |
    /// |-------------|----------|
    /// | vld1q_f32 | Load 4 f32 |
    /// | vst1q_f32 | Store 4 f32 |
    /// | vget_low_f32 / vget_high_f32 | Split into two 64-bit halves |
    /// | vpmin_f32 / vpmax_f32 | Pairwise min/max of adjacent elements |
    /// | vget_lane_f32 | Extract one element |
    ///
    /// Horizontal reduction in two pairwise steps:
    /// ```text
    /// vpmin([a0,a1], [a2,a3]) = [min(a0,a1), min(a2,a3)]
    /// vpmin(m, m)             = [min(all), min(all)]
    /// ```
    #[derive(Clone, Copy, Debug)]
    pub struct NeonLane(float32x4_t);

    impl Lane for NeonLane {
        const NAME: &'static str = "neon";

        #[inline]
        fn load(src: &[f32]) -> Self {
            let src = &src[..LANES];
            // SAFETY: `src` holds exactly LANES readable f32 values.
            unsafe { NeonLane(vld1q_f32(src.as_ptr())) }
        }

        #[inline]
        fn store(self, dst: &mut [f32]) {
            let dst = &mut dst[..LANES];
            // SAFETY: `dst` holds exactly LANES writable f32 values.
            unsafe { vst1q_f32(dst.as_mut_ptr(), self.0) }
        }

        #[inline]
        #[allow(unused_unsafe)]
        fn reduce_min(self) -> f32 {
            unsafe {
                let pair = vpmin_f32(vget_low_f32(self.0), vget_high_f32(self.0));
                let pair = vpmin_f32(pair, pair);
                vget_lane_f32::<0>(pair)
            }
        }

        #[inline]
        #[allow(unused_unsafe)]
        fn reduce_max(self) -> f32 {
            unsafe {
                let pair = vpmax_f32(vget_low_f32(self.0), vget_high_f32(self.0));
                let pair = vpmax_f32(pair, pair);
                vget_lane_f32::<0>(pair)
            }
        }
    }
}

// ============================================================================
// x86_64 SSE backend
// ============================================================================

#[cfg(target_arch = "x86_64")]
pub use sse::SseLane;

#[cfg(target_arch = "x86_64")]
mod sse {
    use super::{Lane, LANES};
    use std::arch::x86_64::*;

    /// SSE lane (`__m128`). SSE is part of the x86_64 baseline, so no runtime
    /// detection is needed.
    ///
    /// Horizontal reduction:
    /// ```text
    /// movehl(v, v)         = [a2, a3, a2, a3]
    /// min_ps(v, ^)         = [min(a0,a2), min(a1,a3), ..]
    /// shuffle<0b01>(m, m)  = [m1, m0, m0, m0]
    /// min_ss(m, ^)         = [min(m0,m1), ..]
    /// ```
    #[derive(Clone, Copy, Debug)]
    pub struct SseLane(__m128);

    impl Lane for SseLane {
        const NAME: &'static str = "sse";

        #[inline]
        fn load(src: &[f32]) -> Self {
            let src = &src[..LANES];
            // SAFETY: `src` holds exactly LANES readable f32 values; loadu has
            // no alignment requirement.
            unsafe { SseLane(_mm_loadu_ps(src.as_ptr())) }
        }

        #[inline]
        fn store(self, dst: &mut [f32]) {
            let dst = &mut dst[..LANES];
            // SAFETY: `dst` holds exactly LANES writable f32 values.
            unsafe { _mm_storeu_ps(dst.as_mut_ptr(), self.0) }
        }

        #[inline]
        #[allow(unused_unsafe)]
        fn reduce_min(self) -> f32 {
            unsafe {
                let v = self.0;
                let m = _mm_min_ps(v, _mm_movehl_ps(v, v));
                let m = _mm_min_ss(m, _mm_shuffle_ps::<0b01>(m, m));
                _mm_cvtss_f32(m)
            }
        }

        #[inline]
        #[allow(unused_unsafe)]
        fn reduce_max(self) -> f32 {
            unsafe {
                let v = self.0;
                let m = _mm_max_ps(v, _mm_movehl_ps(v, v));
                let m = _mm_max_ss(m, _mm_shuffle_ps::<0b01>(m, m));
                _mm_cvtss_f32(m)
            }
        }
    }
}

// ============================================================================
// std::simd backend (nightly)
// ============================================================================

#[cfg(feature = "nightly")]
pub use portable_simd::SimdLane;

#[cfg(feature = "nightly")]
mod portable_simd {
    use super::{Lane, LANES};
    use std::simd::num::SimdFloat;
    use std::simd::f32x4;

    /// Cross-platform `std::simd` lane.
    ///
    /// - `from_slice(s)`: load the first 4 values of a slice
    /// - `copy_to_slice(s)`: write the vector back
    /// - `reduce_min()` / `reduce_max()`: horizontal reduction
    #[derive(Clone, Copy, Debug)]
    pub struct SimdLane(f32x4);

    impl Lane for SimdLane {
        const NAME: &'static str = "std::simd";

        #[inline]
        fn load(src: &[f32]) -> Self {
            SimdLane(f32x4::from_slice(&src[..LANES]))
        }

        #[inline]
        fn store(self, dst: &mut [f32]) {
            self.0.copy_to_slice(&mut dst[..LANES]);
        }

        #[inline]
        fn reduce_min(self) -> f32 {
            self.0.reduce_min()
        }

        #[inline]
        fn reduce_max(self) -> f32 {
            self.0.reduce_max()
        }
    }
}

/// The fastest lane backend for the compilation target.
#[cfg(target_arch = "aarch64")]
pub type NativeLane = NeonLane;

#[cfg(target_arch = "x86_64")]
pub type NativeLane = SseLane;

#[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64")))]
pub type NativeLane = ArrayLane;
