//! In-place radix-2 decimation-in-time FFT with a one-sided magnitude
//! spectrum post-processor.
//!
//! The pipeline has three stages, all operating over caller-owned storage:
//! bit-reversal permutation ([`bit_reverse`]), the staged butterfly network
//! ([`fft`]), and the reduction to magnitudes ([`magnitudes`]). Buffers use
//! the split layout: one slice of real components and one of imaginary
//! components, equal in length, with the length a power of two.
//!
//! ```
//! let mut reals = vec![1.0f32, 0.0, 0.0, 0.0];
//! let mut imags = vec![0.0f32; 4];
//! specfft::fft(&mut reals, &mut imags).unwrap();
//!
//! let mut mags = vec![0.0f32; 2];
//! specfft::magnitudes(&reals, &imags, &mut mags).unwrap();
//! ```
//!
//! Fixed-size callers can validate the size once up front with
//! [`Radix2Plan`]. Applications that recompute on demand from a polling
//! loop can use [`handoff::WorkSignal`] for the producer/consumer edge.

use core::fmt;

use num_traits::{Float, FloatConst};

use crate::bit_reverse::bit_reverse_permute;

pub mod bit_reverse;
pub mod handoff;
mod kernels;
mod plan;
mod spectrum;
mod twiddles;
#[cfg(feature = "complex-nums")]
pub mod utils;

pub use plan::Radix2Plan;
pub use spectrum::{bin_frequency, dominant_bin, magnitudes};

/// Precondition failures of the transform and magnitude steps.
///
/// All of these are local and recoverable: the buffers involved are left
/// untouched, so a caller can fix the sizes and retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The buffer length is zero or not a power of two.
    InvalidSize,
    /// Real and imaginary slices differ in length, or a slice does not
    /// match the size a [`Radix2Plan`] was built for.
    SizeMismatch,
    /// The magnitude output slice holds fewer than `N/2` values.
    BufferTooSmall,
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::InvalidSize => write!(f, "buffer length must be a power of two"),
            FftError::SizeMismatch => write!(f, "real and imaginary buffer lengths must match"),
            FftError::BufferTooSmall => write!(f, "magnitude output must hold at least N/2 values"),
        }
    }
}

impl std::error::Error for FftError {}

/// FFT -- radix-2 decimation in time, in place.
///
/// Expects time-domain input: real samples in `reals`, `imags` pre-zeroed
/// (or carrying a genuinely complex signal). Applies the bit-reversal
/// permutation to both slices, then runs the `log2(N)` butterfly stages, so
/// the frequency-domain output lands in natural order. Twiddle factors are
/// regenerated from scratch on every call; nothing is cached between
/// invocations.
///
/// # Errors
///
/// - [`FftError::SizeMismatch`] if the slices differ in length.
/// - [`FftError::InvalidSize`] if the length is zero or not a power of two.
///   The buffers are left byte-for-byte unchanged in both cases.
pub fn fft<T: Float + FloatConst>(reals: &mut [T], imags: &mut [T]) -> Result<(), FftError> {
    if reals.len() != imags.len() {
        return Err(FftError::SizeMismatch);
    }

    let n = reals.len();
    if n == 0 || !n.is_power_of_two() {
        return Err(FftError::InvalidSize);
    }

    let log2n = n.ilog2();
    bit_reverse_permute(reals, log2n);
    bit_reverse_permute(imags, log2n);
    kernels::fft_in_place(reals, imags, log2n);
    Ok(())
}

#[cfg(test)]
mod tests {
    use utilities::rustfft::num_complex::{Complex32, Complex64};
    use utilities::rustfft::FftPlanner;
    use utilities::{assert_float_closeness, gen_random_signal};

    use super::*;

    #[test]
    fn matches_rustfft_f64() {
        for k in 2..13 {
            let n = 1 << k;

            let mut reals = vec![0.0f64; n];
            let mut imags = vec![0.0f64; n];
            gen_random_signal(&mut reals, &mut imags);

            let mut buffer: Vec<Complex64> = reals
                .iter()
                .zip(imags.iter())
                .map(|(&z_re, &z_im)| Complex64::new(z_re, z_im))
                .collect();

            fft(&mut reals, &mut imags).unwrap();

            let mut planner = FftPlanner::new();
            let plan = planner.plan_fft_forward(buffer.len());
            plan.process(&mut buffer);

            reals
                .iter()
                .zip(imags.iter())
                .enumerate()
                .for_each(|(i, (z_re, z_im))| {
                    assert_float_closeness(*z_re, buffer[i].re, 1e-6);
                    assert_float_closeness(*z_im, buffer[i].im, 1e-6);
                });
        }
    }

    #[test]
    fn matches_rustfft_f32() {
        for k in 2..13 {
            let n = 1 << k;

            let mut reals = vec![0.0f32; n];
            let mut imags = vec![0.0f32; n];
            gen_random_signal(&mut reals, &mut imags);

            let mut buffer: Vec<Complex32> = reals
                .iter()
                .zip(imags.iter())
                .map(|(&z_re, &z_im)| Complex32::new(z_re, z_im))
                .collect();

            fft(&mut reals, &mut imags).unwrap();

            let mut planner = FftPlanner::new();
            let plan = planner.plan_fft_forward(buffer.len());
            plan.process(&mut buffer);

            reals
                .iter()
                .zip(imags.iter())
                .enumerate()
                .for_each(|(i, (z_re, z_im))| {
                    assert_float_closeness(*z_re, buffer[i].re, 1e-1);
                    assert_float_closeness(*z_im, buffer[i].im, 1e-1);
                });
        }
    }

    #[test]
    fn impulse_has_a_flat_spectrum() {
        let n = 8;
        let mut reals = vec![0.0f32; n];
        let mut imags = vec![0.0f32; n];
        reals[0] = 1.0;

        fft(&mut reals, &mut imags).unwrap();

        for (z_re, z_im) in reals.iter().zip(imags.iter()) {
            let mag = (z_re * z_re + z_im * z_im).sqrt();
            assert_float_closeness(mag, 1.0, 1e-6);
        }
    }

    #[test]
    fn transform_is_linear() {
        let n = 512;
        let mut a_re = vec![0.0f64; n];
        let mut a_im = vec![0.0f64; n];
        let mut b_re = vec![0.0f64; n];
        let mut b_im = vec![0.0f64; n];
        gen_random_signal(&mut a_re, &mut a_im);
        gen_random_signal(&mut b_re, &mut b_im);

        let mut sum_re: Vec<f64> = a_re.iter().zip(b_re.iter()).map(|(x, y)| x + y).collect();
        let mut sum_im: Vec<f64> = a_im.iter().zip(b_im.iter()).map(|(x, y)| x + y).collect();

        fft(&mut a_re, &mut a_im).unwrap();
        fft(&mut b_re, &mut b_im).unwrap();
        fft(&mut sum_re, &mut sum_im).unwrap();

        for i in 0..n {
            assert_float_closeness(sum_re[i], a_re[i] + b_re[i], 1e-9);
            assert_float_closeness(sum_im[i], a_im[i] + b_im[i], 1e-9);
        }
    }

    #[test]
    fn single_point_transform_is_identity() {
        let mut reals = vec![2.5f32];
        let mut imags = vec![-1.5f32];

        fft(&mut reals, &mut imags).unwrap();

        assert_eq!(reals, vec![2.5]);
        assert_eq!(imags, vec![-1.5]);
    }

    #[test]
    fn invalid_sizes_leave_the_buffer_byte_for_byte_unchanged() {
        for n in [0usize, 100] {
            let mut reals: Vec<f32> = (0..n).map(|i| i as f32 * 0.37).collect();
            let mut imags: Vec<f32> = (0..n).map(|i| i as f32 * -1.11).collect();
            let reals_bits: Vec<u32> = reals.iter().map(|x| x.to_bits()).collect();
            let imags_bits: Vec<u32> = imags.iter().map(|x| x.to_bits()).collect();

            assert_eq!(fft(&mut reals, &mut imags), Err(FftError::InvalidSize));

            let reals_after: Vec<u32> = reals.iter().map(|x| x.to_bits()).collect();
            let imags_after: Vec<u32> = imags.iter().map(|x| x.to_bits()).collect();
            assert_eq!(reals_bits, reals_after);
            assert_eq!(imags_bits, imags_after);
        }
    }

    #[test]
    fn mismatched_slice_lengths_are_rejected() {
        let mut reals = vec![0.0f32; 8];
        let mut imags = vec![0.0f32; 4];
        assert_eq!(fft(&mut reals, &mut imags), Err(FftError::SizeMismatch));
    }
}
