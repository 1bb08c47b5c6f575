//! Size-validated transform plans.
//!
//! A [`Radix2Plan`] checks the power-of-two requirement once at
//! construction, so a fixed-size caller (the common case: one buffer size
//! for the lifetime of the application) pays for validation a single time
//! and gets a `SizeMismatch` instead of a per-call size guess when handed
//! the wrong buffer.

use core::marker::PhantomData;

use num_traits::{Float, FloatConst};

use crate::bit_reverse::bit_reverse_permute;
use crate::kernels::fft_in_place;
use crate::{spectrum, FftError};

/// A radix-2 transform of a fixed, pre-validated size.
///
/// The plan stores only the size and its log2; twiddle factors are
/// regenerated on every call, so plans carry no state between invocations
/// and are freely shareable across threads operating on separate buffers.
#[derive(Debug, Clone, Copy)]
pub struct Radix2Plan<T> {
    n: usize,
    log2n: u32,
    precision: PhantomData<T>,
}

impl<T: Float + FloatConst> Radix2Plan<T> {
    /// Creates a plan for `n`-point transforms.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::InvalidSize`] if `n` is zero or not a power of
    /// two.
    pub fn new(n: usize) -> Result<Self, FftError> {
        if n == 0 || !n.is_power_of_two() {
            return Err(FftError::InvalidSize);
        }

        Ok(Self {
            n,
            log2n: n.ilog2(),
            precision: PhantomData,
        })
    }

    /// The transform size this plan was built for.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Runs the in-place transform over `reals`/`imags`.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::SizeMismatch`] if either slice is not exactly
    /// the planned size; the buffers are left untouched.
    pub fn process(&self, reals: &mut [T], imags: &mut [T]) -> Result<(), FftError> {
        if reals.len() != self.n || imags.len() != self.n {
            return Err(FftError::SizeMismatch);
        }

        bit_reverse_permute(reals, self.log2n);
        bit_reverse_permute(imags, self.log2n);
        fft_in_place(reals, imags, self.log2n);
        Ok(())
    }

    /// Reduces a transformed buffer of the planned size to magnitudes.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::SizeMismatch`] if the input slices are not the
    /// planned size, or [`FftError::BufferTooSmall`] if `out` holds fewer
    /// than `N/2` values.
    pub fn magnitudes(&self, reals: &[T], imags: &[T], out: &mut [T]) -> Result<(), FftError> {
        if reals.len() != self.n || imags.len() != self.n {
            return Err(FftError::SizeMismatch);
        }

        spectrum::magnitudes(reals, imags, out)
    }
}
