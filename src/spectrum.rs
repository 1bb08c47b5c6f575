//! Reduction of a transformed buffer to a one-sided magnitude spectrum,
//! plus the peak-bin helpers commonly layered on top of it.

use num_traits::Float;

use crate::FftError;

// We don't multiversion for AVX-512 here and keep the dispatch table the
// same as the rest of the crate; the magnitude loop autovectorizes cleanly
// on every listed target.
#[multiversion::multiversion(
    targets(
    "x86_64+avx2+fma", // x86_64-v3
    "x86_64+sse4.2", // x86_64-v2
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    ))]
fn magnitude_kernel<T: Float>(reals: &[T], imags: &[T], out: &mut [T], n: T) {
    out.iter_mut()
        .zip(reals.iter())
        .zip(imags.iter())
        .for_each(|((mag, z_re), z_im)| {
            *mag = (*z_re * *z_re + *z_im * *z_im).sqrt() / n;
        });
}

/// Writes the magnitudes of bins `[0, N/2)` of a transformed buffer into
/// `out`, scaled by `1/N`.
///
/// Only the first half of the spectrum is produced; for real-valued input
/// the upper bins mirror the lower ones, and the Nyquist bin at `N/2` is
/// deliberately left out. Reads the input, writes only `out[..N/2]`, and
/// holds no state, so repeated calls over the same buffer yield identical
/// output.
///
/// # Errors
///
/// - [`FftError::SizeMismatch`] if `reals` and `imags` differ in length.
/// - [`FftError::InvalidSize`] if the buffer length is zero or not a power
///   of two.
/// - [`FftError::BufferTooSmall`] if `out` holds fewer than `N/2` values.
///   Nothing is written in any error case.
pub fn magnitudes<T: Float>(reals: &[T], imags: &[T], out: &mut [T]) -> Result<(), FftError> {
    if reals.len() != imags.len() {
        return Err(FftError::SizeMismatch);
    }

    let n = reals.len();
    if n == 0 || !n.is_power_of_two() {
        return Err(FftError::InvalidSize);
    }

    let half = n / 2;
    if out.len() < half {
        return Err(FftError::BufferTooSmall);
    }

    magnitude_kernel(
        &reals[..half],
        &imags[..half],
        &mut out[..half],
        T::from(n).unwrap(),
    );
    Ok(())
}

/// Index of the strongest magnitude bin, skipping the DC bin at index 0.
///
/// Returns `None` when the spectrum holds fewer than two bins. Ties go to
/// the lowest bin.
pub fn dominant_bin<T: Float>(mags: &[T]) -> Option<usize> {
    if mags.len() < 2 {
        return None;
    }

    let mut max_index = 1;
    let mut max_magnitude = mags[1];
    for (i, &mag) in mags.iter().enumerate().skip(2) {
        if mag > max_magnitude {
            max_magnitude = mag;
            max_index = i;
        }
    }

    Some(max_index)
}

/// Center frequency in Hz of `bin` for an `n`-point transform of a signal
/// sampled at `sample_rate` Hz.
pub fn bin_frequency<T: Float>(bin: usize, sample_rate: T, n: usize) -> T {
    T::from(bin).unwrap() * sample_rate / T::from(n).unwrap()
}
