//! Conversions between interleaved complex buffers and the split re/im
//! layout the transform operates on. Available behind the `complex-nums`
//! feature.

use bytemuck::cast_slice;
use num_complex::Complex;
use num_traits::Float;

#[multiversion::multiversion(
    targets(
    "x86_64+avx2+fma", // x86_64-v3
    "x86_64+sse4.2", // x86_64-v2
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    ))]
/// Separates data like `[1, 2, 3, 4]` into `([1, 3], [2, 4])` for any length
fn deinterleave<T: Copy>(input: &[T]) -> (Vec<T>, Vec<T>) {
    input.chunks_exact(2).map(|c| (c[0], c[1])).unzip()
}

/// Splits a slice of [`Complex<f32>`] into separate real and imaginary
/// vectors, ready for [`crate::fft`].
pub fn split_complex32(signal: &[Complex<f32>]) -> (Vec<f32>, Vec<f32>) {
    let parts: &[f32] = cast_slice(signal);
    deinterleave(parts)
}

/// Splits a slice of [`Complex<f64>`] into separate real and imaginary
/// vectors, ready for [`crate::fft`].
pub fn split_complex64(signal: &[Complex<f64>]) -> (Vec<f64>, Vec<f64>) {
    let parts: &[f64] = cast_slice(signal);
    deinterleave(parts)
}

/// Combines split real and imaginary slices back into complex values.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`.
pub fn combine_re_im<T: Float>(reals: &[T], imags: &[T]) -> Vec<Complex<T>> {
    assert_eq!(reals.len(), imags.len());

    reals
        .iter()
        .zip(imags.iter())
        .map(|(z_re, z_im)| Complex::new(*z_re, *z_im))
        .collect()
}
