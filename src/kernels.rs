//! Butterfly kernels for the radix-2 decimation-in-time transform.
//!
//! The driver walks stages from group size 2 up to `N`, so the butterflies
//! start fine-grained and progressively combine larger sub-transforms. All
//! work happens in place over buffers that have already been bit-reverse
//! permuted; the only scratch state is one complex temporary per butterfly.

use num_traits::{Float, FloatConst};

use crate::twiddles::StageTwiddles;

/// Runs one butterfly stage with group size `m` (a power of two >= 2).
///
/// For each twiddle index `j` in `[0, m/2)`, every group starting at
/// `k = j, j + m, ..` combines the pair `(buf[k], buf[k + m/2])` as
/// `t = w * buf[k + m/2]; buf[k + m/2] = buf[k] - t; buf[k] = buf[k] + t`.
fn butterfly_stage<T: Float + FloatConst>(reals: &mut [T], imags: &mut [T], m: usize) {
    let n = reals.len();
    let m_half = m >> 1;

    for (j, (w_re, w_im)) in (0..m_half).zip(StageTwiddles::<T>::new(m)) {
        let mut k = j;
        while k < n {
            let k_odd = k + m_half;

            let t_re = w_re * reals[k_odd] - w_im * imags[k_odd];
            let t_im = w_re * imags[k_odd] + w_im * reals[k_odd];

            reals[k_odd] = reals[k] - t_re;
            imags[k_odd] = imags[k] - t_im;
            reals[k] = reals[k] + t_re;
            imags[k] = imags[k] + t_im;

            k += m;
        }
    }
}

/// Runs all `log2n` butterfly stages in place.
///
/// Callers must have bit-reverse permuted both slices first; the output
/// comes out in natural order.
pub(crate) fn fft_in_place<T: Float + FloatConst>(reals: &mut [T], imags: &mut [T], log2n: u32) {
    for stage in 1..=log2n {
        butterfly_stage(reals, imags, 1 << stage);
    }
}
