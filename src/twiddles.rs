use num_traits::{Float, FloatConst};

/// Iterator over the twiddle factors `W_m^0, W_m^1, ..` of one butterfly
/// stage with group size `m`, where `W_m = exp(-i * 2 * pi / m)`.
///
/// Only the principal root is computed with `sin_cos`; every following
/// factor comes from multiplying the previous one by `W_m`. The recurrence
/// drifts by a few ulps over a long stage compared to calling `sin_cos` per
/// index, which is an accepted trade of exactness for speed.
pub(crate) struct StageTwiddles<T> {
    st: T,
    ct: T,
    w_re: T,
    w_im: T,
}

impl<T: Float + FloatConst> StageTwiddles<T> {
    /// `m` is the butterfly group size of the stage, a power of two >= 2.
    pub fn new(m: usize) -> Self {
        let theta = -(T::PI() + T::PI()) / T::from(m).unwrap();
        let (st, ct) = theta.sin_cos();
        Self {
            st,
            ct,
            w_re: T::one(),
            w_im: T::zero(),
        }
    }
}

impl<T: Float> Iterator for StageTwiddles<T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<(T, T)> {
        let w_re = self.w_re;
        let w_im = self.w_im;

        let temp = self.w_re;
        self.w_re = temp * self.ct - self.w_im * self.st;
        self.w_im = temp * self.st + self.w_im * self.ct;

        Some((w_re, w_im))
    }
}
