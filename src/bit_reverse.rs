//! Bit-reversal permutation, the input reordering required by an in-place
//! decimation-in-time FFT.

/// Reverses the lowest `bits` bits of `x`.
///
/// Bit `0` of `x` becomes bit `bits - 1` of the result and so on. Bits of
/// `x` at or above `bits` are discarded. `bits == 0` yields `0`.
#[inline]
pub fn reverse_bits(x: usize, bits: u32) -> usize {
    if bits == 0 {
        return 0;
    }
    let shift = usize::BITS - bits;
    x.reverse_bits() >> shift
}

/// Applies the bit-reversal permutation to `buf` in place.
///
/// The element at index `i` ends up at index `reverse_bits(i, log2n)`. Each
/// pair is swapped exactly once (only when `i < reverse_bits(i)`), and
/// palindromic indices stay put, so the permutation is an involution:
/// applying it twice restores the original order.
pub fn bit_reverse_permute<T: Copy>(buf: &mut [T], log2n: u32) {
    for i in 0..buf.len() {
        let j = reverse_bits(i, log2n);
        if i < j {
            buf.swap(i, j);
        }
    }
}
