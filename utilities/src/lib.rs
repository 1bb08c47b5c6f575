pub extern crate rustfft;

// rustfft doubles as the test oracle for the main crate
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_traits::{Float, FloatConst};

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Generate a random, complex, signal in the provided buffers
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
pub fn gen_random_signal<T>(reals: &mut [T], imags: &mut [T])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    assert_eq!(
        reals.len(),
        imags.len(),
        "Real and imaginary slices must be of equal length"
    );

    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for (real, imag) in reals.iter_mut().zip(imags.iter_mut()) {
        *real = uniform_dist.sample(&mut rng);
        *imag = uniform_dist.sample(&mut rng);
    }
}

/// Fill `reals` with `amplitude * sin(2 * pi * frequency * i / sample_rate)
/// + offset` and zero `imags`, the standard real-valued test tone.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
pub fn gen_sine<T: Float + FloatConst>(
    reals: &mut [T],
    imags: &mut [T],
    frequency: T,
    sample_rate: T,
    amplitude: T,
    offset: T,
) {
    assert_eq!(
        reals.len(),
        imags.len(),
        "Real and imaginary slices must be of equal length"
    );

    let two_pi = T::PI() + T::PI();
    for (i, (real, imag)) in reals.iter_mut().zip(imags.iter_mut()).enumerate() {
        let t = T::from(i).unwrap() / sample_rate;
        *real = amplitude * (two_pi * frequency * t).sin() + offset;
        *imag = T::zero();
    }
}
