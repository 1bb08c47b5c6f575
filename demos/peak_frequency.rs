//! End-to-end pipeline: a producer thread announces fresh parameters over a
//! `WorkSignal`, and the polling consumer runs signal -> fft -> magnitudes
//! -> peak-bin estimate.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use specfft::handoff::WorkSignal;
use specfft::{bin_frequency, dominant_bin, fft, magnitudes};
use utilities::gen_sine;

const N: usize = 1024;
const SAMPLE_RATE: f32 = 48_000.0;
const TONE_HZ: f32 = 3_000.0;

fn main() {
    let signal = Arc::new(WorkSignal::new());

    let producer = Arc::clone(&signal);
    thread::spawn(move || {
        thread::sleep(Duration::from_millis(10));
        producer.raise();
    });

    // Polling loop, the same shape a transport callback would gate.
    while !signal.take() {
        thread::sleep(Duration::from_millis(1));
    }

    let mut reals = vec![0.0f32; N];
    let mut imags = vec![0.0f32; N];
    gen_sine(&mut reals, &mut imags, TONE_HZ, SAMPLE_RATE, 1.0, 0.0);

    fft(&mut reals, &mut imags).expect("N is a power of two");

    let mut mags = vec![0.0f32; N / 2];
    magnitudes(&reals, &imags, &mut mags).expect("output holds N/2 bins");

    let peak = dominant_bin(&mags).expect("spectrum has more than one bin");
    println!(
        "dominant bin {peak} -> {:.1} Hz (magnitude {:.4})",
        bin_frequency(peak, SAMPLE_RATE, N),
        mags[peak]
    );
}
