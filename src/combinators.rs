//! Signal combinators for composing signals.
//!
//! This module provides the sample-wise sum used to lay noise over the
//! harmonic, the `SignalExt` chaining helpers, and the slice-level `combine`.

use crate::filters::{ButterworthLowPass, MovingAverage};
use crate::{Error, Result, Samples, Signal};

/// Adds two signals together (mixing).
///
/// # Examples
///
/// ```
/// use harmonic_filter::{ConstantSignal, Signal, combinators::Add};
///
/// let mut mixed = Add::new(ConstantSignal(1.0), ConstantSignal(0.5));
/// assert_eq!(mixed.next_sample(), 1.5);
/// ```
pub struct Add<A: Signal, B: Signal> {
    a: A,
    b: B,
}

impl<A: Signal, B: Signal> Add<A, B> {
    /// Creates a new Add combinator.
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A: Signal, B: Signal> Signal for Add<A, B> {
    fn next_sample(&mut self) -> f64 {
        self.a.next_sample() + self.b.next_sample()
    }
}

/// Extension trait providing chaining methods for all signals.
///
/// # Examples
///
/// ```
/// use harmonic_filter::{GaussianNoise, HarmonicOscillator, Signal, SignalExt, TimeGrid};
///
/// let grid = TimeGrid::new(0.0, 10.0, 0.01).unwrap();
/// let noise = GaussianNoise::new(0.0, 0.1).unwrap();
/// let mut chain = HarmonicOscillator::new(grid, 1.0, 1.0, 0.0)
///     .add(noise)
///     .lowpass(1.0, grid.sampling_frequency(), 5)
///     .unwrap();
/// let filtered = chain.render(grid.len());
/// assert_eq!(filtered.len(), 1000);
/// ```
pub trait SignalExt: Signal + Sized {
    /// Adds this signal to another signal (mixing).
    fn add<S: Signal>(self, other: S) -> Add<Self, S> {
        Add { a: self, b: other }
    }

    /// Applies a Butterworth low-pass filter of the given order.
    fn lowpass(
        self,
        cutoff: f64,
        sampling_frequency: f64,
        order: usize,
    ) -> Result<ButterworthLowPass<Self>> {
        ButterworthLowPass::new(self, cutoff, sampling_frequency, order)
    }

    /// Applies a moving average over `window` samples.
    fn moving_average(self, window: usize) -> Result<MovingAverage<Self>> {
        MovingAverage::new(self, window)
    }
}

impl<T: Signal> SignalExt for T {}

/// Lays `noise` over `signal` when `show_noise` is set.
///
/// With `show_noise == false` the signal is returned unchanged whatever the
/// noise holds; otherwise the result is the elementwise sum. Both slices must
/// have the same length either way.
pub fn combine(signal: &[f64], noise: &[f64], show_noise: bool) -> Result<Vec<f64>> {
    if noise.len() != signal.len() {
        return Err(Error::LengthMismatch {
            expected: signal.len(),
            actual: noise.len(),
        });
    }
    if !show_noise {
        return Ok(signal.to_vec());
    }
    Ok(Samples::new(signal)
        .add(Samples::new(noise))
        .render(signal.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConstantSignal;

    #[test]
    fn test_add_signals() {
        let mut sum = ConstantSignal(0.25).add(ConstantSignal(-1.0));
        assert_eq!(sum.render(3), vec![-0.75; 3]);
    }

    #[test]
    fn test_combine_hidden_noise_is_identity() {
        let signal = [0.1, 0.2, 0.3];
        let noise = [5.0, -5.0, f64::NAN];
        assert_eq!(combine(&signal, &noise, false).unwrap(), signal.to_vec());
    }

    #[test]
    fn test_combine_shown_noise_sums() {
        let signal = [0.1, 0.2, 0.3];
        let noise = [1.0, -1.0, 0.5];
        let combined = combine(&signal, &noise, true).unwrap();
        for ((c, s), n) in combined.iter().zip(signal).zip(noise) {
            assert_eq!(*c, s + n);
        }
    }

    #[test]
    fn test_combine_length_mismatch() {
        let err = combine(&[1.0, 2.0], &[1.0], true).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                expected: 2,
                actual: 1
            }
        ));
        assert!(combine(&[1.0, 2.0], &[1.0], false).is_err());
    }

    #[test]
    fn test_chained_moving_average() {
        let mut smoothed = ConstantSignal(2.0).moving_average(4).unwrap();
        assert!(smoothed.render(10).iter().all(|&s| s == 2.0));
    }
}
