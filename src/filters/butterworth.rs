//! Butterworth low-pass filter built from cascaded biquad sections.
//!
//! An order-`n` digital Butterworth low-pass is realised as `n / 2`
//! second-order sections plus one first-order section when `n` is odd. Each
//! section is the bilinear transform of one factor of the analog prototype,
//! prewarped at the cutoff, so the cascade has the same transfer function as
//! the direct bilinear design. Every section has unity gain at DC.

use crate::{Error, Result, Samples, Signal};
use std::f64::consts::PI;

/// Filter order used when none is given.
pub const DEFAULT_ORDER: usize = 5;

/// Highest supported filter order.
pub const MAX_ORDER: usize = 32;

/// One biquad stage with its own delay line.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Section {
    // Normalized coefficients (a0 == 1)
    b0: f64,
    b1: f64,
    b2: f64,
    a1: f64,
    a2: f64,

    x1: f64, // Input at t-1
    x2: f64, // Input at t-2
    y1: f64, // Output at t-1
    y2: f64, // Output at t-2
}

impl Section {
    fn from_coefficients(b0: f64, b1: f64, b2: f64, a0: f64, a1: f64, a2: f64) -> Self {
        Self {
            b0: b0 / a0,
            b1: b1 / a0,
            b2: b2 / a0,
            a1: a1 / a0,
            a2: a2 / a0,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    /// Low-pass biquad (Audio EQ Cookbook) at `omega` rad/sample with quality `q`.
    fn second_order(omega: f64, q: f64) -> Self {
        let sin_omega = omega.sin();
        let cos_omega = omega.cos();
        let alpha = sin_omega / (2.0 * q);

        Self::from_coefficients(
            (1.0 - cos_omega) / 2.0,
            1.0 - cos_omega,
            (1.0 - cos_omega) / 2.0,
            1.0 + alpha,
            -2.0 * cos_omega,
            1.0 - alpha,
        )
    }

    /// Bilinear transform of `1 / (s + 1)` prewarped at `omega`.
    fn first_order(omega: f64) -> Self {
        let k = (omega / 2.0).tan();
        Self::from_coefficients(k, k, 0.0, 1.0 + k, k - 1.0, 0.0)
    }

    fn process(&mut self, x0: f64) -> f64 {
        // Direct Form I:
        // y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2] - a1*y[n-1] - a2*y[n-2]
        let y0 = self.b0 * x0 + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = x0;
        self.y2 = self.y1;
        self.y1 = y0;

        y0
    }

    fn clear(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }
}

/// Quality factors of the conjugate pole pairs of an order-`order`
/// Butterworth prototype.
fn pole_pair_qs(order: usize) -> impl Iterator<Item = f64> {
    let n = order as f64;
    (0..order / 2).map(move |k| {
        // Angle of the pole pair measured from the negative real axis
        let angle = PI * (n - 1.0 - 2.0 * k as f64) / (2.0 * n);
        1.0 / (2.0 * angle.cos())
    })
}

/// A causal Butterworth low-pass filter over an input signal.
///
/// The filter starts from zero state, so the usual IIR start-up transient
/// appears at the beginning of the output.
///
/// # Examples
///
/// ```
/// use harmonic_filter::{ConstantSignal, Signal, filters::ButterworthLowPass};
///
/// let mut filter = ButterworthLowPass::new(ConstantSignal(1.0), 1.0, 100.0, 5).unwrap();
/// let output = filter.render(2000);
/// assert!((output[1999] - 1.0).abs() < 1e-6);
/// ```
pub struct ButterworthLowPass<S: Signal> {
    source: S,
    sections: Vec<Section>,
    normalized_cutoff: f64,
}

impl<S: Signal> ButterworthLowPass<S> {
    /// Designs the filter and wraps `source`.
    ///
    /// # Arguments
    ///
    /// * `source` - Input signal
    /// * `cutoff` - Cutoff frequency, in the same unit as `sampling_frequency`
    /// * `sampling_frequency` - Samples per unit time
    /// * `order` - Filter order, in `1..=MAX_ORDER`
    ///
    /// Fails unless `cutoff / (0.5 * sampling_frequency)` lies strictly
    /// between 0 and 1.
    pub fn new(source: S, cutoff: f64, sampling_frequency: f64, order: usize) -> Result<Self> {
        if !sampling_frequency.is_finite() || sampling_frequency <= 0.0 {
            return Err(Error::invalid(
                "sampling_frequency",
                format!("must be positive and finite, got {sampling_frequency}"),
            ));
        }
        if order == 0 || order > MAX_ORDER {
            return Err(Error::invalid(
                "order",
                format!("must lie in 1..={MAX_ORDER}, got {order}"),
            ));
        }
        let nyquist = 0.5 * sampling_frequency;
        let normalized_cutoff = cutoff / nyquist;
        if normalized_cutoff.is_nan() || normalized_cutoff <= 0.0 || normalized_cutoff >= 1.0 {
            return Err(Error::invalid(
                "cutoff",
                format!("must lie in (0, {nyquist}), got {cutoff}"),
            ));
        }

        let omega = PI * normalized_cutoff;
        let mut sections: Vec<Section> = pole_pair_qs(order)
            .map(|q| Section::second_order(omega, q))
            .collect();
        if order % 2 == 1 {
            sections.push(Section::first_order(omega));
        }
        log::debug!(
            "designed order {order} low-pass at normalized cutoff {normalized_cutoff:.4} ({} sections)",
            sections.len()
        );

        Ok(Self {
            source,
            sections,
            normalized_cutoff,
        })
    }

    /// Cutoff as a fraction of the Nyquist frequency.
    pub fn normalized_cutoff(&self) -> f64 {
        self.normalized_cutoff
    }

    pub fn order(&self) -> usize {
        self.sections
            .iter()
            .map(|s| if s.b2 == 0.0 && s.a2 == 0.0 { 1 } else { 2 })
            .sum()
    }

    /// Clears the delay lines of every section.
    pub fn reset(&mut self) {
        for section in &mut self.sections {
            section.clear();
        }
    }
}

impl<S: Signal> Signal for ButterworthLowPass<S> {
    fn next_sample(&mut self) -> f64 {
        let input = self.source.next_sample();
        self.sections
            .iter_mut()
            .fold(input, |sample, section| section.process(sample))
    }
}

/// Low-pass filters `signal`, returning an output of the same length.
///
/// Each call designs a fresh filter; no state carries over between calls.
pub fn lowpass_filter(
    signal: &[f64],
    cutoff: f64,
    sampling_frequency: f64,
    order: usize,
) -> Result<Vec<f64>> {
    let mut filter =
        ButterworthLowPass::new(Samples::new(signal), cutoff, sampling_frequency, order)?;
    Ok(filter.render(signal.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConstantSignal, HarmonicOscillator, TimeGrid};

    fn impulse(len: usize) -> Vec<f64> {
        let mut data = vec![0.0; len];
        data[0] = 1.0;
        data
    }

    #[test]
    fn test_output_length_matches_input() {
        let input = vec![0.5; 321];
        assert_eq!(lowpass_filter(&input, 1.0, 100.0, DEFAULT_ORDER).unwrap().len(), 321);
    }

    #[test]
    fn test_constant_input_settles_to_constant() {
        let input = vec![0.75; 2000];
        let output = lowpass_filter(&input, 1.0, 100.0, DEFAULT_ORDER).unwrap();
        for &sample in &output[1500..] {
            assert!((sample - 0.75).abs() < 1e-6, "got {sample}");
        }
    }

    #[test]
    fn test_second_order_half_band_coefficients() {
        // Order 2 at Wn = 0.5: b = [0.29289, 0.58579, 0.29289], a = [1, 0, 0.17157]
        let output = lowpass_filter(&impulse(3), 25.0, 100.0, 2).unwrap();
        assert!((output[0] - 0.292_893_22).abs() < 1e-6);
        assert!((output[1] - 0.585_786_44).abs() < 1e-6);
        assert!((output[2] - (0.292_893_22 - 0.171_572_88 * 0.292_893_22)).abs() < 1e-6);
    }

    #[test]
    fn test_first_order_half_band_coefficients() {
        // Order 1 at Wn = 0.5: b = [0.5, 0.5], a = [1, 0]
        let output = lowpass_filter(&impulse(3), 25.0, 100.0, 1).unwrap();
        assert!((output[0] - 0.5).abs() < 1e-12);
        assert!((output[1] - 0.5).abs() < 1e-12);
        assert!(output[2].abs() < 1e-12);
    }

    #[test]
    fn test_section_layout() {
        let filter = ButterworthLowPass::new(ConstantSignal(0.0), 1.0, 100.0, 5).unwrap();
        assert_eq!(filter.sections.len(), 3);
        assert_eq!(filter.order(), 5);
        assert!((filter.normalized_cutoff() - 0.02).abs() < 1e-12);

        let filter = ButterworthLowPass::new(ConstantSignal(0.0), 1.0, 100.0, 4).unwrap();
        assert_eq!(filter.sections.len(), 2);
        assert_eq!(filter.order(), 4);
    }

    #[test]
    fn test_butterworth_qs() {
        let qs: Vec<f64> = pole_pair_qs(4).collect();
        assert!((qs[0] - 1.306_563).abs() < 1e-6);
        assert!((qs[1] - 0.541_196).abs() < 1e-6);

        let qs: Vec<f64> = pole_pair_qs(2).collect();
        assert!((qs[0] - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_attenuates_above_cutoff() {
        let grid = TimeGrid::new(0.0, 20.0, 0.01).unwrap();
        let source = HarmonicOscillator::new(grid, 1.0, 10.0, 0.0);
        let mut filter = ButterworthLowPass::new(source, 1.0, 100.0, DEFAULT_ORDER).unwrap();
        let output = filter.render(grid.len());
        let peak = output[1000..].iter().fold(0.0_f64, |m, s| m.max(s.abs()));
        assert!(peak < 0.01, "expected attenuation, got peak {peak}");
    }

    #[test]
    fn test_passes_below_cutoff() {
        let grid = TimeGrid::new(0.0, 50.0, 0.01).unwrap();
        let source = HarmonicOscillator::new(grid, 1.0, 0.1, 0.0);
        let mut filter = ButterworthLowPass::new(source, 5.0, 100.0, DEFAULT_ORDER).unwrap();
        let output = filter.render(grid.len());
        let peak = output[2000..].iter().fold(0.0_f64, |m, s| m.max(s.abs()));
        assert!(peak > 0.9, "expected pass-through, got peak {peak}");
    }

    #[test]
    fn test_rejects_cutoff_outside_nyquist_band() {
        let input = vec![0.0; 10];
        assert!(lowpass_filter(&input, 0.0, 100.0, 5).is_err());
        assert!(lowpass_filter(&input, -1.0, 100.0, 5).is_err());
        assert!(lowpass_filter(&input, 50.0, 100.0, 5).is_err());
        assert!(lowpass_filter(&input, 80.0, 100.0, 5).is_err());
        assert!(lowpass_filter(&input, f64::NAN, 100.0, 5).is_err());
    }

    #[test]
    fn test_rejects_bad_rate_and_order() {
        let input = vec![0.0; 10];
        assert!(lowpass_filter(&input, 1.0, 0.0, 5).is_err());
        assert!(lowpass_filter(&input, 1.0, f64::INFINITY, 5).is_err());
        let err = lowpass_filter(&input, 1.0, 100.0, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "order", .. }));
    }

    #[test]
    fn test_rejects_huge_order() {
        let input = vec![0.0; 10];
        assert!(lowpass_filter(&input, 1.0, 100.0, MAX_ORDER).is_ok());
        let err = lowpass_filter(&input, 1.0, 100.0, MAX_ORDER + 1).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "order", .. }));
        assert!(lowpass_filter(&input, 1.0, 100.0, usize::MAX).is_err());
    }

    #[test]
    fn test_calls_are_independent() {
        let input: Vec<f64> = (0..200).map(|i| (i as f64 * 0.3).sin()).collect();
        let first = lowpass_filter(&input, 2.0, 100.0, 3).unwrap();
        let second = lowpass_filter(&input, 2.0, 100.0, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut filter = ButterworthLowPass::new(ConstantSignal(1.0), 5.0, 100.0, 3).unwrap();
        let first = filter.next_sample();
        filter.render(50);
        filter.reset();
        assert_eq!(filter.next_sample(), first);
    }

    #[test]
    fn test_filter_stability() {
        let grid = TimeGrid::new(0.0, 100.0, 0.01).unwrap();
        let source = HarmonicOscillator::new(grid, 1.0, 3.0, 0.0);
        let mut filter = ButterworthLowPass::new(source, 4.9, 100.0, 8).unwrap();
        for _ in 0..grid.len() {
            let sample = filter.next_sample();
            assert!(sample.is_finite(), "filter became unstable");
            assert!(sample.abs() < 2.0, "output amplitude too high: {sample}");
        }
    }
}
