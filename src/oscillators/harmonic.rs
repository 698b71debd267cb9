//! Harmonic (pure sinusoid) generator.

use super::Oscillator;
use crate::{Signal, TimeGrid};
use std::f64::consts::PI;

/// Samples `amplitude * sin(2*pi*frequency*t + phase)` along a time grid.
///
/// Unlike a phase-accumulating oscillator, every sample is evaluated from its
/// grid time directly, so the output is exactly the closed form at each point.
/// Once the grid is exhausted the oscillator keeps stepping at the same rate.
///
/// Non-finite parameters are not rejected: they propagate as NaN/infinite
/// samples.
///
/// # Examples
///
/// ```
/// use harmonic_filter::{HarmonicOscillator, Signal, TimeGrid};
///
/// let grid = TimeGrid::new(0.0, 1.0, 0.25).unwrap();
/// let mut osc = HarmonicOscillator::new(grid, 2.0, 1.0, 0.0);
/// let samples = osc.render(grid.len());
/// assert!((samples[1] - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct HarmonicOscillator {
    grid: TimeGrid,
    index: usize,
    amplitude: f64,
    frequency: f64,
    phase: f64,
}

impl HarmonicOscillator {
    /// Creates a harmonic source positioned at the first grid point.
    ///
    /// # Arguments
    ///
    /// * `grid` - Time axis to sample
    /// * `amplitude` - Peak value
    /// * `frequency` - Cycles per unit time
    /// * `phase` - Phase offset in radians
    pub fn new(grid: TimeGrid, amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            grid,
            index: 0,
            amplitude,
            frequency,
            phase,
        }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Value of the waveform at time `t`.
    pub fn value_at(&self, t: f64) -> f64 {
        self.amplitude * (2.0 * PI * self.frequency * t + self.phase).sin()
    }
}

impl Signal for HarmonicOscillator {
    fn next_sample(&mut self) -> f64 {
        let t = self.grid.at(self.index);
        self.index += 1;
        self.value_at(t)
    }
}

impl Oscillator for HarmonicOscillator {
    fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    fn frequency(&self) -> f64 {
        self.frequency
    }

    fn reset(&mut self) {
        self.index = 0;
    }
}

/// Renders one harmonic over the whole grid.
pub fn harmonic(grid: &TimeGrid, amplitude: f64, frequency: f64, phase: f64) -> Vec<f64> {
    HarmonicOscillator::new(*grid, amplitude, frequency, phase).render(grid.len())
}
