//! One update cycle: harmonic, noise, combine, filter.

use crate::filters::{self, DEFAULT_ORDER};
use crate::{Error, NoiseCache, Result, TimeGrid, combine, harmonic};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Parameters of the harmonic and of the noise laid over it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalParams {
    pub amplitude: f64,
    pub frequency: f64,
    /// Radians
    pub phase: f64,
    pub noise_mean: f64,
    pub noise_variance: f64,
    pub show_noise: bool,
}

impl Default for SignalParams {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency: 1.0,
            phase: 0.0,
            noise_mean: 0.0,
            noise_variance: 0.1,
            show_noise: true,
        }
    }
}

/// Which smoother runs at the end of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterKind {
    /// Butterworth low-pass; `cutoff` shares the grid's time unit.
    LowPass { cutoff: f64, order: usize },
    MovingAverage { window: usize },
}

impl FilterKind {
    pub fn lowpass(cutoff: f64) -> Self {
        FilterKind::LowPass {
            cutoff,
            order: DEFAULT_ORDER,
        }
    }

    /// Filters `signal`, sampled at `sampling_frequency`.
    pub fn apply(&self, signal: &[f64], sampling_frequency: f64) -> Result<Vec<f64>> {
        match *self {
            FilterKind::LowPass { cutoff, order } => {
                filters::lowpass_filter(signal, cutoff, sampling_frequency, order)
            }
            FilterKind::MovingAverage { window } => filters::moving_average(signal, window),
        }
    }
}

impl Default for FilterKind {
    fn default() -> Self {
        FilterKind::lowpass(1.0)
    }
}

/// Where the noise of an update comes from.
pub enum NoiseSource<'a, R: Rng = rand::rngs::ThreadRng> {
    /// A caller-supplied sample, used as-is. Bypasses generation and cache.
    Explicit(&'a [f64]),
    /// Drawn through (and memoized in) a cache.
    Cached(&'a mut NoiseCache<R>),
}

/// Everything one update hands to the rendering layer.
///
/// All four series have the grid's length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub time: Vec<f64>,
    /// The harmonic alone
    pub clean: Vec<f64>,
    /// The harmonic with noise applied (or not, per `show_noise`)
    pub signal: Vec<f64>,
    pub filtered: Vec<f64>,
}

impl Frame {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Rows of `(t, clean, signal, filtered)`.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64, f64)> + '_ {
        self.time
            .iter()
            .zip(&self.clean)
            .zip(&self.signal)
            .zip(&self.filtered)
            .map(|(((&t, &c), &s), &f)| (t, c, s, f))
    }
}

/// Runs one full update over `grid`.
///
/// The noise is always obtained (and a cache always updated) even when
/// `show_noise` is off, so toggling the flag back on shows the same noise.
pub fn recompute<R: Rng>(
    grid: &TimeGrid,
    params: &SignalParams,
    filter: &FilterKind,
    noise: NoiseSource<'_, R>,
) -> Result<Frame> {
    let clean = harmonic(grid, params.amplitude, params.frequency, params.phase);

    let signal = match noise {
        NoiseSource::Explicit(sample) => {
            if sample.len() != grid.len() {
                return Err(Error::LengthMismatch {
                    expected: grid.len(),
                    actual: sample.len(),
                });
            }
            combine(&clean, sample, params.show_noise)?
        }
        NoiseSource::Cached(cache) => {
            let sample = cache.sample(grid.len(), params.noise_mean, params.noise_variance)?;
            combine(&clean, sample, params.show_noise)?
        }
    };

    let filtered = filter.apply(&signal, grid.sampling_frequency())?;

    Ok(Frame {
        time: grid.to_vec(),
        clean,
        signal,
        filtered,
    })
}
