//! Configuration and parameter ranges.

use crate::pipeline::{FilterKind, SignalParams};
use crate::session::{NoisePolicy, Session};
use crate::{Result, TimeGrid};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            stop: 10.0,
            step: 0.01,
        }
    }
}

impl GridConfig {
    pub fn build(&self) -> Result<TimeGrid> {
        TimeGrid::new(self.start, self.stop, self.step)
    }
}

/// Full description of a session, loadable from JSON.
///
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub grid: GridConfig,
    pub signal: SignalParams,
    pub filter: FilterKind,
    pub noise_policy: NoisePolicy,
    /// Seed for reproducible noise; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&text)?;
        log::debug!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn session(&self) -> Result<Session<StdRng>> {
        let grid = self.grid.build()?;
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Session::with_rng(grid, self.signal, self.filter, rng).with_noise_policy(self.noise_policy))
    }
}

/// Closed interval a control may take, with its step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParamRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamps `value` into the range. NaN maps to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }
}

/// The bounds each control enforces before values reach the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ranges {
    pub amplitude: ParamRange,
    pub frequency: ParamRange,
    pub phase: ParamRange,
    pub noise_mean: ParamRange,
    pub noise_variance: ParamRange,
    pub cutoff: ParamRange,
    pub window: ParamRange,
}

impl Default for Ranges {
    fn default() -> Self {
        Self {
            amplitude: ParamRange::new(0.1, 10.0, 0.1),
            frequency: ParamRange::new(0.1, 10.0, 0.1),
            phase: ParamRange::new(0.0, 2.0 * PI, 0.1),
            noise_mean: ParamRange::new(-1.0, 1.0, 0.1),
            noise_variance: ParamRange::new(0.0, 1.0, 0.01),
            cutoff: ParamRange::new(0.1, 5.0, 0.1),
            window: ParamRange::new(1.0, 50.0, 1.0),
        }
    }
}

impl Ranges {
    /// Clamps every field of `params` into its range.
    pub fn clamp_params(&self, params: &SignalParams) -> SignalParams {
        SignalParams {
            amplitude: self.amplitude.clamp(params.amplitude),
            frequency: self.frequency.clamp(params.frequency),
            phase: self.phase.clamp(params.phase),
            noise_mean: self.noise_mean.clamp(params.noise_mean),
            noise_variance: self.noise_variance.clamp(params.noise_variance),
            show_noise: params.show_noise,
        }
    }

    pub fn clamp_filter(&self, filter: &FilterKind) -> FilterKind {
        match *filter {
            FilterKind::LowPass { cutoff, order } => FilterKind::LowPass {
                cutoff: self.cutoff.clamp(cutoff),
                order,
            },
            FilterKind::MovingAverage { window } => FilterKind::MovingAverage {
                window: self.window.clamp(window as f64) as usize,
            },
        }
    }
}
