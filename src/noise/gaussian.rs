//! Gaussian noise generator implementation.

use crate::{Error, Result, Signal};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// An additive Gaussian noise source.
///
/// Each sample is drawn independently from `Normal(mean, sqrt(variance))`.
pub struct GaussianNoise<R: Rng = rand::rngs::ThreadRng> {
    /// Sampling distribution
    distribution: Normal<f64>,
    /// Random number generator
    rng: R,
}

impl GaussianNoise<rand::rngs::ThreadRng> {
    /// Creates a noise generator backed by `ThreadRng`.
    ///
    /// # Arguments
    ///
    /// * `mean` - Mean of the distribution
    /// * `variance` - Variance of the distribution, must be non-negative
    ///
    /// # Examples
    ///
    /// ```
    /// use harmonic_filter::{GaussianNoise, Signal};
    ///
    /// let mut noise = GaussianNoise::new(0.0, 0.1).unwrap();
    /// let sample = noise.next_sample();
    /// assert!(sample.is_finite());
    /// ```
    pub fn new(mean: f64, variance: f64) -> Result<Self> {
        Self::with_rng(mean, variance, rand::thread_rng())
    }
}

impl<R: Rng> GaussianNoise<R> {
    /// Creates a noise generator with a custom RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use harmonic_filter::{GaussianNoise, Signal};
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = GaussianNoise::with_rng(0.0, 1.0, rng).unwrap();
    /// let sample = noise.next_sample();
    /// ```
    pub fn with_rng(mean: f64, variance: f64, rng: R) -> Result<Self> {
        let distribution = distribution(mean, variance)?;
        Ok(Self { distribution, rng })
    }

    pub fn mean(&self) -> f64 {
        self.distribution.mean()
    }

    pub fn std_dev(&self) -> f64 {
        self.distribution.std_dev()
    }
}

/// Validates `(mean, variance)` and builds the sampling distribution.
fn distribution(mean: f64, variance: f64) -> Result<Normal<f64>> {
    if !mean.is_finite() {
        return Err(Error::invalid("noise_mean", format!("must be finite, got {mean}")));
    }
    if !variance.is_finite() || variance < 0.0 {
        return Err(Error::invalid(
            "noise_variance",
            format!("must be a non-negative finite number, got {variance}"),
        ));
    }
    Normal::new(mean, variance.sqrt()).map_err(|e| Error::invalid("noise_variance", e.to_string()))
}

impl<R: Rng> Signal for GaussianNoise<R> {
    fn next_sample(&mut self) -> f64 {
        self.distribution.sample(&mut self.rng)
    }
}
