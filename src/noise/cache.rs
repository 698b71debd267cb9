//! Memoized noise samples.

use super::GaussianNoise;
use crate::{Result, Signal};
use rand::Rng;

/// Request parameters, with the floats kept as raw bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NoiseKey {
    len: usize,
    mean: u64,
    variance: u64,
}

impl NoiseKey {
    fn new(len: usize, mean: f64, variance: f64) -> Self {
        Self {
            len,
            mean: mean.to_bits(),
            variance: variance.to_bits(),
        }
    }
}

/// Keeps the last generated noise sample and hands it back while the grid
/// length and distribution stay the same.
///
/// Changing only the harmonic parameters therefore redraws the plot over the
/// same noise instead of jittering it. `reset` forces fresh randomness on the
/// next request.
///
/// # Examples
///
/// ```
/// use harmonic_filter::NoiseCache;
///
/// let mut cache = NoiseCache::new();
/// let first = cache.sample(100, 0.0, 0.1).unwrap().to_vec();
/// let second = cache.sample(100, 0.0, 0.1).unwrap().to_vec();
/// assert_eq!(first, second);
/// ```
pub struct NoiseCache<R: Rng = rand::rngs::ThreadRng> {
    rng: R,
    key: Option<NoiseKey>,
    sample: Vec<f64>,
}

impl NoiseCache<rand::rngs::ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for NoiseCache<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> NoiseCache<R> {
    /// Creates an empty cache drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            key: None,
            sample: Vec::new(),
        }
    }

    /// Returns `len` samples of `Normal(mean, sqrt(variance))`.
    ///
    /// The cached sample is returned unchanged when `len`, `mean` and
    /// `variance` are bitwise equal to the previous request (so `0.0` and
    /// `-0.0` differ); otherwise a new sample is drawn and cached. Parameters
    /// are validated before the cache is consulted.
    pub fn sample(&mut self, len: usize, mean: f64, variance: f64) -> Result<&[f64]> {
        let mut noise = GaussianNoise::with_rng(mean, variance, &mut self.rng)?;
        let key = NoiseKey::new(len, mean, variance);
        if self.key == Some(key) {
            log::debug!("reusing cached noise (len={len}, mean={mean}, variance={variance})");
            return Ok(&self.sample);
        }

        self.sample = noise.render(len);
        self.key = Some(key);
        log::debug!("generated noise (len={len}, mean={mean}, variance={variance})");
        Ok(&self.sample)
    }

    /// True if a request with these parameters would be served from cache.
    pub fn is_cached(&self, len: usize, mean: f64, variance: f64) -> bool {
        self.key == Some(NoiseKey::new(len, mean, variance))
    }

    /// Drops the cached sample.
    pub fn reset(&mut self) {
        self.key = None;
        self.sample.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded() -> NoiseCache<StdRng> {
        NoiseCache::with_rng(StdRng::seed_from_u64(1234))
    }

    #[test]
    fn test_identical_requests_are_bit_identical() {
        let mut cache = seeded();
        let first = cache.sample(1000, 0.0, 0.1).unwrap().to_vec();
        let second = cache.sample(1000, 0.0, 0.1).unwrap().to_vec();
        assert_eq!(first.len(), 1000);
        assert_eq!(first, second);
    }

    #[test]
    fn test_length_change_regenerates() {
        let mut cache = seeded();
        let first = cache.sample(500, 0.0, 0.1).unwrap().to_vec();
        let second = cache.sample(501, 0.0, 0.1).unwrap().to_vec();
        assert_eq!(second.len(), 501);
        assert_ne!(first[..], second[..500]);
    }

    #[test]
    fn test_mean_change_regenerates() {
        let mut cache = seeded();
        let first = cache.sample(500, 0.0, 0.1).unwrap().to_vec();
        assert!(!cache.is_cached(500, 0.2, 0.1));
        let second = cache.sample(500, 0.2, 0.1).unwrap().to_vec();
        assert_ne!(first, second);
        assert!(cache.is_cached(500, 0.2, 0.1));
    }

    #[test]
    fn test_variance_change_regenerates() {
        let mut cache = seeded();
        let first = cache.sample(500, 0.0, 0.1).unwrap().to_vec();
        let second = cache.sample(500, 0.0, 0.5).unwrap().to_vec();
        assert_ne!(first, second);
    }

    #[test]
    fn test_reset_forces_fresh_sample() {
        let mut cache = seeded();
        let first = cache.sample(500, 0.0, 0.1).unwrap().to_vec();
        cache.reset();
        assert!(!cache.is_cached(500, 0.0, 0.1));
        let second = cache.sample(500, 0.0, 0.1).unwrap().to_vec();
        assert_ne!(first, second);
    }

    #[test]
    fn test_invalid_request_keeps_previous_sample() {
        let mut cache = seeded();
        let first = cache.sample(10, 0.0, 0.1).unwrap().to_vec();
        assert!(cache.sample(10, 0.0, -1.0).is_err());
        assert!(cache.is_cached(10, 0.0, 0.1));
        assert_eq!(cache.sample(10, 0.0, 0.1).unwrap(), &first[..]);
    }

    #[test]
    fn test_signed_zero_mean_is_a_different_key() {
        let mut cache = seeded();
        let first = cache.sample(50, 0.0, 0.1).unwrap().to_vec();
        assert!(!cache.is_cached(50, -0.0, 0.1));
        let second = cache.sample(50, -0.0, 0.1).unwrap().to_vec();
        assert_ne!(first, second);
        assert!(cache.is_cached(50, -0.0, 0.1));
    }

    #[test]
    fn test_non_finite_request_is_rejected_without_lookup() {
        let mut cache = seeded();
        cache.sample(10, 0.0, 0.1).unwrap();
        let err = cache.sample(10, f64::NAN, 0.1).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidParameter { name: "noise_mean", .. }));
        assert!(cache.is_cached(10, 0.0, 0.1));
    }
}
