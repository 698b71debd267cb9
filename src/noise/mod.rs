//! Noise generators for additive signal perturbation.
//!
//! This module contains the Gaussian noise source and the cache that
//! memoizes its output between updates.

mod cache;
mod gaussian;

pub use cache::NoiseCache;
pub use gaussian::GaussianNoise;
