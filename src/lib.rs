//! harmonic-filter - harmonic signals, additive noise and smoothing filters
//!
//! The library generates a sinusoid over a fixed time grid, lays Gaussian
//! noise over it (optionally memoized between updates) and smooths the result
//! with a Butterworth low-pass or a moving average. Every stage is a
//! streaming `Signal`; `pipeline::recompute` and `Session` run a whole update.

pub mod combinators;
pub mod config;
#[cfg(feature = "dashboard")]
pub mod drought;
pub mod error;
pub mod filters;
pub mod noise;
pub mod oscillators;
pub mod pipeline;
pub mod session;
pub mod signals;

// Re-export commonly used types at the crate root
pub use combinators::{Add, SignalExt, combine};
pub use config::{Config, GridConfig, ParamRange, Ranges};
pub use error::{Error, Result};
pub use filters::{
    ButterworthLowPass, DEFAULT_ORDER, MAX_ORDER, MovingAverage, lowpass_filter, moving_average,
};
pub use noise::{GaussianNoise, NoiseCache};
pub use oscillators::{HarmonicOscillator, Oscillator, harmonic};
pub use pipeline::{FilterKind, Frame, NoiseSource, SignalParams, recompute};
pub use session::{NoisePolicy, Session};
pub use signals::{ConstantSignal, Samples, Signal, TimeGrid};
