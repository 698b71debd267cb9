//! Deterministic signal sources.

mod harmonic;
mod traits;

pub use harmonic::{HarmonicOscillator, harmonic};
pub use traits::Oscillator;
