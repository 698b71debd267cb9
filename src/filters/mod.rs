//! Smoothing filters.
//!
//! Two variants are available: a Butterworth low-pass (cascaded biquads) and a
//! simple moving average. Both come as streaming `Signal` wrappers and as
//! slice functions returning an output of the input's length.

mod butterworth;
mod moving_average;

pub use butterworth::{ButterworthLowPass, DEFAULT_ORDER, MAX_ORDER, lowpass_filter};
pub use moving_average::{MovingAverage, moving_average};
