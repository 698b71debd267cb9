//! Simple moving-average smoother.

use crate::signals::MAX_LEN;
use crate::{Error, Result, Samples, Signal};
use std::collections::VecDeque;

/// Averages each run of `window` consecutive input samples.
///
/// Output `i` (for `i >= window - 1`) is the mean of inputs
/// `i - window + 1 ..= i`. The first `window - 1` outputs, before a full
/// window is available, repeat the first input sample so the output stays
/// aligned with the input's time axis.
///
/// # Examples
///
/// ```
/// use harmonic_filter::{Samples, Signal, filters::MovingAverage};
///
/// let data = [1.0, 2.0, 3.0, 4.0];
/// let mut smoothed = MovingAverage::new(Samples::new(&data), 2).unwrap();
/// assert_eq!(smoothed.render(4), vec![1.0, 1.5, 2.5, 3.5]);
/// ```
pub struct MovingAverage<S: Signal> {
    source: S,
    window: usize,
    history: VecDeque<f64>,
    first: Option<f64>,
}

impl<S: Signal> MovingAverage<S> {
    /// Wraps `source`; `window` must lie in `1..=MAX_LEN`.
    pub fn new(source: S, window: usize) -> Result<Self> {
        if window == 0 {
            return Err(Error::invalid("window", "must be at least 1"));
        }
        if window > MAX_LEN {
            return Err(Error::invalid("window", format!("must not exceed {MAX_LEN}")));
        }
        Ok(Self {
            source,
            window,
            history: VecDeque::with_capacity(window),
            first: None,
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl<S: Signal> Signal for MovingAverage<S> {
    fn next_sample(&mut self) -> f64 {
        let input = self.source.next_sample();
        let first = *self.first.get_or_insert(input);

        if self.history.len() == self.window {
            self.history.pop_front();
        }
        self.history.push_back(input);

        if self.history.len() < self.window {
            return first;
        }
        // Summed in window order each time so window == 1 is exact.
        self.history.iter().sum::<f64>() / self.window as f64
    }
}

/// Smooths `signal` with a `window`-sample moving average.
///
/// The output has the same length as the input. `window` must lie in
/// `1..=signal.len()`.
pub fn moving_average(signal: &[f64], window: usize) -> Result<Vec<f64>> {
    if window > signal.len() {
        return Err(Error::invalid(
            "window",
            format!("{window} exceeds signal length {}", signal.len()),
        ));
    }
    let mut filter = MovingAverage::new(Samples::new(signal), window)?;
    Ok(filter.render(signal.len()))
}
