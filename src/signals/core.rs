//! Core signal trait and simple sources.
//!
//! Everything in the pipeline is a `Signal`: the harmonic generator, the
//! noise generators, the combinators and the filters. Sources are pulled one
//! sample at a time, so stages can be chained lazily and only rendered into a
//! buffer at the end.

/// Common interface for all signal sources and processors.
///
/// The trait provides three operations:
/// - Single sample generation via `next_sample()`
/// - Batch processing via `process()`
/// - Rendering a fresh buffer via `render()`
pub trait Signal {
    /// Generates the next sample from the signal.
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    /// Implementors may override this for more efficient batch processing.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// Renders the next `len` samples into a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use harmonic_filter::{ConstantSignal, Signal};
    ///
    /// let mut dc = ConstantSignal(0.5);
    /// assert_eq!(dc.render(3), vec![0.5, 0.5, 0.5]);
    /// ```
    fn render(&mut self, len: usize) -> Vec<f64> {
        let mut buffer = vec![0.0; len];
        self.process(&mut buffer);
        buffer
    }
}

/// A constant signal that always returns the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSignal(pub f64);

impl Signal for ConstantSignal {
    fn next_sample(&mut self) -> f64 {
        self.0
    }

    fn process(&mut self, buffer: &mut [f64]) {
        buffer.fill(self.0);
    }
}

impl From<f64> for ConstantSignal {
    fn from(value: f64) -> Self {
        ConstantSignal(value)
    }
}

/// Plays back a borrowed buffer, then silence.
///
/// This is how already-rendered arrays (an explicit noise sample, the
/// combined signal) are fed into the streaming filters.
///
/// # Examples
///
/// ```
/// use harmonic_filter::{Samples, Signal};
///
/// let data = [1.0, 2.0];
/// let mut samples = Samples::new(&data);
/// assert_eq!(samples.render(3), vec![1.0, 2.0, 0.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Samples<'a> {
    data: &'a [f64],
    position: usize,
}

impl<'a> Samples<'a> {
    pub fn new(data: &'a [f64]) -> Self {
        Self { data, position: 0 }
    }

    /// Number of buffered samples not yet played.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }
}

impl Signal for Samples<'_> {
    fn next_sample(&mut self) -> f64 {
        match self.data.get(self.position) {
            Some(&sample) => {
                self.position += 1;
                sample
            }
            None => 0.0,
        }
    }
}
