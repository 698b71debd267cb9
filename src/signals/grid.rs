//! Fixed-step time axis.

use crate::{Error, Result};

/// Largest number of points a grid may hold.
pub const MAX_LEN: usize = 10_000_000;

/// An immutable, evenly spaced sequence of time points.
///
/// Points are `start + i * step` for `i` in `0..len`, with `len` chosen so the
/// last point lies strictly below `stop` (half-open, like `arange`).
///
/// # Examples
///
/// ```
/// use harmonic_filter::TimeGrid;
///
/// let grid = TimeGrid::new(0.0, 10.0, 0.01).unwrap();
/// assert_eq!(grid.len(), 1000);
/// assert_eq!(grid.at(0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    start: f64,
    step: f64,
    len: usize,
}

impl TimeGrid {
    /// Creates the grid `start, start + step, ...` below `stop`.
    ///
    /// Fails if `step` is not strictly positive, a bound is not finite, or the
    /// grid would have no points or more than [`MAX_LEN`].
    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self> {
        if !start.is_finite() || !stop.is_finite() {
            return Err(Error::invalid("grid", "bounds must be finite"));
        }
        check_step(step)?;
        let len = ((stop - start) / step).ceil();
        if len.is_nan() || len < 1.0 {
            return Err(Error::invalid(
                "grid",
                format!("range [{start}, {stop}) is empty"),
            ));
        }
        if len > MAX_LEN as f64 {
            return Err(too_long(len));
        }
        Self::with_len(start, step, len as usize)
    }

    /// Creates a grid of exactly `len` points.
    pub fn with_len(start: f64, step: f64, len: usize) -> Result<Self> {
        check_step(step)?;
        if !start.is_finite() {
            return Err(Error::invalid("grid", "start must be finite"));
        }
        if len == 0 {
            return Err(Error::invalid("grid", "grid must contain at least one point"));
        }
        if len > MAX_LEN {
            return Err(too_long(len as f64));
        }
        Ok(Self { start, step, len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a grid holds at least one point.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Time of the `index`-th point. Indices past the end extrapolate.
    pub fn at(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step
    }

    /// Time of the last point.
    pub fn last(&self) -> f64 {
        self.at(self.len - 1)
    }

    /// Point count over covered span: `len / (last - first)`.
    ///
    /// This is slightly above `1 / step` (1000 points over `[0, 9.99]` give
    /// about 100.1 Hz). A single-point grid has no span and uses `1 / step`.
    pub fn sampling_frequency(&self) -> f64 {
        if self.len < 2 {
            return 1.0 / self.step;
        }
        self.len as f64 / (self.last() - self.start)
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> {
        let grid = *self;
        (0..grid.len).map(move |i| grid.at(i))
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }
}

fn check_step(step: f64) -> Result<()> {
    if !step.is_finite() || step <= 0.0 {
        return Err(Error::invalid("grid", format!("step must be positive, got {step}")));
    }
    Ok(())
}

fn too_long(len: f64) -> Error {
    Error::invalid("grid", format!("{len} points exceed the limit of {MAX_LEN}"))
}
