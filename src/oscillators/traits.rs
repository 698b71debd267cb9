//! Core trait definitions for oscillators.

/// Common interface for all oscillators.
///
/// This trait defines oscillator-specific functionality:
/// frequency control and state management.
pub trait Oscillator {
    /// Sets the frequency of the oscillator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - New frequency in cycles per unit time
    fn set_frequency(&mut self, frequency: f64);

    /// Gets the current frequency of the oscillator.
    fn frequency(&self) -> f64;

    /// Rewinds the oscillator to the first point of its time axis.
    fn reset(&mut self);
}
