//! Signal processing types and traits.
//!
//! This module provides the core abstractions used throughout the library:
//! - `Signal` trait for all signal sources and processors
//! - `TimeGrid` for the fixed-step time axis every stage shares
//! - `ConstantSignal` and `Samples` as trivial sources

mod core;
mod grid;

pub use core::{ConstantSignal, Samples, Signal};
pub use grid::{MAX_LEN, TimeGrid};
