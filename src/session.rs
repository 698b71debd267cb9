//! Interactive session state.
//!
//! A `Session` is what a UI adapter keeps between interactions: the grid, the
//! current parameters, the filter choice and the noise cache. Each session
//! owns its own cache, so independent sessions never share noise.

use crate::pipeline::{FilterKind, Frame, NoiseSource, SignalParams, recompute};
use crate::{NoiseCache, Result, TimeGrid};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Whether noise survives between updates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoisePolicy {
    /// Reuse the previous noise while its length and distribution are unchanged.
    #[default]
    Memoized,
    /// Draw new noise on every update.
    Fresh,
}

pub struct Session<R: Rng = rand::rngs::ThreadRng> {
    grid: TimeGrid,
    initial_params: SignalParams,
    initial_filter: FilterKind,
    params: SignalParams,
    filter: FilterKind,
    policy: NoisePolicy,
    cache: NoiseCache<R>,
}

impl Session<rand::rngs::ThreadRng> {
    /// Creates a session drawing noise from `ThreadRng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use harmonic_filter::{FilterKind, Session, SignalParams, TimeGrid};
    ///
    /// let grid = TimeGrid::new(0.0, 10.0, 0.01).unwrap();
    /// let mut session = Session::new(grid, SignalParams::default(), FilterKind::default());
    /// let frame = session.frame().unwrap();
    /// assert_eq!(frame.len(), 1000);
    /// ```
    pub fn new(grid: TimeGrid, params: SignalParams, filter: FilterKind) -> Self {
        Self::with_rng(grid, params, filter, rand::thread_rng())
    }
}

impl<R: Rng> Session<R> {
    /// Creates a session with a custom RNG. `params` and `filter` are also
    /// the values `reset` returns to.
    pub fn with_rng(grid: TimeGrid, params: SignalParams, filter: FilterKind, rng: R) -> Self {
        Self {
            grid,
            initial_params: params,
            initial_filter: filter,
            params,
            filter,
            policy: NoisePolicy::default(),
            cache: NoiseCache::with_rng(rng),
        }
    }

    pub fn with_noise_policy(mut self, policy: NoisePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn params(&self) -> &SignalParams {
        &self.params
    }

    pub fn filter(&self) -> &FilterKind {
        &self.filter
    }

    pub fn noise_policy(&self) -> NoisePolicy {
        self.policy
    }

    pub fn update(&mut self, params: SignalParams) {
        self.params = params;
    }

    pub fn set_filter(&mut self, filter: FilterKind) {
        self.filter = filter;
    }

    pub fn set_noise_policy(&mut self, policy: NoisePolicy) {
        self.policy = policy;
    }

    /// Recomputes the frame for the current state.
    pub fn frame(&mut self) -> Result<Frame> {
        if self.policy == NoisePolicy::Fresh {
            self.cache.reset();
        }
        recompute(
            &self.grid,
            &self.params,
            &self.filter,
            NoiseSource::Cached(&mut self.cache),
        )
    }

    /// Recomputes the frame using `noise` instead of the session's generator.
    pub fn frame_with_noise(&self, noise: &[f64]) -> Result<Frame> {
        recompute::<R>(
            &self.grid,
            &self.params,
            &self.filter,
            NoiseSource::Explicit(noise),
        )
    }

    /// Restores the initial parameters and filter and drops cached noise.
    pub fn reset(&mut self) {
        self.params = self.initial_params;
        self.filter = self.initial_filter;
        self.cache.reset();
        log::info!("session reset to initial parameters");
    }
}
