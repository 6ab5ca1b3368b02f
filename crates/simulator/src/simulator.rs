//! Stateful spread simulator.
//!
//! Owns its random generator so repeated calls advance a private stream
//! instead of a process-wide one.

use rand::rngs::StdRng;
use rand::SeedableRng;
use spread_core::{BidAskSeries, SpreadConfig};

use crate::spread::SpreadModel;
use crate::stats::SpreadSummary;

/// Spread simulator with its own RNG.
pub struct SpreadSimulator {
    model: SpreadModel,
    rng: StdRng,
    /// Number of `simulate` calls so far.
    runs: u64,
}

impl SpreadSimulator {
    /// Create a simulator from configuration.
    ///
    /// Seeds from `config.seed` when present, otherwise from OS entropy.
    pub fn new(config: &SpreadConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(SpreadModel::from_config(config), rng)
    }

    /// Create a simulator with the standard model and a fixed seed.
    pub fn with_seed(base_spread: f64, random_spread: bool, seed: u64) -> Self {
        Self::with_rng(
            SpreadModel::new(base_spread, random_spread),
            StdRng::seed_from_u64(seed),
        )
    }

    /// Create a simulator from an explicit model and generator.
    pub fn with_rng(model: SpreadModel, rng: StdRng) -> Self {
        Self { model, rng, runs: 0 }
    }

    /// Simulate bid/ask for a mid-price series.
    pub fn simulate(&mut self, mid: &[f64]) -> BidAskSeries {
        self.runs += 1;
        tracing::debug!(
            run = self.runs,
            points = mid.len(),
            random = self.model.is_random(),
            base_spread = self.model.base_spread(),
            "simulating bid/ask"
        );
        self.model.apply(mid, &mut self.rng)
    }

    /// Simulate and summarize the resulting spreads in one step.
    pub fn simulate_with_summary(&mut self, mid: &[f64]) -> (BidAskSeries, Option<SpreadSummary>) {
        let series = self.simulate(mid);
        let summary = SpreadSummary::from_series(&series);
        (series, summary)
    }

    /// Restart the generator from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn model(&self) -> &SpreadModel {
        &self.model
    }

    /// Get the number of simulations run.
    pub fn runs(&self) -> u64 {
        self.runs
    }
}
