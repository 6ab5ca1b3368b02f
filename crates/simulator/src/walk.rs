//! Mid-price random walk.
//!
//! Each step moves the mid by a whole number of ticks drawn uniformly from
//! `[-max_step_ticks, max_step_ticks]`, keeping the price on the tick grid.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spread_core::{Error, Result, TimestampMs, WalkConfig};

/// Round a price to the nearest tick, halves away from zero.
#[inline]
pub fn round_to_tick(price: f64, tick_size: f64) -> f64 {
    (price / tick_size).round() * tick_size
}

/// Tick-grid random walk generator.
pub struct RandomWalk {
    /// Current mid price.
    mid: f64,
    tick_size: f64,
    max_step_ticks: i64,
    interval_ms: i64,
    rng: StdRng,
}

impl RandomWalk {
    /// Create a walk from configuration.
    pub fn new(config: &WalkConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            mid: round_to_tick(config.start_price, config.tick_size),
            tick_size: config.tick_size,
            max_step_ticks: i64::from(config.max_step_ticks),
            interval_ms: config.interval_ms,
            rng,
        }
    }

    /// Current mid price.
    pub fn mid(&self) -> f64 {
        self.mid
    }

    /// Advance one step and return the new mid.
    pub fn next_mid(&mut self) -> f64 {
        let ticks = if self.max_step_ticks > 0 {
            self.rng.gen_range(-self.max_step_ticks..=self.max_step_ticks)
        } else {
            0
        };
        self.mid = round_to_tick(self.mid + ticks as f64 * self.tick_size, self.tick_size);
        self.mid
    }

    /// Generate the next `n` mids.
    pub fn generate(&mut self, n: usize) -> Vec<f64> {
        let mids: Vec<f64> = (0..n).map(|_| self.next_mid()).collect();
        tracing::debug!(points = n, last_mid = self.mid, "generated random walk");
        mids
    }

    /// Timestamps for `n` points starting at `start_ts_ms`.
    ///
    /// Fails if any timestamp would overflow `i64`.
    pub fn timestamps(&self, n: usize, start_ts_ms: TimestampMs) -> Result<Vec<TimestampMs>> {
        let overflow = || {
            Error::data(format!(
                "timestamps overflow: start={start_ts_ms} interval_ms={} points={n}",
                self.interval_ms
            ))
        };
        let count = i64::try_from(n).map_err(|_| overflow())?;
        (0..count)
            .map(|i| {
                i.checked_mul(self.interval_ms)
                    .and_then(|offset| start_ts_ms.checked_add(offset))
                    .ok_or_else(|| overflow())
            })
            .collect()
    }
}

impl Iterator for RandomWalk {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_mid())
    }
}
