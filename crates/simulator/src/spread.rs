//! Spread sampling and bid/ask synthesis.
//!
//! A spread is either drawn per point as `base * (1 + noise_scale * z)` with
//! `z ~ N(0, 1)` and clipped into `[min_spread, max_spread]`, or held fixed at
//! the base value. Bid and ask sit half a spread either side of the mid.

use rand::Rng;
use rand_distr::StandardNormal;
use spread_core::{BidAskSeries, SpreadConfig};

/// Default base spread.
pub const DEFAULT_BASE_SPREAD: f64 = 0.05;
/// Relative standard deviation of random spreads.
pub const NOISE_SCALE: f64 = 0.2;
/// Lower clip bound for random spreads.
pub const MIN_SPREAD: f64 = 0.01;
/// Upper clip bound for random spreads.
pub const MAX_SPREAD: f64 = 0.20;

/// How spreads are produced for each point of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpreadModel {
    /// Normal noise around `base_spread`, clipped.
    Random {
        base_spread: f64,
        noise_scale: f64,
        min_spread: f64,
        max_spread: f64,
    },
    /// Every spread equals `base_spread`. No clipping.
    Fixed { base_spread: f64 },
}

impl SpreadModel {
    /// Build a model with the standard noise scale and clip bounds.
    pub fn new(base_spread: f64, random_spread: bool) -> Self {
        if random_spread {
            SpreadModel::Random {
                base_spread,
                noise_scale: NOISE_SCALE,
                min_spread: MIN_SPREAD,
                max_spread: MAX_SPREAD,
            }
        } else {
            SpreadModel::Fixed { base_spread }
        }
    }

    /// Build a model from configuration.
    pub fn from_config(config: &SpreadConfig) -> Self {
        if config.random_spread {
            SpreadModel::Random {
                base_spread: config.base_spread,
                noise_scale: config.noise_scale,
                min_spread: config.min_spread,
                max_spread: config.max_spread,
            }
        } else {
            SpreadModel::Fixed {
                base_spread: config.base_spread,
            }
        }
    }

    pub fn base_spread(&self) -> f64 {
        match *self {
            SpreadModel::Random { base_spread, .. } | SpreadModel::Fixed { base_spread } => {
                base_spread
            }
        }
    }

    pub fn is_random(&self) -> bool {
        matches!(self, SpreadModel::Random { .. })
    }

    /// Draw `n` spreads.
    ///
    /// Fixed models never touch `rng`.
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        match *self {
            SpreadModel::Random {
                base_spread,
                noise_scale,
                min_spread,
                max_spread,
            } => (0..n)
                .map(|_| {
                    let z: f64 = rng.sample(StandardNormal);
                    clip(base_spread * (1.0 + noise_scale * z), min_spread, max_spread)
                })
                .collect(),
            SpreadModel::Fixed { base_spread } => vec![base_spread; n],
        }
    }

    /// Synthesize bid/ask around `mid` with freshly drawn spreads.
    pub fn apply<R: Rng + ?Sized>(&self, mid: &[f64], rng: &mut R) -> BidAskSeries {
        let spreads = self.sample(mid.len(), rng);
        apply_spreads(mid, &spreads)
    }
}

/// Saturate `value` into `[lo, hi]`. NaN passes through unchanged.
#[inline]
fn clip(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        return value;
    }
    // f64::clamp panics when lo > hi; bounds here are unchecked
    value.max(lo).min(hi)
}

/// Place bid and ask half a spread below and above each mid.
///
/// Only the first `min(mid.len(), spreads.len())` points are produced.
pub fn apply_spreads(mid: &[f64], spreads: &[f64]) -> BidAskSeries {
    let (bid, ask): (Vec<f64>, Vec<f64>) = mid
        .iter()
        .zip(spreads)
        .map(|(&m, &s)| {
            let half = s / 2.0;
            (m - half, m + half)
        })
        .unzip();

    // Lengths agree: both halves come from one zip.
    BidAskSeries::from_parts(bid, ask).unwrap_or_default()
}

/// Simulate bid and ask prices from a mid-price series.
///
/// With `random_spread` each spread is `base_spread * (1 + 0.2 * z)`,
/// `z ~ N(0, 1)`, clipped to `[0.01, 0.20]`. Otherwise every spread is
/// `base_spread` exactly. No input validation is performed; an empty `mid`
/// yields two empty vectors.
pub fn simulate_bid_ask<R: Rng + ?Sized>(
    mid: &[f64],
    base_spread: f64,
    random_spread: bool,
    rng: &mut R,
) -> (Vec<f64>, Vec<f64>) {
    SpreadModel::new(base_spread, random_spread)
        .apply(mid, rng)
        .into_parts()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_nan_base_spread_propagates() {
        let (bid, ask) = simulate_bid_ask(&[100.0], f64::NAN, true, &mut rng());
        assert!(bid[0].is_nan());
        assert!(ask[0].is_nan());

        let (bid, ask) = simulate_bid_ask(&[100.0], f64::NAN, false, &mut rng());
        assert!(bid[0].is_nan() && ask[0].is_nan());
    }

    #[test]
    fn test_clip() {
        assert_eq!(clip(0.005, MIN_SPREAD, MAX_SPREAD), MIN_SPREAD);
        assert_eq!(clip(0.5, MIN_SPREAD, MAX_SPREAD), MAX_SPREAD);
        assert_eq!(clip(0.05, MIN_SPREAD, MAX_SPREAD), 0.05);
        assert!(clip(f64::NAN, MIN_SPREAD, MAX_SPREAD).is_nan());
        // Inverted bounds saturate at `hi` instead of panicking
        assert_eq!(clip(0.05, 0.3, 0.2), 0.2);
    }

    #[test]
    fn test_default_base_spread_matches_config() {
        assert_eq!(DEFAULT_BASE_SPREAD, SpreadConfig::default().base_spread);
        let model = SpreadModel::from_config(&SpreadConfig::default());
        assert_eq!(model, SpreadModel::new(DEFAULT_BASE_SPREAD, true));
    }

    #[test]
    fn test_fixed_single_point() {
        let (bid, ask) = simulate_bid_ask(&[100.0], 0.05, false, &mut rng());
        assert_abs_diff_eq!(bid[0], 99.975, epsilon = 1e-9);
        assert_abs_diff_eq!(ask[0], 100.025, epsilon = 1e-9);
    }

    #[test]
    fn test_fixed_two_points() {
        let (bid, ask) = simulate_bid_ask(&[100.0, 200.0], 0.10, false, &mut rng());
        assert_abs_diff_eq!(bid[0], 99.95, epsilon = 1e-9);
        assert_abs_diff_eq!(bid[1], 199.95, epsilon = 1e-9);
        assert_abs_diff_eq!(ask[0], 100.05, epsilon = 1e-9);
        assert_abs_diff_eq!(ask[1], 200.05, epsilon = 1e-9);
    }

    #[test]
    fn test_fixed_spread_equals_base() {
        let mid: Vec<f64> = (0..50).map(|i| 100.0 + i as f64 * 0.37).collect();
        let (bid, ask) = simulate_bid_ask(&mid, 0.07, false, &mut rng());
        for i in 0..mid.len() {
            assert_abs_diff_eq!(ask[i] - bid[i], 0.07, epsilon = 1e-9);
            assert_abs_diff_eq!(bid[i], mid[i] - 0.035, epsilon = 1e-12);
            assert_abs_diff_eq!(ask[i], mid[i] + 0.035, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_empty_input() {
        let (bid, ask) = simulate_bid_ask(&[], 0.05, true, &mut rng());
        assert!(bid.is_empty());
        assert!(ask.is_empty());

        let (bid, ask) = simulate_bid_ask(&[], 0.05, false, &mut rng());
        assert!(bid.is_empty());
        assert!(ask.is_empty());
    }

    #[test]
    fn test_lengths_match_input() {
        let mut rng = rng();
        for n in [0usize, 1, 2, 17, 1000] {
            let mid = vec![100.0; n];
            for random in [true, false] {
                let (bid, ask) = simulate_bid_ask(&mid, 0.05, random, &mut rng);
                assert_eq!(bid.len(), n);
                assert_eq!(ask.len(), n);
            }
        }
    }

    #[test]
    fn test_random_spreads_within_bounds() {
        let mid = vec![100.0; 10_000];
        let (bid, ask) = simulate_bid_ask(&mid, 0.05, true, &mut rng());
        for (b, a) in bid.iter().zip(&ask) {
            let spread = a - b;
            assert!(spread >= MIN_SPREAD - 1e-12, "spread {spread} below floor");
            assert!(spread <= MAX_SPREAD + 1e-12, "spread {spread} above cap");
            assert!(a >= b);
        }
    }

    #[test]
    fn test_random_mode_is_random() {
        let spreads = SpreadModel::new(0.05, true).sample(100, &mut rng());
        let first = spreads[0];
        assert!(spreads.iter().any(|s| (s - first).abs() > 1e-12));
    }

    #[test]
    fn test_large_base_saturates_at_cap() {
        // 10.0 * (1 + 0.2z) only drops below 0.20 when z < -4.9
        let spreads = SpreadModel::new(10.0, true).sample(1000, &mut rng());
        assert!(spreads.iter().all(|&s| s == MAX_SPREAD));
    }

    #[test]
    fn test_negative_base_clips_to_floor() {
        // Negative base only exceeds 0.01 when z < -6
        let spreads = SpreadModel::new(-0.05, true).sample(1000, &mut rng());
        assert!(spreads.iter().all(|&s| s == MIN_SPREAD));
    }

    #[test]
    fn test_negative_base_fixed_inverts_quote() {
        let (bid, ask) = simulate_bid_ask(&[100.0], -0.05, false, &mut rng());
        assert!(ask[0] < bid[0]);
        assert_abs_diff_eq!(ask[0] - bid[0], -0.05, epsilon = 1e-9);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let mid = vec![100.0, 101.0, 102.0];
        let a = simulate_bid_ask(&mid, 0.05, true, &mut StdRng::seed_from_u64(7));
        let b = simulate_bid_ask(&mid, 0.05, true, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_fixed_mode_does_not_consume_rng() {
        let mut used = rng();
        let _ = SpreadModel::new(0.05, false).sample(10, &mut used);
        let mut fresh = rng();
        let a: f64 = used.sample(StandardNormal);
        let b: f64 = fresh.sample(StandardNormal);
        assert_eq!(a, b);
    }

    #[test]
    fn test_apply_spreads_truncates_to_shorter() {
        let series = apply_spreads(&[100.0, 101.0, 102.0], &[0.02, 0.04]);
        assert_eq!(series.len(), 2);
        assert_abs_diff_eq!(series.bid()[1], 100.98, epsilon = 1e-9);
        assert_abs_diff_eq!(series.ask()[1], 101.02, epsilon = 1e-9);
    }

    #[test]
    fn test_from_config() {
        let config = SpreadConfig {
            base_spread: 0.1,
            random_spread: true,
            noise_scale: 0.0,
            min_spread: 0.01,
            max_spread: 0.5,
            seed: None,
        };
        let model = SpreadModel::from_config(&config);
        assert!(model.is_random());
        // Zero noise collapses to the base spread
        let spreads = model.sample(5, &mut rng());
        for s in spreads {
            assert_abs_diff_eq!(s, 0.1, epsilon = 1e-12);
        }
    }
}
