//! Summary statistics over simulated spreads.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use spread_core::BidAskSeries;
use statrs::statistics::Statistics;

/// Distribution summary of `ask - bid` across a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadSummary {
    /// Number of points.
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (0 for a single point).
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// Median (nearest rank).
    pub p50: f64,
    /// 95th percentile (nearest rank).
    pub p95: f64,
}

impl SpreadSummary {
    /// Summarize the spreads of a series. Returns `None` when empty.
    pub fn from_series(series: &BidAskSeries) -> Option<Self> {
        Self::from_spreads(&series.spreads())
    }

    /// Summarize raw spread values. Returns `None` when empty.
    pub fn from_spreads(spreads: &[f64]) -> Option<Self> {
        let count = spreads.len();
        if count == 0 {
            return None;
        }

        let std_dev = if count > 1 {
            Statistics::std_dev(spreads)
        } else {
            0.0
        };

        let mut sorted: Vec<OrderedFloat<f64>> =
            spreads.iter().copied().map(OrderedFloat).collect();
        sorted.sort_unstable();

        Some(Self {
            count,
            mean: Statistics::mean(spreads),
            std_dev,
            min: Statistics::min(spreads),
            max: Statistics::max(spreads),
            p50: nearest_rank(&sorted, 0.50),
            p95: nearest_rank(&sorted, 0.95),
        })
    }
}

/// Nearest-rank percentile over an ascending, non-empty slice.
fn nearest_rank(sorted: &[OrderedFloat<f64>], pct: f64) -> f64 {
    let rank = (pct * sorted.len() as f64).ceil() as usize;
    let idx = rank.clamp(1, sorted.len()) - 1;
    sorted[idx].into_inner()
}
