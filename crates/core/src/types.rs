//! Core data types for the spread simulator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Timestamp in milliseconds since Unix epoch (UTC).
pub type TimestampMs = i64;

/// A single synthetic bid/ask quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Timestamp in milliseconds, if the series is timed.
    pub ts_ms: Option<TimestampMs>,
    /// Bid price.
    pub bid_px: f64,
    /// Ask price.
    pub ask_px: f64,
}

impl Quote {
    /// Calculate mid price.
    #[inline]
    pub fn mid(&self) -> f64 {
        (self.bid_px + self.ask_px) / 2.0
    }

    /// Calculate spread.
    #[inline]
    pub fn spread(&self) -> f64 {
        self.ask_px - self.bid_px
    }

    /// Quote time as a UTC datetime.
    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.ts_ms.and_then(DateTime::from_timestamp_millis)
    }
}

/// Parallel bid and ask series produced by one simulation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BidAskSeries {
    bid: Vec<f64>,
    ask: Vec<f64>,
}

impl BidAskSeries {
    /// Build a series from parallel bid and ask vectors.
    pub fn from_parts(bid: Vec<f64>, ask: Vec<f64>) -> Result<Self> {
        if bid.len() != ask.len() {
            return Err(Error::data(format!(
                "bid/ask length mismatch: {} vs {}",
                bid.len(),
                ask.len()
            )));
        }
        Ok(Self { bid, ask })
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.bid.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bid.is_empty()
    }

    pub fn bid(&self) -> &[f64] {
        &self.bid
    }

    pub fn ask(&self) -> &[f64] {
        &self.ask
    }

    /// Per-point spread (`ask - bid`).
    pub fn spreads(&self) -> Vec<f64> {
        self.bid
            .iter()
            .zip(&self.ask)
            .map(|(bid, ask)| ask - bid)
            .collect()
    }

    /// Quote at index `i`, untimed.
    pub fn quote(&self, i: usize) -> Option<Quote> {
        Some(Quote {
            ts_ms: None,
            bid_px: *self.bid.get(i)?,
            ask_px: *self.ask.get(i)?,
        })
    }

    /// Iterate over untimed quotes in order.
    pub fn quotes(&self) -> impl Iterator<Item = Quote> + '_ {
        self.bid.iter().zip(&self.ask).map(|(&bid_px, &ask_px)| Quote {
            ts_ms: None,
            bid_px,
            ask_px,
        })
    }

    /// Pair each quote with a timestamp. Extra timestamps are ignored.
    pub fn timed_quotes<'a>(
        &'a self,
        timestamps: &'a [TimestampMs],
    ) -> impl Iterator<Item = Quote> + 'a {
        self.quotes().zip(timestamps).map(|(mut q, &ts)| {
            q.ts_ms = Some(ts);
            q
        })
    }

    /// Consume the series, returning `(bid, ask)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.bid, self.ask)
    }
}
