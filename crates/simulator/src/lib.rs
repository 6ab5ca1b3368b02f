//! Synthetic bid/ask generation for the spread simulator.
//!
//! This crate handles:
//! - Spread sampling (random around a base, or fixed)
//! - Bid/ask synthesis from a mid-price series
//! - Seeded simulator state
//! - Mid-price random walks
//! - Spread summary statistics

pub mod simulator;
pub mod spread;
pub mod stats;
pub mod walk;

pub use simulator::SpreadSimulator;
pub use spread::{apply_spreads, simulate_bid_ask, SpreadModel, DEFAULT_BASE_SPREAD};
pub use stats::SpreadSummary;
pub use walk::{round_to_tick, RandomWalk};
