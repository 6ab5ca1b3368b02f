//! Core types and configuration for the spread simulator.
//!
//! This crate provides shared types used across all other crates:
//! - Quote and bid/ask series types
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, SpreadConfig, WalkConfig};
pub use error::{Error, Result};
pub use types::*;
