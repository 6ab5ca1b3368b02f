//! Configuration structures for the spread simulator.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration for the simulator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Spread model configuration.
    pub spread: SpreadConfig,
    /// Mid-price random walk configuration.
    pub walk: WalkConfig,
}

impl Config {
    /// Parse a configuration from a JSON string.
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            tracing::warn!(error = %e, "rejected config");
            return Err(e);
        }
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Self::from_json_str(&json)
    }

    /// Validate all sections.
    pub fn validate(&self) -> Result<()> {
        self.spread.validate()?;
        self.walk.validate()
    }
}

/// Spread model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpreadConfig {
    /// Base spread around which random spreads are drawn (absolute price units).
    pub base_spread: f64,
    /// Draw a random spread per point instead of using `base_spread` verbatim.
    pub random_spread: bool,
    /// Relative standard deviation of the spread noise.
    pub noise_scale: f64,
    /// Lower clip bound for random spreads.
    pub min_spread: f64,
    /// Upper clip bound for random spreads.
    pub max_spread: f64,
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SpreadConfig {
    fn default() -> Self {
        Self {
            base_spread: 0.05,
            random_spread: true,
            noise_scale: 0.2,
            min_spread: 0.01,
            max_spread: 0.20,
            seed: None,
        }
    }
}

impl SpreadConfig {
    /// Check the clip bounds and noise scale.
    ///
    /// `base_spread` is accepted as-is, including zero and negative values.
    pub fn validate(&self) -> Result<()> {
        if !self.min_spread.is_finite() || !self.max_spread.is_finite() {
            return Err(Error::config(format!(
                "spread bounds must be finite (min={}, max={})",
                self.min_spread, self.max_spread
            )));
        }
        if self.min_spread > self.max_spread {
            return Err(Error::config(format!(
                "min_spread {} exceeds max_spread {}",
                self.min_spread, self.max_spread
            )));
        }
        if !self.noise_scale.is_finite() || self.noise_scale < 0.0 {
            return Err(Error::config(format!(
                "noise_scale must be finite and non-negative, got {}",
                self.noise_scale
            )));
        }
        Ok(())
    }
}

/// Mid-price random walk configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Starting mid price.
    pub start_price: f64,
    /// Tick size (minimum price increment).
    pub tick_size: f64,
    /// Largest move per step, in ticks.
    pub max_step_ticks: u32,
    /// Spacing between consecutive points (ms).
    pub interval_ms: i64,
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            start_price: 100.0,
            tick_size: 0.01,
            max_step_ticks: 2,
            interval_ms: 1000,
            seed: None,
        }
    }
}

impl WalkConfig {
    /// Check the tick size and interval.
    pub fn validate(&self) -> Result<()> {
        if !self.tick_size.is_finite() || self.tick_size <= 0.0 {
            return Err(Error::config(format!(
                "tick_size must be finite and positive, got {}",
                self.tick_size
            )));
        }
        if !self.start_price.is_finite() {
            return Err(Error::config("start_price must be finite"));
        }
        if self.interval_ms < 0 {
            return Err(Error::config(format!(
                "interval_ms must be non-negative, got {}",
                self.interval_ms
            )));
        }
        Ok(())
    }
}
