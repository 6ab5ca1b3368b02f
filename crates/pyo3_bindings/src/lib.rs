//! PyO3 bindings for the spread simulator.
//!
//! Exposes to Python:
//! - `simulate_bid_ask` with the familiar keyword defaults
//! - A seeded `SpreadSimulator` class
//! - Spread summary statistics

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use spread_core::{Config as RustConfig, SpreadConfig};
use spread_simulator::{
    SpreadSimulator as RustSpreadSimulator, SpreadSummary as RustSpreadSummary,
    DEFAULT_BASE_SPREAD,
};

/// Collect any iterable of numbers (list, tuple, numpy array, generator) into `f64`s.
fn extract_prices(obj: &Bound<'_, PyAny>) -> PyResult<Vec<f64>> {
    obj.iter()?
        .map(|item| item?.extract::<f64>())
        .collect()
}

// ============================================================================
// Python-exposed Types
// ============================================================================

/// Distribution summary of simulated spreads.
#[pyclass]
#[derive(Clone)]
pub struct SpreadSummary {
    #[pyo3(get)]
    pub count: usize,
    #[pyo3(get)]
    pub mean: f64,
    #[pyo3(get)]
    pub std_dev: f64,
    #[pyo3(get)]
    pub min: f64,
    #[pyo3(get)]
    pub max: f64,
    #[pyo3(get)]
    pub p50: f64,
    #[pyo3(get)]
    pub p95: f64,
}

#[pymethods]
impl SpreadSummary {
    fn __repr__(&self) -> String {
        format!(
            "SpreadSummary(count={}, mean={:.5}, std_dev={:.5}, min={:.5}, max={:.5})",
            self.count, self.mean, self.std_dev, self.min, self.max
        )
    }
}

impl From<RustSpreadSummary> for SpreadSummary {
    fn from(s: RustSpreadSummary) -> Self {
        SpreadSummary {
            count: s.count,
            mean: s.mean,
            std_dev: s.std_dev,
            min: s.min,
            max: s.max,
            p50: s.p50,
            p95: s.p95,
        }
    }
}

// ============================================================================
// Python-exposed Engine Classes
// ============================================================================

/// Spread simulator with its own random stream.
#[pyclass(name = "SpreadSimulator")]
pub struct PySpreadSimulator {
    inner: RustSpreadSimulator,
}

#[pymethods]
impl PySpreadSimulator {
    #[new]
    #[pyo3(signature = (base_spread=DEFAULT_BASE_SPREAD, random_spread=true, seed=None))]
    fn new(base_spread: f64, random_spread: bool, seed: Option<u64>) -> Self {
        let config = SpreadConfig {
            base_spread,
            random_spread,
            seed,
            ..Default::default()
        };
        PySpreadSimulator {
            inner: RustSpreadSimulator::new(&config),
        }
    }

    /// Create from a JSON config document.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let config =
            RustConfig::from_json_str(json).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PySpreadSimulator {
            inner: RustSpreadSimulator::new(&config.spread),
        })
    }

    /// Simulate bid/ask for a mid-price series.
    fn simulate(&mut self, mid_price: &Bound<'_, PyAny>) -> PyResult<(Vec<f64>, Vec<f64>)> {
        let mids = extract_prices(mid_price)?;
        Ok(self.inner.simulate(&mids).into_parts())
    }

    /// Simulate and summarize spreads. `None` for empty input.
    fn summary(&mut self, mid_price: &Bound<'_, PyAny>) -> PyResult<Option<SpreadSummary>> {
        let mids = extract_prices(mid_price)?;
        let (_, summary) = self.inner.simulate_with_summary(&mids);
        Ok(summary.map(|s| s.into()))
    }

    #[getter]
    fn base_spread(&self) -> f64 {
        self.inner.model().base_spread()
    }

    #[getter]
    fn random_spread(&self) -> bool {
        self.inner.model().is_random()
    }

    fn __repr__(&self) -> String {
        format!(
            "SpreadSimulator(base_spread={}, random_spread={}, runs={})",
            self.base_spread(),
            self.random_spread(),
            self.inner.runs()
        )
    }

    /// Restart the random stream from `seed`.
    fn reseed(&mut self, seed: u64) {
        self.inner.reseed(seed);
    }

    /// Number of simulations run.
    fn runs(&self) -> u64 {
        self.inner.runs()
    }
}

// ============================================================================
// Functions
// ============================================================================

/// Simulate bid and ask prices around a mid-price series.
///
/// `mid_price` may be any iterable of numbers, including a numpy array.
/// Returns `(bid, ask)` lists. Pass `seed` for reproducible random spreads.
#[pyfunction]
#[pyo3(signature = (mid_price, base_spread=DEFAULT_BASE_SPREAD, random_spread=true, seed=None))]
fn simulate_bid_ask(
    mid_price: &Bound<'_, PyAny>,
    base_spread: f64,
    random_spread: bool,
    seed: Option<u64>,
) -> PyResult<(Vec<f64>, Vec<f64>)> {
    let mids = extract_prices(mid_price)?;
    let config = SpreadConfig {
        base_spread,
        random_spread,
        seed,
        ..Default::default()
    };
    Ok(RustSpreadSimulator::new(&config).simulate(&mids).into_parts())
}

// ============================================================================
// Module Definition
// ============================================================================

/// Spread Sim - synthetic bid/ask generation from Rust.
#[pymodule]
fn spread_sim(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Types
    m.add_class::<SpreadSummary>()?;

    // Engine classes
    m.add_class::<PySpreadSimulator>()?;

    // Functions
    m.add_function(wrap_pyfunction!(simulate_bid_ask, m)?)?;

    Ok(())
}
