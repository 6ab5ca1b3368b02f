use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use spread_core::{Config, Quote, TimestampMs};
use spread_simulator::{RandomWalk, SpreadSimulator, SpreadSummary};

/// Mids used when neither `--mid` nor `--walk` is given.
pub(crate) const DEFAULT_MIDS: [f64; 3] = [100.0, 101.0, 102.0];

#[derive(Debug, Parser)]
#[clap(name = "spread-sim", version)]
pub struct Cli {
    /// Mid prices (comma-separated)
    #[clap(long, value_delimiter = ',', conflicts_with = "walk")]
    pub mid: Vec<f64>,

    /// Generate this many mids with a random walk instead of passing --mid
    #[clap(long)]
    pub walk: Option<usize>,

    /// JSON config file
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Base spread, overrides the config
    #[clap(long, allow_hyphen_values = true)]
    pub base_spread: Option<f64>,

    /// Use the base spread verbatim instead of drawing random spreads
    #[clap(long)]
    pub fixed: bool,

    /// RNG seed for both the spread draws and the walk
    #[clap(long)]
    pub seed: Option<u64>,

    /// Walk start timestamp (ms since epoch); defaults to now
    #[clap(long)]
    pub start_ts: Option<TimestampMs>,

    /// Emit JSON instead of text
    #[clap(long)]
    pub json: bool,
}

/// Simulation output, as printed.
#[derive(Debug, Serialize)]
pub(crate) struct Report {
    pub quotes: Vec<Quote>,
    pub summary: Option<SpreadSummary>,
}

/// Load the config file (if any) and layer CLI overrides on top.
pub(crate) fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(base_spread) = cli.base_spread {
        config.spread.base_spread = base_spread;
    }
    if cli.fixed {
        config.spread.random_spread = false;
    }
    if let Some(seed) = cli.seed {
        config.spread.seed = Some(seed);
        // Offset so the walk and the spreads don't share a stream
        config.walk.seed = Some(seed.wrapping_add(1));
    }

    config.validate()?;
    Ok(config)
}

/// Resolve the mid series and optional timestamps.
pub(crate) fn build_mids(
    cli: &Cli,
    config: &Config,
) -> Result<(Vec<f64>, Option<Vec<TimestampMs>>)> {
    let mids = if let Some(n) = cli.walk {
        let mut walk = RandomWalk::new(&config.walk);
        let start_ts = cli
            .start_ts
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());
        let timestamps = walk
            .timestamps(n, start_ts)
            .with_context(|| format!("walk of {n} points from --start-ts {start_ts}"))?;
        (walk.generate(n), Some(timestamps))
    } else if !cli.mid.is_empty() {
        (cli.mid.clone(), None)
    } else {
        (DEFAULT_MIDS.to_vec(), None)
    };
    Ok(mids)
}

/// Run one simulation end to end.
pub(crate) fn run(cli: &Cli) -> Result<Report> {
    let config = build_config(cli)?;
    let (mids, timestamps) = build_mids(cli, &config)?;

    let mut simulator = SpreadSimulator::new(&config.spread);
    let (series, summary) = simulator.simulate_with_summary(&mids);

    let quotes: Vec<Quote> = match &timestamps {
        Some(ts) => series.timed_quotes(ts).collect(),
        None => series.quotes().collect(),
    };

    tracing::info!(
        points = quotes.len(),
        random = config.spread.random_spread,
        base_spread = config.spread.base_spread,
        "simulation complete"
    );

    Ok(Report { quotes, summary })
}

/// Render a report as text lines.
pub(crate) fn render_text(report: &Report) -> String {
    let mut out = String::new();
    for (i, q) in report.quotes.iter().enumerate() {
        let time = q
            .time()
            .map(|t| format!("{} ", t.format("%Y-%m-%dT%H:%M:%S%.3fZ")))
            .unwrap_or_default();
        out.push_str(&format!(
            "{i:>5} {time}bid={:.5} mid={:.5} ask={:.5} spread={:.5}\n",
            q.bid_px,
            q.mid(),
            q.ask_px,
            q.spread()
        ));
    }
    if let Some(s) = &report.summary {
        out.push_str(&format!(
            "spread: n={} mean={:.5} std={:.5} min={:.5} p50={:.5} p95={:.5} max={:.5}\n",
            s.count, s.mean, s.std_dev, s.min, s.p50, s.p95, s.max
        ));
    }
    out
}
