//! baseline: the three-depot reference run of the drt auction simulator.
//!
//! ```text
//! baseline [CONFIG.json] [--orders ORDERS.csv] [--csv OUT_DIR]
//! ```
//!
//! - `CONFIG.json`: `{ "sim": {...}, "scenario": {...} }`; every field is
//!   optional and defaults to the reference scenario (3 depots, 4 shared
//!   vehicles, 9 initial orders, injections at ticks 3 and 6, horizon 10).
//! - `--orders`: replay a recorded order stream instead of random orders.
//! - `--csv`: also write `tick_summaries.csv`, `assignments.csv` and
//!   `shared_snapshots.csv` into `OUT_DIR`.
//!
//! Stdout carries only the per-tick lines and the `SIM DONE` summary;
//! diagnostics go to stderr through `tracing` (`RUST_LOG=debug` for more).

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Deserialize;

use drt_auction::GreedyLocalFirst;
use drt_core::{SimConfig, Tick};
use drt_fleet::FleetState;
use drt_output::{ConsoleReporter, CsvWriter, OutputWriter, SimOutputObserver};
use drt_scenario::{ReplayInjector, Scenario, ScenarioConfig, build_fleet, load_orders_csv};
use drt_sim::{Metrics, SimBuilder, SimObserver, TickReport};

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RunConfig {
    sim:      SimConfig,
    scenario: ScenarioConfig,
}

/// Three-depot DRT auction simulation.
#[derive(Parser, Debug)]
#[command(name = "baseline")]
#[command(version)]
struct Args {
    /// JSON run configuration; defaults to the reference scenario
    config: Option<PathBuf>,

    /// Replay a recorded order stream instead of random orders
    #[arg(long)]
    orders: Option<PathBuf>,

    /// Also write CSV output into this directory
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn load_config(path: Option<&Path>) -> Result<RunConfig> {
    let Some(path) = path else {
        return Ok(RunConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Console lines always; CSV files when `--csv` is given.
struct RunObserver<C: Write, W: OutputWriter> {
    console: ConsoleReporter<C>,
    files:   Option<SimOutputObserver<W>>,
}

impl<C: Write, W: OutputWriter> SimObserver for RunObserver<C, W> {
    fn on_tick_end(&mut self, report: &TickReport) {
        if !report.double_booked.is_empty() {
            tracing::info!(
                tick = report.tick.0,
                vehicles = report.double_booked.len(),
                "shared vehicles double-booked this tick"
            );
        }
        self.console.on_tick_end(report);
        if let Some(f) = self.files.as_mut() {
            f.on_tick_end(report);
        }
    }

    fn on_snapshot(&mut self, tick: Tick, fleet: &FleetState) {
        if let Some(f) = self.files.as_mut() {
            f.on_snapshot(tick, fleet);
        }
    }

    fn on_sim_end(&mut self, metrics: &Metrics) {
        self.console.on_sim_end(metrics);
        if let Some(f) = self.files.as_mut() {
            f.on_sim_end(metrics);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    // 1. Configuration.
    let args = Args::parse();
    let RunConfig { sim: config, scenario } = load_config(args.config.as_deref())?;
    scenario.validate()?;
    for late in scenario.injections_after(config.end_tick()) {
        tracing::warn!(
            tick = late.tick,
            count = late.count,
            horizon = config.total_ticks,
            "injection at or past the horizon will never fire"
        );
    }

    #[cfg(feature = "parallel")]
    {
        if let Some(n) = config.num_threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build_global()
                .context("building the Rayon thread pool")?;
        }
    }

    // 2. Fleet and order stream, then the sim.
    let builder = match &args.orders {
        Some(path) => {
            let records = load_orders_csv(path)
                .with_context(|| format!("loading orders from {}", path.display()))?;
            tracing::info!(orders = records.len(), path = %path.display(), "replaying order stream");
            SimBuilder::new(config.clone(), build_fleet(&scenario)?, GreedyLocalFirst)
                .order_source(ReplayInjector::new(records))
        }
        None => {
            let generated = Scenario::generate(&scenario, config.seed)?;
            tracing::info!(
                initial = generated.fleet.orders().len(),
                scheduled = generated.injector.schedule().total(),
                "generated random order stream"
            );
            SimBuilder::new(config.clone(), generated.fleet, GreedyLocalFirst)
                .order_source(generated.injector)
        }
    };
    let mut sim = builder.build()?;
    tracing::info!(
        depots = sim.fleet.depot_count(),
        shared_vehicles = sim.fleet.shared_vehicles().len(),
        ticks = config.total_ticks,
        seed = config.seed,
        "starting run"
    );

    // 3. Output.
    let files = match &args.csv {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Some(SimOutputObserver::new(CsvWriter::new(dir)?))
        }
        None => None,
    };
    let mut obs = RunObserver { console: ConsoleReporter::new(io::stdout().lock()), files };

    // 4. Run.
    sim.run(&mut obs)?;

    if let Some(e) = obs.console.take_error() {
        bail!("writing to stdout: {e}");
    }
    if let Some(e) = obs.files.as_mut().and_then(SimOutputObserver::take_error) {
        bail!("writing CSV output: {e}");
    }
    if sim.fleet.pending_count() > 0 {
        tracing::info!(pending = sim.fleet.pending_count(), "orders left without a vehicle");
    }
    Ok(())
}
