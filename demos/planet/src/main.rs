//! planet — example driver for the planet_forage simulation.
//!
//! Scatters crystals, metals, and heavy structures over a grid, releases a
//! mix of all four agent strategies, and writes the score series, the
//! delivery ledger, and periodic agent snapshots to `output/planet/`.
//!
//! ```text
//! cargo run -p planet                         # built-in defaults
//! cargo run -p planet -- demos/planet/planet.json
//! RUST_LOG=pf_world=debug cargo run -p planet # log every claim and delivery
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;

use pf_behavior::Forager;
use pf_core::{Population, SimConfig, Tick};
use pf_output::{CsvWriter, OutputWriter, SimOutputObserver};
use pf_sim::{ScoreBoard, SimBuilder, SimObserver};
use pf_world::{DeliveryRecord, World};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output/planet";

// ── Run file ──────────────────────────────────────────────────────────────────

/// Contents of the optional JSON run file.  Missing fields fall back to the
/// defaults below.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RunFile {
    config:     SimConfig,
    population: Population,
}

impl Default for RunFile {
    fn default() -> Self {
        Self {
            config: SimConfig {
                total_ticks:           200,
                output_interval_ticks: 10,
                ..SimConfig::default()
            },
            population: Population {
                crystals:    25,
                metals:      10,
                structures:  6,
                reactive:    3,
                state_based: 3,
                goal_based:  3,
                cooperative: 3,
            },
        }
    }
}

fn load_run_file(path: &Path) -> Result<RunFile> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading run file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing run file {}", path.display()))
}

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    score_rows:    usize,
    delivery_rows: usize,
    snapshot_rows: usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, score_rows: 0, delivery_rows: 0, snapshot_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_delivery(&mut self, tick: Tick, record: &DeliveryRecord) {
        self.delivery_rows += 1;
        self.inner.on_delivery(tick, record);
    }

    fn on_tick_end(&mut self, tick: Tick, scores: &ScoreBoard) {
        self.score_rows += 1;
        self.inner.on_tick_end(tick, scores);
    }

    fn on_snapshot(&mut self, tick: Tick, world: &World, agents: &[Forager]) {
        self.snapshot_rows += agents.len();
        self.inner.on_snapshot(tick, world, agents);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // 1. Configuration.
    let run = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => load_run_file(&path)?,
        None => RunFile::default(),
    };
    let RunFile { config, population } = run;
    println!("=== planet — planet_forage ===");
    println!(
        "Grid: {}×{}  |  Ticks: {}  |  Seed: {}  |  Agents: {}",
        config.width,
        config.height,
        config.total_ticks,
        config.seed,
        population.reactive + population.state_based + population.goal_based + population.cooperative,
    );
    println!();

    // 2. Build sim.
    let mut sim = SimBuilder::new(config).population(population).build()?;

    // 3. Set up output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        tracing::error!(error = %e, "output incomplete");
    }

    // 5. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  score_series.csv    : {} rows", obs.score_rows);
    println!("  deliveries.csv      : {} rows", obs.delivery_rows);
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!();

    // 6. Score table.
    println!("{:<14} {:>10} {:>12}", "Archetype", "Board", "Delivered");
    println!("{}", "-".repeat(38));
    for (archetype, total) in sim.scores().iter() {
        let delivered: u64 = sim
            .agents()
            .iter()
            .filter(|a| a.archetype() == archetype)
            .map(|a| a.score())
            .sum();
        println!("{:<14} {:>10} {:>12}", archetype.as_str(), total, delivered);
    }
    println!();
    println!(
        "Base ledger: {} resources, {} utility",
        sim.ledger().len(),
        sim.world().base.utility_total()
    );

    Ok(())
}
