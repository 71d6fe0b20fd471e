//! port_day — run one day of bunker barge operations and write the
//! per-minute trajectory.
//!
//! Without `--instance` the embedded sample port is used: three barges
//! serving eight vessels along a 3.7 km quay with the default tide, flow
//! rate, and setup times.
//!
//! ```text
//! port_day --policy random --trials 5 --seed 7 --format csv --output out/
//! RUST_LOG=bk_state=debug port_day
//! ```

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bk_model::{Instance, load_instance_json, load_instance_reader};
use bk_output::{CsvWriter, JsonWriter, OutputWriter, SimOutputObserver, write_history};
use bk_policy::PolicyKind;
use bk_sim::{SimBuilder, SimConfig, median_trial, run_trials};
use bk_state::SimulationState;

// ── Sample instance ───────────────────────────────────────────────────────────

// Port constants are omitted and take their defaults.  `name` is ignored.
const SAMPLE_INSTANCE: &str = r#"{
  "vessels": [
    { "id": 1, "name": "Aurora",    "arrival_time": 0,   "departure_time": 420,  "fuel_demand": 900,  "point": 3 },
    { "id": 2, "name": "Borealis",  "arrival_time": 30,  "departure_time": 600,  "fuel_demand": 1500, "point": 8 },
    { "id": 3, "name": "Cassiopea", "arrival_time": 90,  "departure_time": 360,  "fuel_demand": 400,  "point": 5 },
    { "id": 4, "name": "Dorado",    "arrival_time": 180, "departure_time": 780,  "fuel_demand": 2200, "point": 10 },
    { "id": 5, "name": "Eridanus",  "arrival_time": 240, "departure_time": 540,  "fuel_demand": 650,  "point": 1 },
    { "id": 6, "name": "Fornax",    "arrival_time": 360, "departure_time": 1020, "fuel_demand": 1800, "point": 6 },
    { "id": 7, "name": "Grus",      "arrival_time": 600, "departure_time": 900,  "fuel_demand": 300,  "point": 9 },
    { "id": 8, "name": "Hydra",     "arrival_time": 720, "departure_time": 1380, "fuel_demand": 2500, "point": 4 }
  ],
  "barges": [
    { "id": 1, "fuel_capacity": 3000 },
    { "id": 2, "fuel_capacity": 2000 },
    { "id": 3, "fuel_capacity": 1500, "base_move_speed_knots": 5 }
  ]
}"#;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Csv,
}

/// Bunker barge port simulation
#[derive(Parser, Debug)]
#[command(name = "port_day", about = "Simulate barges refuelling moored vessels minute by minute")]
struct Args {
    /// Instance JSON file; the embedded sample port when omitted
    #[arg(short, long)]
    instance: Option<PathBuf>,

    /// Assignment policy: greedy or random
    #[arg(short, long, default_value_t = PolicyKind::Greedy)]
    policy: PolicyKind,

    /// Base seed for the random policy
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Random trials to run; the median one is written
    #[arg(short, long, default_value_t = SimConfig::DEFAULT_TRIALS)]
    trials: u64,

    /// Write every N-th minute
    #[arg(long, default_value_t = 1)]
    interval: u64,

    /// Output directory
    #[arg(short, long, default_value = "output/port_day")]
    output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

impl Args {
    fn sim_config(&self) -> SimConfig {
        SimConfig {
            policy:            self.policy,
            seed:              self.seed,
            trials:            self.trials,
            snapshot_interval: self.interval,
        }
    }
}

// ── Runs ──────────────────────────────────────────────────────────────────────

/// Run `config.policy` and write the chosen trajectory through `writer`.
/// Returns the state after the last minute.
fn run<W: OutputWriter>(instance: Arc<Instance>, config: SimConfig, mut writer: W) -> Result<SimulationState> {
    match config.policy {
        PolicyKind::Greedy => {
            let mut sim = SimBuilder::new(instance).config(config).build()?;
            let mut obs = SimOutputObserver::new(writer, &config);
            sim.run(&mut obs)?;
            if let Some(e) = obs.take_error() {
                return Err(e).context("writing output");
            }
            Ok(sim.state().clone())
        }
        PolicyKind::Random => {
            let outcomes = run_trials(&instance, config.seed, config.effective_trials())?;
            for o in &outcomes {
                info!(trial = o.trial, remaining = o.remaining_demand(), "trial finished");
            }
            let median = median_trial(&outcomes).context("no trials were run")?;
            info!(trial = median.trial, "keeping median trial");
            write_history(&mut writer, &median.history, config.snapshot_interval)
                .context("writing output")?;
            Ok(median.final_state.clone())
        }
    }
}

fn load(path: Option<&Path>) -> Result<Instance> {
    match path {
        Some(p) => load_instance_json(p).with_context(|| format!("loading {}", p.display())),
        None => Ok(load_instance_reader(Cursor::new(SAMPLE_INSTANCE))?),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = args.sim_config();
    config.validate()?;

    let instance = Arc::new(load(args.instance.as_deref())?);
    println!("=== port_day — bunker barge simulation ===");
    println!(
        "Vessels: {}  |  Barges: {}  |  Demand: {:.1} t  |  Policy: {}",
        instance.vessels().len(),
        instance.barges().len(),
        instance.total_demand(),
        config.policy,
    );
    println!();

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    let t0 = Instant::now();
    let last = match args.format {
        Format::Json => run(instance.clone(), config, JsonWriter::new(&args.output)?)?,
        Format::Csv  => run(instance.clone(), config, CsvWriter::new(&args.output)?)?,
    };
    let elapsed = t0.elapsed();

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  delivered : {:.1} t", last.delivered_fuel());
    println!("  remaining : {:.1} t", last.remaining_demand());
    println!("  output    : {}", args.output.display());
    println!();

    println!("{:<8} {:>10} {:>10} {:>10}", "Vessel", "Demand", "Unmet", "Departs");
    println!("{}", "-".repeat(41));
    for (vessel, vs) in instance.vessels().iter().zip(last.vessel_states()) {
        println!(
            "{:<8} {:>10.1} {:>10.1} {:>10}",
            vessel.id.get(), vessel.fuel_demand, vs.current_fuel_demand, vessel.departure_time.0,
        );
    }

    Ok(())
}
