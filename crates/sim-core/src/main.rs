//! Hawk / Dove / Grudge Simulation
//!
//! Runs a population of Hawks, Doves and Grudges over a number of days and
//! reports how each strategy fares.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use sim_core::config::SimConfig;
use sim_core::events::EventLogger;
use sim_core::output::write_snapshot;
use sim_core::{SimError, Simulation};
use sim_events::{EventType, Species};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "hawk_dove_sim")]
#[command(about = "Hawk, Dove and Grudge strategies competing for food")]
struct Args {
    /// Tuning file (defaults to tuning.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Number of days to simulate
    #[arg(long)]
    days: Option<u64>,

    /// Founding hawks
    #[arg(long)]
    hawks: Option<usize>,

    /// Founding doves
    #[arg(long)]
    doves: Option<usize>,

    /// Founding grudges
    #[arg(long)]
    grudges: Option<usize>,

    /// Write every event to this JSONL file
    #[arg(long)]
    events: Option<PathBuf>,

    /// Write the final world snapshot to this JSON file
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

impl Args {
    fn load_config(&self) -> Result<SimConfig, SimError> {
        let mut config = match &self.config {
            Some(path) => SimConfig::load(path)?,
            None => SimConfig::load_or_default(),
        };

        if let Some(seed) = self.seed {
            config.simulation.seed = seed;
        }
        if let Some(days) = self.days {
            config.simulation.days = days;
        }
        if let Some(hawks) = self.hawks {
            config.population.hawks = hawks;
        }
        if let Some(doves) = self.doves {
            config.population.doves = doves;
        }
        if let Some(grudges) = self.grudges {
            config.population.grudges = grudges;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), SimError> {
    let config = args.load_config()?;

    println!("Hawk / Dove / Grudge Simulation");
    println!("===============================");
    println!("Seed: {}", config.simulation.seed);
    println!("Days: {}", config.simulation.days);
    println!(
        "Founders: {} hawks, {} doves, {} grudges",
        config.population.hawks, config.population.doves, config.population.grudges
    );
    println!("Food pairs: {}", config.arena.total_pairs());
    println!();

    let mut logger = match &args.events {
        Some(path) => EventLogger::new(path)?,
        None => EventLogger::null(),
    };

    let mut sim = Simulation::new(config)?;
    tracing::info!("Simulation started");

    let reports = sim.run_configured();
    let mut grudges_formed = 0;
    for report in &reports {
        logger.log_batch(&report.events)?;
        grudges_formed += report.count(EventType::GrudgeFormed);
    }
    logger.flush()?;

    let census = sim.census();
    tracing::info!("Simulation finished after {} days", sim.current_day());

    println!();
    println!("Simulation complete!");
    println!("  Days simulated: {}", sim.current_day());
    for species in Species::all() {
        println!("  {}: {}", species, census.count(*species));
    }
    println!("  Grudges formed: {}", grudges_formed);
    if sim.is_extinct() {
        println!("  Population went extinct");
    }

    if let Some(path) = logger.path() {
        println!("  Events: {} written to {}", logger.event_count(), path.display());
    }
    if let Some(path) = &args.snapshot {
        let snapshot = sim.snapshot("simulation_end");
        write_snapshot(path, &snapshot)?;
        println!("  Snapshot: {}", path.display());
    }

    Ok(())
}
