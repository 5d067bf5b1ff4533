//! uav-sim: run the multi-UAV waypoint flight simulator from the command line.
//!
//! Reads a `key=value` configuration file and a command file, flies every
//! vehicle until the time limit, and writes the trajectories to the output
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use uav_command::load_commands;
use uav_core::load_config;
use uav_output::{CsvWriter, OutputWriter, TextWriter, TrajectoryObserver};
use uav_sim::{Sim, SimBuilder};


#[derive(Parser, Debug)]
#[command(name = "uav-sim")]
#[command(about = "Simulate UAVs flying to commanded waypoints")]
struct Args {
    /// Simulation parameters (`key=value` lines)
    #[arg(short, long, default_value = "SimParams.ini")]
    config: PathBuf,

    /// Timed commands (`time uav_id x y` lines)
    #[arg(short = 'm', long, default_value = "SimCmds.txt")]
    commands: PathBuf,

    /// Directory receiving the trajectory files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Which trajectory files to write
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log the loaded configuration, commands and vehicles before running
    #[arg(long)]
    show_prep: bool,

    /// Log every dispatched command and state decision
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One `UAV<i>.txt` per vehicle
    Text,
    /// A single `trajectory.csv`
    Csv,
    /// Both of the above
    Both,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.parse()?))
        .with_writer(std::io::stderr)
        .init();

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    // 1. Load inputs.
    let config = load_config(&args.config)
        .with_context(|| format!("loading configuration from {}", args.config.display()))?;
    let backlog = load_commands(&args.commands)
        .with_context(|| format!("loading commands from {}", args.commands.display()))?;

    // 2. Build the simulation.
    let mut sim = SimBuilder::new(config).commands(backlog).build()?;
    if args.show_prep {
        report_prep(&sim);
    }

    // 3. Open writers and run.
    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("creating output directory {}", args.output_dir.display()))?;
    let writer = open_writer(args.format, &args.output_dir, sim.config.uav_count)?;
    let mut observer = TrajectoryObserver::new(writer);
    sim.run(&mut observer)?;

    if let Some(e) = observer.take_error() {
        return Err(e).context("writing trajectory output");
    }
    info!(output_dir = %args.output_dir.display(), format = ?args.format, "trajectories written");
    Ok(())
}

fn open_writer(format: OutputFormat, dir: &Path, uav_count: usize) -> Result<Box<dyn OutputWriter>> {
    Ok(match format {
        OutputFormat::Text => Box::new(TextWriter::new(dir, uav_count)?),
        OutputFormat::Csv  => Box::new(CsvWriter::new(dir)?),
        OutputFormat::Both => Box::new((TextWriter::new(dir, uav_count)?, CsvWriter::new(dir)?)),
    })
}

fn report_prep(sim: &Sim) {
    info!("--- CONFIGURATION ---");
    for line in sim.config.to_string().lines() {
        info!("{line}");
    }
    info!("--- COMMANDS ({}) ---", sim.backlog().len());
    for command in sim.backlog().iter() {
        info!("{command}");
    }
    info!("--- VEHICLES ---");
    for uav in sim.uavs() {
        info!("{uav}");
    }
}
