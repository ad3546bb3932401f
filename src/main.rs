//! `robot-simulation` — runs a robot command script.
//!
//! **Usage:**
//! ```text
//! robot-simulation [INPUT] [--config <file>] [--min-coordinate <n>] [--max-coordinate <n>]
//! ```
//!
//! Reads commands from INPUT, or stdin when omitted, and prints every report
//! to stdout. Diagnostics go to stderr.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use flexi_logger::Logger;
use log::info;
use robot_simulation::{CommandInterpreter, Robot, SimulationConfig};

/// Drive a robot around a square table.
#[derive(Parser)]
#[command(name = "robot-simulation", version, about)]
struct Args {
    /// Command script to run. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Lowest coordinate on either axis (overrides the config file).
    #[arg(long, allow_hyphen_values = true)]
    min_coordinate: Option<i32>,

    /// Highest coordinate on either axis (overrides the config file).
    #[arg(long, allow_hyphen_values = true)]
    max_coordinate: Option<i32>,

    /// Stop at the first rejected command.
    #[arg(long)]
    halt_on_error: bool,

    /// Log level spec, e.g. `warn` or `robot_simulation=debug`. `RUST_LOG` wins when set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let _logger = Logger::try_with_env_or_str(&args.log_level)
        .with_context(|| format!("invalid log level `{}`", args.log_level))?
        .log_to_stderr()
        .start()
        .context("failed to start logger")?;

    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(min) = args.min_coordinate {
        config.table.min_coordinate = min;
    }
    if let Some(max) = args.max_coordinate {
        config.table.max_coordinate = max;
    }
    if args.halt_on_error {
        config.interpreter.halt_on_error = true;
    }

    let table = config.table.build()?;
    let mut robot = Robot::new(&table);
    let interpreter = CommandInterpreter::standard(config.interpreter);
    info!(
        "event=run_start min_coordinate={} max_coordinate={} halt_on_error={}",
        table.min_coordinate(),
        table.max_coordinate(),
        config.interpreter.halt_on_error
    );

    let stdout = io::stdout();
    let summary = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open `{}`", path.display()))?;
            interpreter.run(&mut robot, BufReader::new(file), stdout.lock())?
        }
        None => interpreter.run(&mut robot, io::stdin().lock(), stdout.lock())?,
    };

    info!(
        "event=run_complete executed={} rejected={} reports={}",
        summary.executed,
        summary.rejected,
        summary.reports.len()
    );
    Ok(())
}
