//! Pi Estimator CLI - Monte Carlo estimation of π
//!
//! This is the operational entry point for the estimator.
//!
//! # Commands
//!
//! - `pi-estimator run --trials <N>` - Simulate, summarise and chart one trial count
//! - `pi-estimator sweep` - Summarise every power of ten from 100 to 10,000,000
//! - `pi-estimator methods` - List the estimation strategies
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires the engine
//! (`pi_engine`) to the statistics layer (`pi_report`) and renders the
//! result to the terminal.

use clap::{Parser, Subcommand};
use pi_engine::{EstimationMethod, TrialConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod render;

pub use error::{CliError, Result};

use config::{CliConfig, OutputFormat, Overrides, Usage};

/// Monte Carlo π estimator
#[derive(Parser)]
#[command(name = "pi-estimator")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path; a missing file means defaults
    #[arg(short, long, global = true, default_value = "pi_estimator.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by commands that run simulations
#[derive(clap::Args, Debug)]
struct SimulationArgs {
    /// Seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Estimation method (integration, counting)
    #[arg(short, long, value_parser = parse_method)]
    method: Option<EstimationMethod>,

    /// Samples behind each individual estimate
    #[arg(short, long)]
    batch_size: Option<usize>,

    /// Run trials in parallel on all cores
    #[arg(short, long)]
    parallel: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate π from N independent batches and summarise the estimates
    Run {
        /// Number of independent estimates
        #[arg(short = 'n', long, value_parser = parse_trials, allow_hyphen_values = true)]
        trials: Option<usize>,

        /// Histogram bins
        #[arg(long)]
        bins: Option<usize>,

        #[command(flatten)]
        sim: SimulationArgs,
    },

    /// Summarise every power-of-ten trial count in a range
    Sweep {
        /// Smallest exponent (10^from trials)
        #[arg(long, default_value_t = 2)]
        from_exp: u32,

        /// Largest exponent (10^to trials)
        #[arg(long, default_value_t = 7)]
        to_exp: u32,

        #[command(flatten)]
        sim: SimulationArgs,
    },

    /// List available estimation methods
    Methods,
}

fn parse_trials(input: &str) -> std::result::Result<usize, String> {
    TrialConfig::parse_trials(input).map_err(|e| e.to_string())
}

fn parse_method(input: &str) -> std::result::Result<EstimationMethod, String> {
    input.parse().map_err(|e: pi_engine::SimulationError| e.to_string())
}

impl SimulationArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            seed: self.seed,
            method: self.method,
            batch_size: self.batch_size,
            parallel: self.parallel,
            format: self.format,
            ..Overrides::default()
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

impl Commands {
    /// Settings this command reads from the resolved configuration.
    fn usage(&self) -> Usage {
        match self {
            Commands::Run { .. } => Usage::Run,
            Commands::Sweep { .. } => Usage::Sweep,
            Commands::Methods => Usage::Listing,
        }
    }
}

/// Resolves file, environment and command-line settings, validating those
/// `usage` reads.
fn resolve_config(
    path: &std::path::Path,
    overrides: &Overrides,
    usage: Usage,
) -> Result<CliConfig> {
    let config = CliConfig::load_if_exists(path)?
        .with_env_override()?
        .with_overrides(overrides);
    config.validate_for(usage)?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = match &cli.command {
        Commands::Run { trials, bins, sim } => Overrides {
            trials: *trials,
            bins: *bins,
            ..sim.overrides()
        },
        Commands::Sweep { sim, .. } => sim.overrides(),
        Commands::Methods => Overrides::default(),
    };
    let config = resolve_config(&cli.config, &overrides, cli.command.usage())?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    init_tracing(level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Run { .. } => commands::run::run(&config)?,
        Commands::Sweep {
            from_exp, to_exp, ..
        } => commands::sweep::run(&config, from_exp, to_exp)?,
        Commands::Methods => commands::methods::run()?,
    }

    Ok(())
}
