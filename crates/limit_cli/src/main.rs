//! limitlab CLI - Empirical Illustrations of the Limit Theorems
//!
//! # Commands
//!
//! - `limitlab setup` - Create the results directory skeleton
//! - `limitlab moments [--preview]` - Print the moment table
//! - `limitlab slln [--distribution NAME]` - Running-mean analysis
//! - `limitlab slln-demo` - Uniform running-mean demonstration
//! - `limitlab clt [--distribution NAME]` - Standardised-sum histograms and Q-Q plots
//! - `limitlab pi` - Monte Carlo estimation of π
//! - `limitlab all` - Everything above
//!
//! Every command runs without arguments using the built-in defaults.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use limit_cli::config::{CliOverrides, DEFAULT_CONFIG_FILE};
use limit_cli::{commands, CliError, LabConfig};

/// limitlab: SLLN and CLT demonstrations
#[derive(Parser)]
#[command(name = "limitlab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Results directory (overrides the configuration file)
    #[arg(long, global = true)]
    results_dir: Option<PathBuf>,

    /// Random seed (overrides the configuration file)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the results and reports directories
    Setup,

    /// Print the moment table and theorem implications
    Moments {
        /// Also print the first samples of every generator
        #[arg(long)]
        preview: bool,
    },

    /// Running-mean analysis of the registry distributions
    Slln {
        /// Analyse only this distribution (name or alias, e.g. pareto1.5)
        #[arg(short, long)]
        distribution: Option<String>,
    },

    /// Uniform(0,1) running-mean demonstration
    SllnDemo,

    /// Standardised-sum histograms and Q-Q plots
    Clt {
        /// Distribution with finite mean and variance (default from config)
        #[arg(short, long)]
        distribution: Option<String>,
    },

    /// Monte Carlo estimation of π
    Pi,

    /// Run every demonstration
    All,
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level '{level}'"))?,
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .context("tracing subscriber already installed")?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<LabConfig, CliError> {
    let overrides = CliOverrides {
        results_dir: cli.results_dir.clone(),
        seed: cli.seed,
        verbose: cli.verbose,
    };
    Ok(LabConfig::load_with_env_and_validate(&cli.config, &overrides)?)
}

fn run(command: Commands, config: &LabConfig) -> Result<(), CliError> {
    match command {
        Commands::Setup => commands::setup::run(config).map(|_| ()),
        Commands::Moments { preview } => commands::moments::run(config, preview),
        Commands::Slln { distribution } => {
            commands::slln::run(config, distribution.as_deref()).map(|_| ())
        }
        Commands::SllnDemo => commands::slln_demo::run(config).map(|_| ()),
        Commands::Clt { distribution } => {
            commands::clt::run(config, distribution.as_deref()).map(|_| ())
        }
        Commands::Pi => commands::pi::run(config).map(|_| ()),
        Commands::All => commands::all::run(config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(err.exit_code());
        }
    };

    if let Err(err) = init_tracing(&config.log_level) {
        eprintln!("Warning: {err:#}");
    }
    if cli.verbose {
        info!("Verbose mode enabled");
    }
    info!(
        config = %cli.config.display(),
        results = %config.results_dir.display(),
        seed = config.seed,
        "limitlab starting"
    );

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Command failed");
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
