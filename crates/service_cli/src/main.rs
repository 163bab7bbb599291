//! Binomial CLI - Lattice Option Pricing and Brownian Paths
//!
//! Operational entry point for the binomial lattice workspace.
//!
//! # Commands
//!
//! - `binomial price` - Price a vanilla option on a binomial lattice
//! - `binomial converge` - Compare lattice prices with Black-Scholes across step counts
//! - `binomial paths` - Sample Brownian motion paths and plot them in the terminal
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate wires the pricer crates to a
//! command-line interface. Logs go to stderr so that stdout carries only
//! command output.

use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod plot;

pub use error::{CliError, Result};

use config::CliConfig;

/// Binomial lattice pricer CLI
#[derive(Parser)]
#[command(name = "binomial")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "binomial.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

/// Market and contract inputs shared by the pricing commands.
///
/// Defaults reproduce the textbook example: an at-the-money one-year
/// European call on a 100 stock with 20% volatility and a 5% rate.
#[derive(Args, Debug, Clone)]
pub struct ContractArgs {
    /// Current stock price
    #[arg(long, default_value_t = 100.0)]
    pub stock: f64,

    /// Annualised volatility
    #[arg(long, default_value_t = 0.2)]
    pub volatility: f64,

    /// Annual interest rate
    #[arg(long, default_value_t = 0.05, allow_negative_numbers = true)]
    pub rate: f64,

    /// Strike price
    #[arg(long, default_value_t = 100.0)]
    pub strike: f64,

    /// Time to expiry in years
    #[arg(long, default_value_t = 1.0)]
    pub expiry: f64,

    /// Price a put instead of a call
    #[arg(long)]
    pub put: bool,

    /// Allow early exercise
    #[arg(long)]
    pub american: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a vanilla option on a binomial lattice
    Price {
        #[command(flatten)]
        contract: ContractArgs,

        /// Number of lattice steps (defaults to pricing.default_steps)
        #[arg(short = 'n', long)]
        steps: Option<usize>,

        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Print both lattices node by node
        #[arg(long)]
        show_tree: bool,
    },

    /// Compare lattice prices with Black-Scholes across step counts
    Converge {
        #[command(flatten)]
        contract: ContractArgs,

        /// Comma-separated step counts (defaults to pricing.converge_steps)
        #[arg(short = 'n', long, value_delimiter = ',')]
        steps: Option<Vec<usize>>,

        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Sample Brownian motion paths
    Paths {
        /// Comma-separated point counts, one path each (defaults to paths.step_counts)
        #[arg(short = 'n', long, value_delimiter = ',')]
        steps: Option<Vec<usize>>,

        /// RNG seed (defaults to paths.seed, else random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Use standard normal increments instead of ±1 steps
        #[arg(long)]
        gaussian: bool,

        /// Print the paths instead of opening the terminal chart
        #[arg(long)]
        no_plot: bool,

        /// Output format when not plotting (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

/// Picks the log filter: `RUST_LOG`, then `--verbose`, then the config file.
fn log_filter(verbose: bool, config: &CliConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let level = if verbose {
        "debug"
    } else {
        config.general.log_level.as_str()
    };
    EnvFilter::try_new(level)
        .map_err(|e| CliError::Config(format!("Invalid log level '{}': {}", level, e)))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_file(&cli.config)?;

    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(cli.verbose, &config)?)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(config_path = %cli.config, ?config, "configuration loaded");

    match cli.command {
        Commands::Price {
            contract,
            steps,
            format,
            show_tree,
        } => commands::price::run(
            &contract,
            steps.unwrap_or(config.pricing.default_steps),
            &format,
            show_tree,
        ),
        Commands::Converge {
            contract,
            steps,
            format,
        } => commands::converge::run(
            &contract,
            &steps.unwrap_or(config.pricing.converge_steps),
            &format,
        ),
        Commands::Paths {
            steps,
            seed,
            gaussian,
            no_plot,
            format,
        } => commands::paths::run(
            &steps.unwrap_or(config.paths.step_counts),
            seed.or(config.paths.seed),
            gaussian,
            no_plot,
            &format,
        ),
    }
}
