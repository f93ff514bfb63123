//! forge - Command Line Front End for randforge
//!
//! # Commands
//!
//! - `forge stream` - Raw generator output for external test batteries
//! - `forge stats` - Unit-interval statistics, chi-square and throughput
//! - `forge sample <distribution> --param k=v` - Draw from a distribution
//! - `forge fit <family> --input data.csv` - Recover distribution parameters
//!
//! # Configuration
//!
//! Settings come from `forge.toml` (or `--config`), then `FORGE_*`
//! environment variables, then flags. Logs go to stderr so `stream` output
//! stays clean.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod generator;

pub use error::{CliError, Result};

use config::{build_config, CliArgs};

/// randforge pseudo-random generator toolkit
#[derive(Parser)]
#[command(name = "forge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Generator (xorshift32, xorshift64, lfsr32, lfsr64, mt32, mt64, bbs32, bbs64, naor-reingold)
    #[arg(short, long, global = true)]
    generator: Option<String>,

    /// Seed; 0 selects a clock-derived seed
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write raw generator words to stdout
    Stream {
        /// Number of words (unbounded when omitted)
        #[arg(short = 'n', long)]
        count: Option<u64>,

        /// Decimal text, one word per line, instead of little-endian binary
        #[arg(short, long)]
        text: bool,
    },

    /// Print unit-interval statistics for a generator
    Stats {
        /// Number of draws
        #[arg(short = 'n', long, default_value = "1000000")]
        count: usize,

        /// Histogram bins for the chi-square statistic
        #[arg(short, long, default_value = "100")]
        bins: usize,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Draw samples from a distribution
    Sample {
        /// Distribution name (gaussian, exponential, cauchy, weibull, maxwell,
        /// bernoulli, binomial, geometric, poisson, hypergeometric,
        /// neg-hypergeometric)
        distribution: String,

        /// Distribution parameter as key=value (repeatable)
        #[arg(short, long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// Number of samples
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Fit x,y rows to a distribution family
    Fit {
        /// Family (gaussian, cauchy, maxwell, exponential, weibull)
        family: String,

        /// CSV file with x,y header
        #[arg(short, long)]
        input: String,
    },
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            generator: cli.generator.clone(),
            seed: cli.seed,
            log_level: cli.log_level.clone(),
            verbose: cli.verbose,
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

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    tracing::debug!(
        generator = %config.generator,
        seed = config.seed,
        log_level = %config.log_level,
        "configuration loaded"
    );

    match cli.command {
        Commands::Stream { count, text } => commands::stream::run(&config, count, text),
        Commands::Stats { count, bins, json } => commands::stats::run(&config, count, bins, json),
        Commands::Sample {
            distribution,
            params,
            count,
        } => commands::sample::run(&config, &distribution, &params, count),
        Commands::Fit { family, input } => commands::fit::run(&config, &family, &input),
    }
}
