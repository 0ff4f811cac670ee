//! numeric - command line front end for the numeric utilities
//!
//! # Commands
//!
//! - `numeric demo` - Run every demonstration
//! - `numeric round 3.14159 --precision 2` - Round a value
//! - `numeric random int 0 100 --count 5` - Draw from the shared engine
//! - `numeric convert -- -5.2` - Truncate to `i32`
//! - `numeric range 10 0 10 --exclusive` - Range check
//!
//! Reports go to stdout; logs go to stderr.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use numeric_cli::commands::{self, random::RandomRequest};
use numeric_cli::config::{build_config, CliArgs as ConfigCliArgs};
use numeric_cli::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Numeric utilities CLI
#[derive(Parser, Debug)]
#[command(name = "numeric")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Fixed engine seed for reproducible output
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Number of values drawn by random commands and demo sections
    #[arg(short = 'n', long, global = true)]
    count: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run every demonstration
    Demo,

    /// Round a value to a number of decimal places
    #[command(allow_negative_numbers = true)]
    Round {
        /// Value to round
        value: f64,

        /// Decimal places to keep (sign ignored)
        #[arg(short, long, default_value = "2")]
        precision: i32,

        /// Round to the nearest tenth instead
        #[arg(short, long)]
        tenth: bool,
    },

    /// Draw random values from the shared engine
    Random {
        #[command(subcommand)]
        kind: RandomKind,
    },

    /// Truncate a float to a 32-bit integer
    #[command(allow_negative_numbers = true)]
    Convert {
        /// Value to convert
        value: f64,

        /// Clamp underflow to i32::MIN instead of i32::MAX
        #[arg(long)]
        saturating: bool,
    },

    /// Check whether a value lies between two bounds
    #[command(allow_negative_numbers = true)]
    Range {
        /// Value to check
        value: f64,
        /// Lower bound
        low: f64,
        /// Upper bound
        high: f64,

        /// Exclude the bounds themselves
        #[arg(short, long)]
        exclusive: bool,
    },
}

#[derive(Subcommand, Debug)]
enum RandomKind {
    /// Integers from [low, high)
    #[command(allow_negative_numbers = true)]
    Int {
        /// Inclusive lower bound
        low: i32,
        /// Exclusive upper bound
        high: i32,
    },

    /// Floats from [low, high]
    #[command(allow_negative_numbers = true)]
    Float {
        /// Lower bound
        #[arg(default_value = "0")]
        low: f64,
        /// Upper bound
        #[arg(default_value = "1")]
        high: f64,
    },

    /// Integers from [low, high) skipping excluded values
    #[command(allow_negative_numbers = true)]
    Blacklist {
        /// Inclusive lower bound
        low: i32,
        /// Exclusive upper bound
        high: i32,

        /// Comma-separated values to skip
        #[arg(short, long, value_delimiter = ',')]
        exclude: Vec<i32>,
    },
}

impl From<RandomKind> for RandomRequest {
    fn from(kind: RandomKind) -> Self {
        match kind {
            RandomKind::Int { low, high } => RandomRequest::Int { low, high },
            RandomKind::Float { low, high } => RandomRequest::Float { low, high },
            RandomKind::Blacklist { low, high, exclude } => {
                RandomRequest::Blacklist { low, high, exclude }
            }
        }
    }
}

impl From<&Cli> for ConfigCliArgs {
    fn from(cli: &Cli) -> Self {
        ConfigCliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            verbose: cli.verbose,
            sample_count: cli.count,
            seed: cli.seed,
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
    let config = build_config(&ConfigCliArgs::from(&cli))?;

    // Initialise tracing
    init_tracing(config.log_level.as_filter_str());

    info!("numeric v{}", numeric_cli::VERSION);
    if let Some(seed) = config.random.seed {
        numeric_random::reseed(seed);
    }
    let seed = numeric_random::shared_engine().seed();
    info!(
        seed,
        sample_count = config.sample_count,
        log_level = %config.log_level,
        "Configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Demo => commands::demo::run(&config, &mut out)?,
        Commands::Round {
            value,
            precision,
            tenth,
        } => commands::round::run(value, precision, tenth, &mut out)?,
        Commands::Random { kind } => {
            commands::random::run(&kind.into(), config.sample_count, &mut out)?
        }
        Commands::Convert { value, saturating } => {
            commands::convert::run(value, saturating, &mut out)?
        }
        Commands::Range {
            value,
            low,
            high,
            exclusive,
        } => commands::range::run(value, low, high, exclusive, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
