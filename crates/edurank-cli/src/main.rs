//! EduRank — MOORA ranking of educational technologies.
//! Entry point for the `edurank` binary.

mod commands;
mod interactive;
mod pipeline;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use edurank_common::EduRankConfig;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "edurank=info,warn";

/// Rank educational technologies against weighted criteria (MOORA).
#[derive(Parser)]
#[command(name = "edurank")]
#[command(version)]
#[command(about = "Rank educational technologies against weighted criteria using MOORA")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (TOML, YAML or JSON). Falls back to $EDURANK_CONFIG, then ./edurank.toml.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score and rank every technology in a table file
    Rank(commands::RankArgs),
    /// Check that a table file has the required columns and numeric values
    Validate {
        /// CSV/TSV/TXT file, or `-` for stdin
        input: String,
    },
    /// Show the required columns and the configured weights
    Schema {
        /// Print the effective configuration as TOML
        #[arg(long)]
        dump: bool,
    },
    /// Rank files one after another, reading paths from stdin
    Interactive(commands::RenderArgs),
}

fn log_filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        1 => EnvFilter::new("edurank=debug,info"),
        _ => EnvFilter::new("trace"),
    }
}

fn init_logging(verbose: u8) {
    let filter = log_filter(verbose);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("edurank {}", env!("CARGO_PKG_VERSION"));

    let config = match EduRankConfig::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            println!("{}", e.user_message());
            return ExitCode::from(2);
        }
    };

    let result = match cli.command {
        Commands::Rank(args) => commands::rank(&args, config),
        Commands::Validate { input } => commands::validate(&input, &config),
        Commands::Schema { dump } => commands::schema(&config, dump),
        Commands::Interactive(args) => commands::interactive(&args, config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("command failed: {e:?}");
            println!("{}", e.user_message());
            if e.is_config() {
                ExitCode::from(2)
            } else {
                ExitCode::from(1)
            }
        }
    }
}
