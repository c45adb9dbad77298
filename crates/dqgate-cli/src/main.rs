//! # dqgate CLI entry point
//!
//! Parses command-line arguments, installs logging, resolves the webhook
//! address, and translates run outcomes into process exit codes. This is
//! the only layer that reads the environment or terminates the process;
//! the core returns discriminated outcomes.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dqgate_cli::check::{run_check, CheckArgs};
use dqgate_cli::seed::{run_seed, SeedArgs};

/// Environment variable consulted for the webhook address when no
/// `--webhook-url` flag is given. Absence means alerting is a no-op.
const WEBHOOK_ENV_VAR: &str = "SLACK_WEBHOOK_URL";

/// dqgate — data-quality gate for order exports.
///
/// Validates tabular order records against the order schema and signals
/// the outcome through the exit code: 0 all rows valid, 1 invalid rows
/// found, 2 the input could not be read.
#[derive(Parser, Debug)]
#[command(name = "dqgate", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate an order CSV export against the order schema.
    Check(CheckArgs),

    /// Write the canonical sample order export.
    Seed(SeedArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Check(args) => {
            // The environment is read here, once, and passed down; the
            // flag wins when both are present.
            let env_url = std::env::var(WEBHOOK_ENV_VAR).ok();
            let webhook = args.webhook_url.as_deref().or(env_url.as_deref());
            run_check(&args, webhook)
        }
        Commands::Seed(args) => run_seed(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
