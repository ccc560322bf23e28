//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api::{self, SmokeOptions};
use crate::domain::{AppError, ConfigOverrides, Endpoint};

#[derive(Parser)]
#[command(name = "wfsmoke")]
#[command(version)]
#[command(
    about = "Smoke-test the workflows CLI against a running cluster",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Scenario file (defaults to ./wfsmoke.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// CLI under test, by name on PATH or by path
    #[arg(long = "cli", env = "WFSMOKE_CLI", global = true)]
    program: Option<String>,
    /// Cluster endpoint forwarded to the CLI as --url
    #[arg(short, long, env = "FISSION_URL", global = true, value_parser = Endpoint::parse)]
    url: Option<Endpoint>,
    /// Endpoint with nothing listening, used by the built-in failure scenario
    #[arg(long, global = true, value_parser = Endpoint::parse)]
    unreachable_url: Option<Endpoint>,
    /// Kill any invocation running longer than this many seconds
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute the scenarios in order and fail on the first violation
    #[clap(visible_alias = "r")]
    Run {
        /// Echo each invocation's exit code and captured output
        #[arg(short, long)]
        verbose: bool,
    },
    /// Show the scenarios a run would execute
    #[clap(visible_alias = "ls")]
    List,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let options = SmokeOptions {
        config: cli.config,
        overrides: ConfigOverrides {
            program: cli.program,
            url: cli.url,
            unreachable_url: cli.unreachable_url,
            timeout_secs: cli.timeout_secs,
        },
        verbose: false,
    };

    let result: Result<(), AppError> = match cli.command {
        Commands::Run { verbose } => api::run(&SmokeOptions { verbose, ..options }).map(|_| ()),
        Commands::List => api::list(&options).map(|lines| {
            for line in lines {
                println!("{}", line);
            }
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", failure_message(&e));
        std::process::exit(1);
    }
}

/// Failures of the system under test read differently from harness errors.
fn failure_message(err: &AppError) -> String {
    if err.is_scenario_failure() {
        format!("Smoke test failed: {}", err)
    } else {
        format!("Error: {}", err)
    }
}
