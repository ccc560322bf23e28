//! Library entry points wiring the real process runner.

use std::env;
use std::path::PathBuf;

use crate::adapters::ProcessCommandAdapter;
use crate::app::AppContext;
use crate::app::commands::{list, run};
use crate::app::config::load_script;
use crate::domain::{AppError, ConfigOverrides, ScenarioScript};

pub use run::RunOutcome;

/// Where the scenarios come from and how to report them.
#[derive(Debug, Clone, Default)]
pub struct SmokeOptions {
    /// Scenario file, relative to the working directory.
    pub config: Option<PathBuf>,
    pub overrides: ConfigOverrides,
    /// Echo captured child output.
    pub verbose: bool,
}

/// Resolve the scenario script for the current working directory.
pub fn script(options: &SmokeOptions) -> Result<ScenarioScript, AppError> {
    let base_dir = env::current_dir()?;
    load_script(&base_dir, options.config.as_deref(), &options.overrides)
}

/// Execute the smoke run against real child processes.
pub fn run(options: &SmokeOptions) -> Result<RunOutcome, AppError> {
    let base_dir = env::current_dir()?;
    let script = load_script(&base_dir, options.config.as_deref(), &options.overrides)?;

    println!("wfsmoke {}", env!("CARGO_PKG_VERSION"));
    let ctx = AppContext::new(ProcessCommandAdapter::in_dir(base_dir)).verbose(options.verbose);
    run::execute(&ctx, &script)
}

/// Describe the scenarios a run would execute, without launching anything.
pub fn list(options: &SmokeOptions) -> Result<Vec<String>, AppError> {
    Ok(list::render(&script(options)?))
}
