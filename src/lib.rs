//! wfsmoke: smoke-test harness that drives the workflows CLI against a running
//! cluster and decides pass/fail from exit codes.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::ProcessCommandAdapter;
pub use app::AppContext;
pub use app::api::{RunOutcome, SmokeOptions, list, run, script};
pub use domain::{
    AppError, Check, ConfigOverrides, Endpoint, ExecutionResult, Expectation, Invocation,
    Scenario, ScenarioScript, ScriptState, SmokeConfig,
};
pub use ports::{CommandRunner, RunOptions};

/// Execute a prepared script with any runner.
pub fn execute<R: CommandRunner>(
    ctx: &AppContext<R>,
    script: &ScenarioScript,
) -> Result<RunOutcome, AppError> {
    app::commands::run::execute(ctx, script)
}
