//! Sequential execution of a scenario script.

use crate::app::AppContext;
use crate::domain::{AppError, Check, ExecutionResult, Scenario, ScenarioScript, ScriptState};
use crate::ports::{CommandRunner, RunOptions};

/// Summary of a script that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub state: ScriptState,
    /// Names of the scenarios that passed, in execution order.
    pub passed: Vec<String>,
}

/// Run every scenario in order, stopping at the first failure.
pub fn execute<R: CommandRunner>(
    ctx: &AppContext<R>,
    script: &ScenarioScript,
) -> Result<RunOutcome, AppError> {
    let total = script.len();
    let mut passed = Vec::with_capacity(total);
    println!("Smoke run {}: {} scenario(s)", ScriptState::Running, total);

    for (index, scenario) in script.scenarios().iter().enumerate() {
        println!(
            "▶ [{}/{}] {} ({}): {}",
            index + 1,
            total,
            scenario.name,
            scenario.check,
            scenario.invocation
        );

        if let Err(err) = run_scenario(ctx, scenario, script.capture()) {
            println!("❌ {}", scenario.name);
            eprintln!(
                "Smoke run {} after {} of {} scenario(s)",
                ScriptState::Failed,
                passed.len(),
                total
            );
            return Err(err);
        }

        println!("✅ {}", scenario.name);
        passed.push(scenario.name.clone());
    }

    let state = ScriptState::Passed;
    println!("✅ Smoke run {}: {} scenario(s)", state, total);
    Ok(RunOutcome { state, passed })
}

fn run_scenario<R: CommandRunner>(
    ctx: &AppContext<R>,
    scenario: &Scenario,
    capture: bool,
) -> Result<(), AppError> {
    let options = match scenario.check {
        Check::Strict => RunOptions::strict(),
        Check::Expect(_) => RunOptions::lenient(),
    }
    .with_timeout(scenario.timeout)
    .with_capture(capture);

    let result = ctx.runner().run(&scenario.invocation, options)?;
    if ctx.is_verbose() {
        echo_output(&result);
    }

    match scenario.check {
        Check::Strict => Ok(()),
        Check::Expect(expectation) => expectation.verify(&result),
    }
}

fn echo_output(result: &ExecutionResult<'_>) {
    println!("  exit code: {}", result.exit_code());
    if let Some(stdout) = result.stdout().filter(|s| !s.trim().is_empty()) {
        for line in stdout.lines() {
            println!("  | {}", line);
        }
    }
    if let Some(stderr) = result.stderr().filter(|s| !s.trim().is_empty()) {
        for line in stderr.lines() {
            eprintln!("  ! {}", line);
        }
    }
}
