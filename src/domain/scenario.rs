//! Scenario definitions and the script that sequences them.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::domain::{AppError, ExecutionResult, Invocation};

/// Expected outcome of a non-strict invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Expectation {
    /// Exit code 0.
    Success,
    /// Any nonzero exit code.
    Failure,
    /// One specific exit code.
    ExitCode(i32),
}

impl Expectation {
    pub fn matches(&self, exit_code: i32) -> bool {
        match self {
            Expectation::Success => exit_code == 0,
            Expectation::Failure => exit_code != 0,
            Expectation::ExitCode(code) => exit_code == *code,
        }
    }

    /// Compare a result against this expectation.
    pub fn verify(&self, result: &ExecutionResult<'_>) -> Result<(), AppError> {
        if self.matches(result.exit_code()) {
            return Ok(());
        }
        Err(AppError::AssertionViolation {
            command: result.invocation().to_string(),
            expected: self.to_string(),
            exit_code: result.exit_code(),
        })
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Success => f.write_str("succeeded"),
            Expectation::Failure => f.write_str("failed"),
            Expectation::ExitCode(code) => write!(f, "exited with code {}", code),
        }
    }
}

/// How a scenario decides pass/fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// The runner itself rejects a nonzero exit code.
    Strict,
    /// The script inspects the returned result.
    Expect(Expectation),
}

impl Check {
    pub fn is_strict(&self) -> bool {
        matches!(self, Check::Strict)
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::Strict => f.write_str("strict"),
            Check::Expect(Expectation::Success) => f.write_str("expect success"),
            Check::Expect(Expectation::Failure) => f.write_str("expect failure"),
            Check::Expect(Expectation::ExitCode(code)) => write!(f, "expect exit code {}", code),
        }
    }
}

/// One logical test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub invocation: Invocation,
    pub check: Check,
    pub timeout: Option<Duration>,
}

impl Scenario {
    pub fn strict(name: impl Into<String>, invocation: Invocation) -> Self {
        Self { name: name.into(), invocation, check: Check::Strict, timeout: None }
    }

    pub fn expecting(
        name: impl Into<String>,
        invocation: Invocation,
        expectation: Expectation,
    ) -> Self {
        Self { name: name.into(), invocation, check: Check::Expect(expectation), timeout: None }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Ordered, immutable list of scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioScript {
    scenarios: Vec<Scenario>,
    capture: bool,
}

impl ScenarioScript {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios, capture: true }
    }

    /// Whether child output is captured (`true`) or streamed to the terminal.
    pub fn with_capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn capture(&self) -> bool {
        self.capture
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

/// Overall state of a script run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptState {
    Running,
    Passed,
    Failed,
}

impl fmt::Display for ScriptState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptState::Running => f.write_str("running"),
            ScriptState::Passed => f.write_str("passed"),
            ScriptState::Failed => f.write_str("failed"),
        }
    }
}
