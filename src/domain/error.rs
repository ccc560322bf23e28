use std::io;
use std::time::Duration;

use thiserror::Error;

/// Library-wide error type for wfsmoke operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Invocation with no program name.
    #[error("Invocation must name a program to launch")]
    EmptyInvocation,

    /// Scenario file given explicitly but not present.
    #[error("Scenario file not found: {0}")]
    ConfigNotFound(String),

    /// The named executable could not be found or started.
    #[error("Failed to launch `{command}`: {details}")]
    SpawnFailure { command: String, details: String },

    /// A strict invocation exited nonzero.
    #[error("Strict invocation `{command}` exited with code {exit_code}{}", stderr_suffix(.stderr))]
    StrictViolation { command: String, exit_code: i32, stderr: Option<String> },

    /// A non-strict invocation did not meet its expected outcome.
    #[error("Assertion failed: `{command}` should have {expected}, but exited with code {exit_code}")]
    AssertionViolation { command: String, expected: String, exit_code: i32 },

    /// The child, or a process holding its output pipes, outlived the timeout.
    #[error("Invocation `{command}` timed out after {}s", .timeout.as_secs_f64())]
    TimeoutFailure { command: String, timeout: Duration },

    /// Endpoint could not be parsed.
    #[error("Invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

fn stderr_suffix(stderr: &Option<String>) -> String {
    match stderr.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => format!(": {}", text),
        _ => String::new(),
    }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Whether the failure came from the system under test rather than the harness setup.
    pub fn is_scenario_failure(&self) -> bool {
        matches!(
            self,
            AppError::StrictViolation { .. }
                | AppError::AssertionViolation { .. }
                | AppError::TimeoutFailure { .. }
        )
    }
}
