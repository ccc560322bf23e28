use std::time::Duration;

use crate::domain::{AppError, ExecutionResult, Invocation};

/// Per-invocation settings, fixed before the process is launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Treat a nonzero exit code as a failure of the call itself.
    pub strict: bool,
    /// Kill the child after this long. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Capture stdout/stderr instead of inheriting the parent's streams.
    pub capture: bool,
}

impl RunOptions {
    pub fn strict() -> Self {
        Self { strict: true, timeout: None, capture: true }
    }

    pub fn lenient() -> Self {
        Self { strict: false, timeout: None, capture: true }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }
}

pub trait CommandRunner {
    /// Launch one child process and block until it exits.
    ///
    /// In strict mode a nonzero exit code is returned as
    /// `AppError::StrictViolation`; otherwise every exit code yields a result.
    fn run<'a>(
        &self,
        invocation: &'a Invocation,
        options: RunOptions,
    ) -> Result<ExecutionResult<'a>, AppError>;
}
