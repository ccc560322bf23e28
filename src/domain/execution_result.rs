use crate::domain::Invocation;

/// Outcome of one finished child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult<'a> {
    invocation: &'a Invocation,
    exit_code: i32,
    stdout: Option<String>,
    stderr: Option<String>,
}

impl<'a> ExecutionResult<'a> {
    pub fn new(invocation: &'a Invocation, exit_code: i32) -> Self {
        Self { invocation, exit_code, stdout: None, stderr: None }
    }

    /// Attach captured output streams.
    pub fn with_output(mut self, stdout: String, stderr: String) -> Self {
        self.stdout = Some(stdout);
        self.stderr = Some(stderr);
        self
    }

    pub fn invocation(&self) -> &'a Invocation {
        self.invocation
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Captured standard output, `None` when the stream was inherited.
    pub fn stdout(&self) -> Option<&str> {
        self.stdout.as_deref()
    }

    /// Captured standard error, `None` when the stream was inherited.
    pub fn stderr(&self) -> Option<&str> {
        self.stderr.as_deref()
    }
}
