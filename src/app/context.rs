use crate::ports::CommandRunner;

/// Application context holding dependencies for command execution.
pub struct AppContext<R: CommandRunner> {
    runner: R,
    verbose: bool,
}

impl<R: CommandRunner> AppContext<R> {
    /// Create a new application context.
    pub fn new(runner: R) -> Self {
        Self { runner, verbose: false }
    }

    /// Echo captured child output after each scenario.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Get a reference to the command runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}
