//! Argument lists describing a single process launch.

use std::fmt;

use crate::domain::AppError;

/// Program name followed by its arguments.
///
/// Always holds at least the program; there is no way to mutate it once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    argv: Vec<String>,
}

impl Invocation {
    /// Build an invocation from an argv-style list.
    pub fn new<I, S>(argv: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        match argv.first() {
            Some(program) if !program.trim().is_empty() => Ok(Self { argv }),
            _ => Err(AppError::EmptyInvocation),
        }
    }

    /// Executable to launch, looked up on `PATH` unless it contains a separator.
    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    /// Arguments passed to the program.
    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    /// The full argument list, program included.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.argv.join(" "))
    }
}
