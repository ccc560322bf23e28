use std::io::{self, Read};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Instant;

use wait_timeout::ChildExt;

use crate::domain::{AppError, ExecutionResult, Invocation};
use crate::ports::{CommandRunner, RunOptions};

/// Runs invocations as real child processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessCommandAdapter {
    cwd: Option<PathBuf>,
}

impl ProcessCommandAdapter {
    pub fn new() -> Self {
        Self { cwd: None }
    }

    /// Launch children in `dir` instead of the current working directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { cwd: Some(dir.into()) }
    }
}

impl CommandRunner for ProcessCommandAdapter {
    fn run<'a>(
        &self,
        invocation: &'a Invocation,
        options: RunOptions,
    ) -> Result<ExecutionResult<'a>, AppError> {
        let mut command = Command::new(invocation.program());
        command.args(invocation.args()).stdin(Stdio::null());
        if let Some(dir) = &self.cwd {
            command.current_dir(dir);
        }
        if options.capture {
            command.stdout(Stdio::piped()).stderr(Stdio::piped());
        }

        let deadline = options.timeout.map(|timeout| Instant::now() + timeout);
        let mut child = command.spawn().map_err(|e| AppError::SpawnFailure {
            command: invocation.to_string(),
            details: e.to_string(),
        })?;

        // Drain both pipes while waiting so a chatty child cannot block on a full buffer.
        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        let status = match options.timeout {
            None => child.wait()?,
            Some(timeout) => match child.wait_timeout(timeout)? {
                Some(status) => status,
                None => {
                    let _ = child.kill();
                    child.wait()?;
                    return Err(AppError::TimeoutFailure {
                        command: invocation.to_string(),
                        timeout,
                    });
                }
            },
        };

        let exit_code = exit_code_of(status);
        let mut result = ExecutionResult::new(invocation, exit_code);
        if let (Some(stdout), Some(stderr)) = (stdout, stderr) {
            // A descendant of the child may still hold the pipes open; the deadline covers it too.
            let collected = collect(&stdout, deadline).and_then(|out| {
                collect(&stderr, deadline).map(|err| (out, err))
            });
            let (stdout, stderr) = collected.map_err(|e| match e {
                CollectError::Expired => AppError::TimeoutFailure {
                    command: invocation.to_string(),
                    timeout: options.timeout.unwrap_or_default(),
                },
                CollectError::Io(err) => AppError::Io(err),
            })?;
            result = result.with_output(stdout, stderr);
        }

        if options.strict && exit_code != 0 {
            return Err(AppError::StrictViolation {
                command: invocation.to_string(),
                exit_code,
                stderr: result.stderr().map(str::to_string),
            });
        }

        Ok(result)
    }
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> Receiver<io::Result<String>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let text = pipe.read_to_end(&mut buf).map(|_| String::from_utf8_lossy(&buf).into_owned());
        let _ = tx.send(text);
    });
    rx
}

enum CollectError {
    Expired,
    Io(io::Error),
}

fn collect(
    reader: &Receiver<io::Result<String>>,
    deadline: Option<Instant>,
) -> Result<String, CollectError> {
    let received = match deadline {
        None => reader.recv().map_err(|_| RecvTimeoutError::Disconnected),
        Some(deadline) => {
            reader.recv_timeout(deadline.saturating_duration_since(Instant::now()))
        }
    };
    match received {
        Ok(text) => text.map_err(CollectError::Io),
        Err(RecvTimeoutError::Timeout) => Err(CollectError::Expired),
        Err(RecvTimeoutError::Disconnected) => {
            Err(CollectError::Io(io::Error::other("output reader stopped without a result")))
        }
    }
}

/// Map an exit status to an integer code, using `128 + signal` for killed children.
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    -1
}
