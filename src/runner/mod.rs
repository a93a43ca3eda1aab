//! Host shell command execution
//!
//! Every external command (status checks, installs, package manager probes)
//! goes through [`CommandRunner`]. Runners never fail the caller: spawn errors,
//! non-zero exits and timeouts all come back as a [`CommandResult`] with
//! `succeeded == false`.

use crate::ui;
use crate::utils::platform::build_shell_command;
use std::io::Read;
use std::process::{Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

#[cfg(test)]
pub mod testing;

/// Outcome of one shell command. Streams are trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandResult {
    pub succeeded: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failure(stderr: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    fn from_output(output: &Output) -> Self {
        Self {
            succeeded: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &str) -> CommandResult;
}

/// Runs commands through `sh -c` (or `cmd /C` on Windows).
///
/// The child's stdin is closed. Commands that ask for confirmation read EOF
/// and usually abort, so catalog entries must use non-interactive flags
/// (`apt-get install -y`, `choco install -y`, `brew install` needs none).
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    timeout: Option<Duration>,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> CommandResult {
        ui::verbose(&format!("$ {}", command));

        let mut cmd = build_shell_command(command);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let result = match self.timeout {
            Some(timeout) => run_with_timeout(&mut cmd, timeout),
            None => cmd
                .output()
                .map(|output| CommandResult::from_output(&output))
                .unwrap_or_else(|e| CommandResult::failure(e.to_string())),
        };

        if !result.succeeded && !result.stderr.is_empty() {
            ui::verbose(&format!("  failed: {}", result.stderr));
        }
        result
    }
}

/// Spawn `cmd` and kill it if it outlives `timeout`.
fn run_with_timeout(cmd: &mut Command, timeout: Duration) -> CommandResult {
    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => return CommandResult::failure(e.to_string()),
    };

    // Drain both pipes on their own threads so a chatty child cannot block on a full pipe.
    let stdout_thread = child.stdout.take().map(|stdout| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = std::io::BufReader::new(stdout).read_to_end(&mut buf);
            buf
        })
    });
    let stderr_thread = child.stderr.take().map(|stderr| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = std::io::BufReader::new(stderr).read_to_end(&mut buf);
            buf
        })
    });

    let start = Instant::now();
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if start.elapsed() > timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    return CommandResult::failure(format!(
                        "Command timed out after {} seconds",
                        timeout.as_secs()
                    ));
                }
                thread::sleep(Duration::from_millis(50));
            }
            Err(e) => return CommandResult::failure(e.to_string()),
        }
    };

    let stdout = stdout_thread
        .and_then(|t| t.join().ok())
        .unwrap_or_default();
    let stderr = stderr_thread
        .and_then(|t| t.join().ok())
        .unwrap_or_default();

    CommandResult::from_output(&Output {
        status,
        stdout,
        stderr,
    })
}
