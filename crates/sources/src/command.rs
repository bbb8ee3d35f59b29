//! Running external status commands
//!
//! Sources never spawn processes directly; they go through a shared
//! `CommandRunner` so the timeout policy lives in one place and tests can
//! script command output.

use barline_core::{SourceError, SourceResult};
use log::debug;
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// How often a running child is polled while a timeout is armed
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Captured result of a finished command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    /// Human-readable exit status
    pub status: String,
    pub stdout: String,
}

impl CommandOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            status: "exit status: 0".to_string(),
            stdout: stdout.into(),
        }
    }

    pub fn failed(code: i32, stdout: impl Into<String>) -> Self {
        Self {
            success: false,
            status: format!("exit status: {}", code),
            stdout: stdout.into(),
        }
    }
}

/// Runs a program with fixed arguments and captures its stdout
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[&str]) -> SourceResult<CommandOutput>;
}

/// Runner shared by every command-backed source of a status line
pub type SharedRunner = Arc<dyn CommandRunner>;

/// Spawns real processes, optionally killing them after a timeout
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner {
    timeout: Option<Duration>,
}

impl SystemCommandRunner {
    /// `None` waits for the child indefinitely
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    pub fn shared(timeout: Option<Duration>) -> SharedRunner {
        Arc::new(Self::new(timeout))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> SourceResult<CommandOutput> {
        let spawn_error = |source| SourceError::Spawn {
            program: program.to_string(),
            source,
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(spawn_error)?;

        if let Some(timeout) = self.timeout {
            let deadline = Instant::now() + timeout;
            // Status output is small enough to fit the pipe buffer, so the
            // child can exit before we start reading.
            while child.try_wait().map_err(spawn_error)?.is_none() {
                if Instant::now() >= deadline {
                    if let Err(e) = child.kill() {
                        debug!("Failed to kill `{}` after timeout: {}", program, e);
                    }
                    let _ = child.wait();
                    return Err(SourceError::Timeout {
                        program: program.to_string(),
                        timeout,
                    });
                }
                thread::sleep(POLL_INTERVAL);
            }
        }

        let output = child.wait_with_output().map_err(spawn_error)?;
        Ok(CommandOutput {
            success: output.status.success(),
            status: output.status.to_string(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;
    use std::sync::Mutex;

    /// Replays canned output keyed by the full command line.
    ///
    /// Unscripted commands fail to spawn.
    #[derive(Default)]
    pub(crate) struct ScriptedRunner {
        outputs: HashMap<String, CommandOutput>,
        pub(crate) calls: Mutex<Vec<String>>,
    }

    impl ScriptedRunner {
        pub(crate) fn with(mut self, command_line: &str, output: CommandOutput) -> Self {
            self.outputs.insert(command_line.to_string(), output);
            self
        }

        pub(crate) fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn run(&self, program: &str, args: &[&str]) -> SourceResult<CommandOutput> {
            let mut command_line = program.to_string();
            for arg in args {
                command_line.push(' ');
                command_line.push_str(arg);
            }
            self.calls.lock().unwrap().push(command_line.clone());

            self.outputs
                .get(&command_line)
                .cloned()
                .ok_or_else(|| SourceError::Spawn {
                    program: program.to_string(),
                    source: io::Error::new(io::ErrorKind::NotFound, "not scripted"),
                })
        }
    }

    #[test]
    fn test_captures_stdout_and_status() {
        let runner = SystemCommandRunner::new(None);
        let output = runner.run("sh", &["-c", "echo hello"]).unwrap();
        assert!(output.success);
        assert_eq!(output.stdout, "hello\n");
    }

    #[test]
    fn test_reports_non_zero_exit() {
        let runner = SystemCommandRunner::new(Some(Duration::from_secs(5)));
        let output = runner.run("sh", &["-c", "echo 42; exit 3"]).unwrap();
        assert!(!output.success);
        assert_eq!(output.stdout, "42\n");
        assert!(output.status.contains('3'));
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let runner = SystemCommandRunner::new(None);
        let err = runner
            .run("barline-definitely-not-installed", &[])
            .unwrap_err();
        assert!(matches!(err, SourceError::Spawn { .. }));
    }

    #[test]
    fn test_timeout_kills_hanging_command() {
        let runner = SystemCommandRunner::new(Some(Duration::from_millis(100)));
        let started = Instant::now();
        let err = runner.run("sleep", &["5"]).unwrap_err();
        assert!(matches!(err, SourceError::Timeout { .. }));
        assert!(started.elapsed() < Duration::from_secs(4));
    }
}
