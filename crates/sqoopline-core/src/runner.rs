//! Process execution boundary
//!
//! Rendering and validation never touch a process. Anything that runs an
//! external tool goes through [`CommandRunner`], so callers (and tests) can
//! swap the real shell for something else.

use std::process::{Command, Output, Stdio};

/// Status reported when a command could not be started or did not exit
/// normally (killed by a signal)
pub const EXECUTION_FAILED_STATUS: i32 = -1;

/// Result of handing a command to a [`CommandRunner`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecOutcome {
    /// The process ran to completion
    Completed {
        /// Exit code, `None` if the process was terminated by a signal
        code: Option<i32>,
        /// Captured standard output (empty when not captured)
        stdout: String,
        /// Captured standard error (empty when not captured)
        stderr: String,
    },
    /// The process could not be spawned
    FailedToStart {
        /// Why spawning failed
        reason: String,
    },
}

impl ExecOutcome {
    /// Exit status, or [`EXECUTION_FAILED_STATUS`] if there is none
    pub fn status(&self) -> i32 {
        match self {
            ExecOutcome::Completed {
                code: Some(code), ..
            } => *code,
            _ => EXECUTION_FAILED_STATUS,
        }
    }

    /// Whether the process exited with status zero
    pub fn success(&self) -> bool {
        self.status() == 0
    }

    /// Captured standard output, empty if nothing was captured
    pub fn stdout(&self) -> &str {
        match self {
            ExecOutcome::Completed { stdout, .. } => stdout,
            ExecOutcome::FailedToStart { .. } => "",
        }
    }

    /// Captured standard error, empty if nothing was captured
    pub fn stderr(&self) -> &str {
        match self {
            ExecOutcome::Completed { stderr, .. } => stderr,
            ExecOutcome::FailedToStart { .. } => "",
        }
    }
}

/// Executes command lines on behalf of the builder and job helpers
pub trait CommandRunner {
    /// Run a full command line through the host shell
    fn execute(&self, command_line: &str) -> ExecOutcome;

    /// Run a program with an explicit argument vector, no shell involved
    fn execute_args(&self, argv: &[&str]) -> ExecOutcome;
}

/// What happens to a child's standard streams
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Collect stdout/stderr into the outcome
    #[default]
    Capture,
    /// Stream stdout/stderr to the caller's terminal
    Inherit,
}

/// [`CommandRunner`] backed by the host shell
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
    mode: OutputMode,
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new("sh")
    }
}

impl ShellRunner {
    /// Runner invoking `<shell> -c <command line>`, capturing output
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            mode: OutputMode::default(),
        }
    }

    /// Set how the child's output is handled
    pub fn with_output(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    fn run(&self, mut command: Command) -> ExecOutcome {
        let result = match self.mode {
            OutputMode::Capture => command.stdin(Stdio::null()).output(),
            OutputMode::Inherit => command.status().map(|status| Output {
                status,
                stdout: Vec::new(),
                stderr: Vec::new(),
            }),
        };

        match result {
            Ok(output) => ExecOutcome::Completed {
                code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            },
            Err(e) => ExecOutcome::FailedToStart {
                reason: e.to_string(),
            },
        }
    }
}

impl CommandRunner for ShellRunner {
    fn execute(&self, command_line: &str) -> ExecOutcome {
        tracing::debug!("{} -c {}", self.shell, command_line);
        let mut command = Command::new(&self.shell);
        command.arg("-c").arg(command_line);
        self.run(command)
    }

    fn execute_args(&self, argv: &[&str]) -> ExecOutcome {
        let Some((program, args)) = argv.split_first() else {
            return ExecOutcome::FailedToStart {
                reason: "empty argument vector".to_string(),
            };
        };
        tracing::debug!("Executing {:?}", argv);
        let mut command = Command::new(program);
        command.args(args);
        self.run(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_to_start_reports_sentinel() {
        let outcome = ExecOutcome::FailedToStart {
            reason: "No such file or directory".to_string(),
        };
        assert_eq!(outcome.status(), EXECUTION_FAILED_STATUS);
        assert!(!outcome.success());
        assert_eq!(outcome.stdout(), "");
    }

    #[test]
    fn test_signal_termination_reports_sentinel() {
        let outcome = ExecOutcome::Completed {
            code: None,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert_eq!(outcome.status(), EXECUTION_FAILED_STATUS);
    }

    #[test]
    fn test_empty_argv_fails_to_start() {
        let outcome = ShellRunner::default().execute_args(&[]);
        assert!(matches!(outcome, ExecOutcome::FailedToStart { .. }));
    }

    #[test]
    fn test_missing_program_fails_to_start() {
        let outcome = ShellRunner::default().execute_args(&["sqoopline-no-such-binary-xyz"]);
        assert!(matches!(outcome, ExecOutcome::FailedToStart { .. }));
        assert_eq!(outcome.status(), EXECUTION_FAILED_STATUS);
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_captures_output_and_status() {
        let outcome = ShellRunner::default().execute("echo out; echo err >&2; exit 3");
        assert_eq!(outcome.status(), 3);
        assert_eq!(outcome.stdout(), "out\n");
        assert_eq!(outcome.stderr(), "err\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_shell_fails_to_start() {
        let outcome = ShellRunner::new("/nonexistent/shell").execute("true");
        assert!(matches!(outcome, ExecOutcome::FailedToStart { .. }));
    }
}
