use thiserror::Error;

#[derive(Error, Debug)]
#[error("failed to run '{command}': {source}")]
pub struct CommandError {
    pub command: String,
    #[source]
    pub source: std::io::Error,
}

/// Captured result of a run-to-completion external command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Stdout as owned lines, trailing newline excluded.
    #[must_use]
    pub fn stdout_lines(&self) -> Vec<String> {
        self.stdout.lines().map(ToString::to_string).collect()
    }
}

/// Capability to invoke an external command and capture its output.
///
/// The pipeline only ever talks to subprocesses through this seam, so
/// the listing and fallback-source logic is testable without spawning
/// anything.
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args` to completion.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] when the process cannot be spawned or
    /// its output cannot be captured. A non-zero exit is not an error
    /// at this level; callers inspect [`CommandOutput::exit_code`].
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, CommandError>;
}

/// A platform's process-listing invocation and the whitespace-separated
/// column holding the CPU percentage, when its format exposes one.
#[derive(Debug, Clone, Copy)]
pub struct ListingCommand {
    pub program: &'static str,
    pub args: &'static [&'static str],
    pub cpu_field: Option<usize>,
}
