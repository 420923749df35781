use std::process::Command;

use crate::domain::ports::{CommandError, CommandOutput, CommandRunner};

/// Runs real subprocesses synchronously, capturing stdout and stderr.
///
/// `Command::output` waits for completion and drops the child handle
/// and capture buffers on every path, success or failure.
pub struct OsCommandRunner;

impl CommandRunner for OsCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, CommandError> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| CommandError {
                command: program.to_string(),
                source,
            })?;
        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        })
    }
}
