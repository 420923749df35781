use thiserror::Error;

use crate::domain::entities::ProcessListing;
use crate::domain::ports::{CommandError, CommandRunner, ListingCommand};

#[derive(Error, Debug)]
pub enum ListingError {
    #[error(transparent)]
    Spawn(#[from] CommandError),
    #[error("'{command}' exited with non-zero status")]
    CommandFailed { command: String },
    #[error("some error occurred getting procs list")]
    TooShort,
}

/// Returns the listing header plus the `limit` most CPU-consuming rows.
///
/// Only called when `limit > 0`. The listing command's stdout is kept
/// verbatim; ranking happens on the parsed CPU column when the platform
/// format exposes one (see [`ListingCommand::cpu_field`]).
///
/// # Errors
///
/// Fails when the command cannot be run, exits non-zero, or produces
/// fewer than two lines of output.
pub fn top_consuming_processes(
    runner: &dyn CommandRunner,
    listing: &ListingCommand,
    limit: usize,
) -> Result<Vec<String>, ListingError> {
    tracing::debug!(program = listing.program, limit, "running process listing");
    let output = runner.run(listing.program, listing.args)?;
    if !output.success() {
        return Err(ListingError::CommandFailed {
            command: listing.program.to_string(),
        });
    }
    if !output.stderr.is_empty() {
        tracing::debug!(stderr = %output.stderr, "process listing wrote to stderr");
    }

    let lines = output.stdout_lines();
    let listing_lines = ProcessListing::from_lines(lines).ok_or(ListingError::TooShort)?;
    Ok(listing_lines.top(limit, listing.cpu_field))
}
