use thiserror::Error;

use crate::domain::entities::LoadSample;

#[derive(Error, Debug)]
pub enum LoadSourceError {
    #[error("load averages unavailable from {0}")]
    Unavailable(String),
    #[error("could not parse load averages from '{command}' output")]
    Unparseable { command: String },
    #[error("'{command}' exited with status {code}")]
    CommandFailed { command: String, code: i32 },
}

/// Produces the current 1/5/15-minute load sample.
///
/// Two strategies exist: a native system query and a text-parsing
/// fallback over an `uptime`-style command. The strategy is picked once
/// at startup by platform capability, never mid-run.
pub trait LoadAverageSource: Send + Sync {
    /// Short name used to attribute acquisition errors to a source.
    fn name(&self) -> &'static str;

    /// Acquires one sample.
    ///
    /// # Errors
    ///
    /// Returns [`LoadSourceError`] when the platform query or the
    /// fallback subprocess cannot produce three load values.
    fn sample(&self) -> Result<LoadSample, LoadSourceError>;
}
