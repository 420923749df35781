use crate::domain::entities::{LoadSample, ScaledLoadSample};
use crate::domain::ports::{LoadAverageSource, LoadSourceError};
use crate::domain::rules::evaluate;
use crate::domain::value_objects::{Status, Thresholds};

/// Everything the report needs from one completed check: the derived
/// status, the raw sample, and the scaled sample when per-CPU scaling
/// was applied.
#[derive(Debug, Clone, Copy)]
pub struct CheckOutcome {
    pub status: Status,
    pub sample: LoadSample,
    pub scaled: Option<ScaledLoadSample>,
    pub thresholds: Thresholds,
}

/// Runs the load check pipeline: acquire, optionally scale, evaluate.
///
/// `cpu_count` is `Some` only when the operator asked for per-CPU
/// scaling; a count of zero (undeterminable) silently degrades to the
/// unscaled values. The raw sample is always kept for reporting.
///
/// # Errors
///
/// Propagates acquisition failures, including a sample with a negative
/// value, which is an acquisition fault rather than a reading.
pub fn run_check(
    source: &dyn LoadAverageSource,
    thresholds: &Thresholds,
    cpu_count: Option<u32>,
) -> Result<CheckOutcome, LoadSourceError> {
    let sample = source.sample()?;
    if !sample.is_valid() {
        return Err(LoadSourceError::Unavailable(source.name().to_string()));
    }
    tracing::debug!(?sample, source = source.name(), "acquired load sample");

    let scaled = cpu_count.and_then(|count| sample.scaled_by(count));
    let values = scaled.as_ref().map_or_else(|| sample.values(), ScaledLoadSample::values);
    let status = evaluate(values, thresholds);

    Ok(CheckOutcome {
        status,
        sample,
        scaled,
        thresholds: *thresholds,
    })
}
