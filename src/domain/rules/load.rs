use crate::domain::value_objects::{Status, Thresholds};

/// Ordered threshold scan over the three load periods.
///
/// The 1-minute period is examined first. A period above its critical
/// threshold short-circuits to [`Status::Critical`]; a period above its
/// warning threshold sets [`Status::Warning`] and the scan continues.
/// Warning is sticky: a later in-bounds period never reverts it.
#[must_use]
pub fn evaluate(values: [f64; 3], thresholds: &Thresholds) -> Status {
    let mut status = Status::Ok;
    for (i, value) in values.iter().enumerate() {
        if *value > thresholds.critical[i] {
            return Status::Critical;
        }
        if *value > thresholds.warning[i] {
            status = Status::Warning;
        }
    }
    status
}
