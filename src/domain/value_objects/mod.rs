pub mod status;
pub mod thresholds;

pub use status::Status;
pub use thresholds::{ThresholdError, ThresholdTriplet, Thresholds, PERIODS};
