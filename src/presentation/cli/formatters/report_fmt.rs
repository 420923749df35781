use std::fmt::Write;

use crate::application::services::CheckOutcome;
use crate::domain::value_objects::PERIODS;

/// Renders the single-line status report with performance data.
///
/// Grammar:
/// `LOAD <STATUS> - [scaled load average: S1, S5, S15 - ]total load
/// average: L1, L5, L15|<perfdata>`. Load values use two decimals in
/// the text and three in the perfdata. When scaling is active the raw
/// `loadN` metrics carry empty threshold fields and the parallel
/// `scaled_loadN` metrics carry the thresholds instead.
#[must_use]
pub fn format_report(outcome: &CheckOutcome) -> String {
    let mut status_line = format!("total load average: {}", outcome.sample);
    if let Some(scaled) = &outcome.scaled {
        status_line = format!("scaled load average: {} - {status_line}", scaled.sample());
    }

    let raw = outcome.sample.values();
    let warning = outcome.thresholds.warning;
    let critical = outcome.thresholds.critical;
    let mut perfdata = String::new();
    for (i, period) in PERIODS.iter().enumerate() {
        match &outcome.scaled {
            Some(scaled) => {
                let _ = write!(perfdata, "load{period}={:.3};;;0; ", raw[i]);
                let _ = write!(
                    perfdata,
                    "scaled_load{period}={:.3};{:.3};{:.3};0; ",
                    scaled.values()[i],
                    warning[i],
                    critical[i],
                );
            }
            None => {
                let _ = write!(
                    perfdata,
                    "load{period}={:.3};{:.3};{:.3};0; ",
                    raw[i], warning[i], critical[i],
                );
            }
        }
    }

    format!("LOAD {} - {status_line}|{perfdata}", outcome.status)
}
