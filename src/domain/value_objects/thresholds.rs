use std::ops::Index;

use thiserror::Error;

/// Load-average periods, in minutes, in evaluation order.
pub const PERIODS: [u32; 3] = [1, 5, 15];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThresholdError {
    #[error("threshold must be a float or a comma-separated float triplet, got '{0}'")]
    Unparseable(String),
    #[error("Critical threshold for {0}-minute load average is not specified")]
    CriticalMissing(u32),
    #[error("Warning threshold for {0}-minute load average is not specified")]
    WarningMissing(u32),
    #[error(
        "Parameter inconsistency: {0}-minute warning load is greater than critical load"
    )]
    WarningAboveCritical(u32),
}

/// Three threshold values, one per load-average period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdTriplet([f64; 3]);

impl ThresholdTriplet {
    /// Sentinel for a triplet the operator never supplied. Negative
    /// values never survive [`Thresholds::new`] validation.
    pub const UNSET: Self = Self([-1.0; 3]);

    /// Parses up to three delimiter-separated float tokens.
    ///
    /// Scans left to right, taking the longest valid numeric prefix at
    /// each position and skipping one delimiter character between
    /// tokens. When fewer than three tokens parse, the last parsed
    /// value fills the remaining periods, so a bare `"2.5"` applies to
    /// all three. Anything beyond the third token is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ThresholdError::Unparseable`] when no leading token
    /// parses as a float at all.
    pub fn parse(text: &str) -> Result<Self, ThresholdError> {
        let mut values = [0.0_f64; 3];
        let mut parsed = 0_usize;
        let mut rest = text;

        while parsed < 3 {
            let Some((value, len)) = float_prefix(rest) else {
                break;
            };
            values[parsed] = value;
            parsed += 1;
            // One delimiter character separates tokens; stepping past a
            // multi-byte character just ends the scan.
            match rest.get(len + 1..) {
                Some(tail) if !tail.is_empty() => rest = tail,
                _ => break,
            }
        }

        if parsed == 0 {
            return Err(ThresholdError::Unparseable(text.to_string()));
        }
        let fill = values[parsed - 1];
        for value in &mut values[parsed..] {
            *value = fill;
        }
        Ok(Self(values))
    }

    #[must_use]
    pub const fn values(&self) -> [f64; 3] {
        self.0
    }
}

impl Index<usize> for ThresholdTriplet {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

/// Validated warning/critical threshold pair.
///
/// Construction is the only validation point; once built, every value
/// is non-negative and `warning[i] <= critical[i]` holds per period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub warning: ThresholdTriplet,
    pub critical: ThresholdTriplet,
}

impl Thresholds {
    /// Validates the pair, period by period.
    ///
    /// # Errors
    ///
    /// Per period, in order: a negative (unset) critical value, then a
    /// negative warning value, then `warning > critical`. Critical is
    /// checked first so the more actionable message surfaces when the
    /// operator forgot `-c`.
    pub fn new(
        warning: ThresholdTriplet,
        critical: ThresholdTriplet,
    ) -> Result<Self, ThresholdError> {
        for (i, &period) in PERIODS.iter().enumerate() {
            if critical.0[i] < 0.0 {
                return Err(ThresholdError::CriticalMissing(period));
            }
            if warning.0[i] < 0.0 {
                return Err(ThresholdError::WarningMissing(period));
            }
            if warning.0[i] > critical.0[i] {
                return Err(ThresholdError::WarningAboveCritical(period));
            }
        }
        Ok(Self { warning, critical })
    }
}

/// Longest prefix of `s` that parses as a float, with its byte length.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// exponent only when it is complete (`1e` leaves the `e` unconsumed).
fn float_prefix(s: &str) -> Option<(f64, usize)> {
    let bytes = s.as_bytes();
    let mut pos = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut digits = 0_usize;

    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
        digits += 1;
    }
    if bytes.get(pos) == Some(&b'.') {
        let mut frac_end = pos + 1;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
            digits += 1;
        }
        if digits > 0 {
            pos = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_end = pos + 1 + usize::from(matches!(bytes.get(pos + 1), Some(b'+' | b'-')));
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            pos = exp_end;
        }
    }
    s[..pos].parse().ok().map(|value| (value, pos))
}
