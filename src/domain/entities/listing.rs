use std::cmp::Ordering;

/// Raw output of the platform process-listing command: a header line
/// plus one row per process, all kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessListing {
    header: String,
    rows: Vec<String>,
}

impl ProcessListing {
    /// Builds a listing from captured stdout lines.
    ///
    /// Returns `None` below two lines: a header plus at least one data
    /// row is the minimum for a meaningful listing.
    #[must_use]
    pub fn from_lines(mut lines: Vec<String>) -> Option<Self> {
        if lines.len() < 2 {
            return None;
        }
        let rows = lines.split_off(1);
        lines.pop().map(|header| Self { header, rows })
    }

    /// The header plus the top `limit` rows.
    ///
    /// When `cpu_field` names a whitespace-separated column, data rows
    /// are stable-sorted descending by that column (rows whose field is
    /// missing or non-numeric rank as `0.0`); otherwise the listing
    /// order is preserved. The header is never reordered.
    #[must_use]
    pub fn top(mut self, limit: usize, cpu_field: Option<usize>) -> Vec<String> {
        if let Some(field) = cpu_field {
            self.rows.sort_by(|a, b| {
                cpu_percent(b, field)
                    .partial_cmp(&cpu_percent(a, field))
                    .unwrap_or(Ordering::Equal)
            });
        }
        let mut out = vec![self.header];
        out.extend(self.rows.into_iter().take(limit));
        out
    }
}

fn cpu_percent(row: &str, field: usize) -> f64 {
    row.split_whitespace()
        .nth(field)
        .and_then(|token| token.parse().ok())
        .unwrap_or(0.0)
}
