use clap::Parser;

/// check_load — tests the current system load average.
///
/// Exits WARNING or CRITICAL when a 1/5/15-minute load average exceeds
/// its threshold; the thresholds use the same format as `uptime`.
#[derive(Parser, Debug)]
#[command(name = "check_load")]
#[command(version, about)]
pub struct Cli {
    /// Warning thresholds, WLOAD1,WLOAD5,WLOAD15
    #[arg(short = 'w', long = "warning", value_name = "WLOAD1,WLOAD5,WLOAD15")]
    pub warning: Option<String>,

    /// Critical thresholds, CLOAD1,CLOAD5,CLOAD15
    #[arg(short = 'c', long = "critical", value_name = "CLOAD1,CLOAD5,CLOAD15")]
    pub critical: Option<String>,

    /// Divide the load averages by the number of CPUs (when possible)
    #[arg(short = 'r', long = "percpu")]
    pub percpu: bool,

    /// Number of top CPU-consuming processes to print; 0 disables
    #[arg(
        short = 'n',
        long = "procs-to-show",
        value_name = "NUMBER_OF_PROCS",
        default_value_t = 0
    )]
    pub procs_to_show: usize,

    /// Bare thresholds: one trailing value is the critical triplet,
    /// two are warning then critical
    #[arg(value_name = "THRESHOLDS", num_args = 0..=2, hide = true)]
    pub positional: Vec<String>,
}

impl Cli {
    /// Resolves flags and positional fallbacks into the raw warning and
    /// critical triplet strings.
    ///
    /// The positionals only apply when neither `-w` nor `-c` was given:
    /// a single one is the critical triplet, a pair is warning then
    /// critical.
    #[must_use]
    pub fn threshold_args(&self) -> (Option<&str>, Option<&str>) {
        if self.warning.is_none() && self.critical.is_none() {
            match self.positional.as_slice() {
                [critical] => (None, Some(critical.as_str())),
                [warning, critical] => (Some(warning.as_str()), Some(critical.as_str())),
                _ => (None, None),
            }
        } else {
            (self.warning.as_deref(), self.critical.as_deref())
        }
    }
}
