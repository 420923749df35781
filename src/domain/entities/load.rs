/// One reading of the 1/5/15-minute run-queue load averages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadSample {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

impl LoadSample {
    #[must_use]
    pub const fn new(one: f64, five: f64, fifteen: f64) -> Self {
        Self { one, five, fifteen }
    }

    /// Values in evaluation order (1, 5, 15 minutes).
    #[must_use]
    pub const fn values(&self) -> [f64; 3] {
        [self.one, self.five, self.fifteen]
    }

    /// A legitimate reading is never negative; a negative value means
    /// the acquisition itself faulted.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.one >= 0.0 && self.five >= 0.0 && self.fifteen >= 0.0
    }

    /// Divides each period by the logical CPU count.
    ///
    /// Returns `None` when the count is zero (undeterminable), in which
    /// case the caller evaluates the unscaled values instead.
    #[must_use]
    pub fn scaled_by(&self, cpu_count: u32) -> Option<ScaledLoadSample> {
        if cpu_count == 0 {
            return None;
        }
        let n = f64::from(cpu_count);
        Some(ScaledLoadSample(Self::new(
            self.one / n,
            self.five / n,
            self.fifteen / n,
        )))
    }
}

impl std::fmt::Display for LoadSample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}, {:.2}, {:.2}", self.one, self.five, self.fifteen)
    }
}

/// A load sample normalized by the logical CPU count. The raw sample it
/// was derived from is kept separately for reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledLoadSample(LoadSample);

impl ScaledLoadSample {
    #[must_use]
    pub const fn sample(&self) -> LoadSample {
        self.0
    }

    #[must_use]
    pub const fn values(&self) -> [f64; 3] {
        self.0.values()
    }
}
