use sysinfo::System;

use crate::domain::entities::LoadSample;
use crate::domain::ports::{LoadAverageSource, LoadSourceError};

/// Native load-average query through the `sysinfo` crate.
///
/// The query always yields the three periods; a faulted reading shows
/// up as negative values, which the pipeline promotes to an
/// acquisition error.
pub struct SysinfoSource;

impl LoadAverageSource for SysinfoSource {
    fn name(&self) -> &'static str {
        "sysinfo"
    }

    fn sample(&self) -> Result<LoadSample, LoadSourceError> {
        let avg = System::load_average();
        Ok(LoadSample::new(avg.one, avg.five, avg.fifteen))
    }
}

/// Logical CPU count for per-CPU scaling, `0` when undeterminable.
#[must_use]
pub fn logical_cpu_count() -> u32 {
    let sys = System::new_all();
    u32::try_from(sys.cpus().len()).unwrap_or(0)
}
