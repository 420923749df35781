pub mod sysinfo_source;
pub mod uptime_source;

pub use sysinfo_source::{logical_cpu_count, SysinfoSource};
pub use uptime_source::UptimeSource;

use crate::domain::ports::LoadAverageSource;

/// Picks the load-average strategy for the build platform, once.
///
/// Platforms with a native query use [`SysinfoSource`]; the rest fall
/// back to parsing `uptime` output.
#[must_use]
pub fn default_load_source() -> Box<dyn LoadAverageSource> {
    #[cfg(any(
        target_os = "linux",
        target_os = "macos",
        target_os = "freebsd",
        target_os = "windows"
    ))]
    {
        Box::new(SysinfoSource)
    }
    #[cfg(not(any(
        target_os = "linux",
        target_os = "macos",
        target_os = "freebsd",
        target_os = "windows"
    )))]
    {
        Box::new(UptimeSource::new(
            crate::infrastructure::os::OsCommandRunner,
        ))
    }
}
