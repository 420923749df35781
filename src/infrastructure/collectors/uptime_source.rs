use crate::domain::entities::LoadSample;
use crate::domain::ports::{CommandRunner, LoadAverageSource, LoadSourceError};

const UPTIME_PATH: &str = "/usr/bin/uptime";

/// Fallback strategy: parse the load averages out of `uptime` output.
///
/// Used on platforms without a native query. The first stdout line is
/// searched for the `load average:` marker (or the BSD/Solaris
/// `load averages:` dialect) followed by three comma-separated floats.
pub struct UptimeSource<R: CommandRunner> {
    runner: R,
    path: String,
}

impl<R: CommandRunner> UptimeSource<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self::with_path(runner, UPTIME_PATH)
    }

    #[must_use]
    pub fn with_path(runner: R, path: &str) -> Self {
        Self {
            runner,
            path: path.to_string(),
        }
    }
}

impl<R: CommandRunner> LoadAverageSource for UptimeSource<R> {
    fn name(&self) -> &'static str {
        "uptime"
    }

    fn sample(&self) -> Result<LoadSample, LoadSourceError> {
        let output = self
            .runner
            .run(&self.path, &[])
            .map_err(|e| LoadSourceError::Unavailable(e.to_string()))?;
        if !output.stderr.is_empty() {
            // Noise on stderr alone is not fatal here.
            tracing::debug!(stderr = %output.stderr, "uptime wrote to stderr");
        }

        let first_line = output.stdout.lines().next().unwrap_or("");
        let sample =
            parse_uptime_line(first_line).ok_or_else(|| LoadSourceError::Unparseable {
                command: self.path.clone(),
            })?;

        // Parse problems take precedence over the exit status.
        if !output.success() {
            return Err(LoadSourceError::CommandFailed {
                command: self.path.clone(),
                code: output.exit_code.unwrap_or(-1),
            });
        }
        Ok(sample)
    }
}

fn parse_uptime_line(line: &str) -> Option<LoadSample> {
    let after_marker = ["load average:", "load averages:"]
        .iter()
        .find_map(|marker| {
            line.find(marker).map(|start| &line[start + marker.len()..])
        })?;

    let mut values = [0.0_f64; 3];
    let mut parts = after_marker.split(',');
    for value in &mut values {
        let token = parts.next()?.split_whitespace().next()?;
        *value = token.parse().ok()?;
    }
    Some(LoadSample::new(values[0], values[1], values[2]))
}
