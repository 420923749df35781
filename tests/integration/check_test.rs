#![allow(clippy::expect_used)]

use loadcheck::application::services::run_check;
use loadcheck::domain::entities::LoadSample;
use loadcheck::domain::ports::{
    CommandError, CommandOutput, CommandRunner, LoadAverageSource, LoadSourceError,
};
use loadcheck::domain::value_objects::{Status, ThresholdTriplet, Thresholds};
use loadcheck::infrastructure::collectors::UptimeSource;
use loadcheck::presentation::cli::formatters::format_report;

struct FakeUptime(&'static str);

impl CommandRunner for FakeUptime {
    fn run(&self, _program: &str, _args: &[&str]) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput {
            stdout: self.0.to_string(),
            stderr: String::new(),
            exit_code: Some(0),
        })
    }
}

struct FixedSource(LoadSample);

impl LoadAverageSource for FixedSource {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn sample(&self) -> Result<LoadSample, LoadSourceError> {
        Ok(self.0)
    }
}

fn thresholds(warning: &str, critical: &str) -> Thresholds {
    Thresholds::new(
        ThresholdTriplet::parse(warning).expect("warning"),
        ThresholdTriplet::parse(critical).expect("critical"),
    )
    .expect("valid thresholds")
}

#[test]
fn uptime_fallback_feeds_the_full_pipeline() {
    let source = UptimeSource::new(FakeUptime(
        " 10:02:33 up 12 days,  4 users,  load average: 0.10, 0.20, 0.15\n",
    ));
    let outcome = run_check(&source, &thresholds("0.5", "1"), None).expect("check");
    assert_eq!(outcome.status, Status::Ok);
    assert_eq!(
        format_report(&outcome),
        "LOAD OK - total load average: 0.10, 0.20, 0.15|\
         load1=0.100;0.500;1.000;0; \
         load5=0.200;0.500;1.000;0; \
         load15=0.150;0.500;1.000;0; "
    );
}

#[test]
fn critical_breach_on_any_period_wins() {
    let outcome = run_check(
        &FixedSource(LoadSample::new(0.5, 9.9, 0.5)),
        &thresholds("1,1,1", "2,2,2"),
        None,
    )
    .expect("check");
    assert_eq!(outcome.status, Status::Critical);
    assert!(format_report(&outcome).starts_with("LOAD CRITICAL - "));
}

#[test]
fn per_cpu_scaling_changes_the_verdict_and_the_report() {
    // Raw 6.0 against critical 2 is a breach; scaled across 4 CPUs the
    // load is 1.5 and only the warning threshold trips.
    let outcome = run_check(
        &FixedSource(LoadSample::new(6.0, 4.0, 2.0)),
        &thresholds("1,1,1", "2,2,2"),
        Some(4),
    )
    .expect("check");
    assert_eq!(outcome.status, Status::Warning);

    let line = format_report(&outcome);
    assert!(line.starts_with(
        "LOAD WARNING - scaled load average: 1.50, 1.00, 0.50 - \
         total load average: 6.00, 4.00, 2.00|"
    ));
    assert!(line.contains("load1=6.000;;;0; scaled_load1=1.500;1.000;2.000;0; "));
}

#[test]
fn single_threshold_value_guards_all_periods() {
    let outcome = run_check(
        &FixedSource(LoadSample::new(0.2, 0.2, 0.9)),
        &thresholds("0.7", "1.5"),
        None,
    )
    .expect("check");
    // The bare "0.7" filled forward to the 15-minute period.
    assert_eq!(outcome.status, Status::Warning);
}

#[test]
fn fallback_parse_failure_surfaces_as_unknown_condition() {
    struct Garbage;
    impl CommandRunner for Garbage {
        fn run(&self, _program: &str, _args: &[&str]) -> Result<CommandOutput, CommandError> {
            Ok(CommandOutput {
                stdout: "no loads here\n".to_string(),
                stderr: String::new(),
                exit_code: Some(0),
            })
        }
    }
    let source = UptimeSource::new(Garbage);
    let err = run_check(&source, &thresholds("1", "2"), None).expect_err("must fail");
    assert!(matches!(err, LoadSourceError::Unparseable { .. }));
}
