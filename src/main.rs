use clap::Parser;
use tracing_subscriber::EnvFilter;

use loadcheck::application::services::{run_check, top_consuming_processes};
use loadcheck::domain::value_objects::{Status, ThresholdTriplet, Thresholds};
use loadcheck::infrastructure::collectors::{default_load_source, logical_cpu_count};
use loadcheck::infrastructure::os::{platform_listing, OsCommandRunner};
use loadcheck::presentation::cli::formatters::format_report;
use loadcheck::presentation::cli::Cli;

const USAGE: &str =
    "Usage:\ncheck_load [-r] -w WLOAD1,WLOAD5,WLOAD15 -c CLOAD1,CLOAD5,CLOAD15 [-n NUMBER_OF_PROCS]";

fn setup_tracing() {
    // Diagnostics go to stderr; stdout belongs to the plugin protocol.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn parse_triplet(arg: Option<&str>) -> Result<ThresholdTriplet, Status> {
    match arg {
        None => Ok(ThresholdTriplet::UNSET),
        Some(text) => ThresholdTriplet::parse(text).map_err(|e| {
            println!("{e}");
            Status::Unknown
        }),
    }
}

fn run() -> i32 {
    setup_tracing();

    if std::env::args().len() < 2 {
        println!("Could not parse arguments");
        println!("{USAGE}");
        return Status::Unknown.exit_code();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version also leave through here; the scheduler
            // convention treats both as UNKNOWN.
            let _ = e.print();
            return Status::Unknown.exit_code();
        }
    };

    let (warning_arg, critical_arg) = cli.threshold_args();
    let (warning, critical) = match (parse_triplet(warning_arg), parse_triplet(critical_arg)) {
        (Ok(w), Ok(c)) => (w, c),
        _ => return Status::Unknown.exit_code(),
    };
    let thresholds = match Thresholds::new(warning, critical) {
        Ok(t) => t,
        Err(e) => {
            println!("{e}");
            return Status::Unknown.exit_code();
        }
    };

    let source = default_load_source();
    let cpu_count = cli.percpu.then(logical_cpu_count);
    let outcome = match run_check(source.as_ref(), &thresholds, cpu_count) {
        Ok(outcome) => outcome,
        Err(e) => {
            println!("{e}");
            return Status::Unknown.exit_code();
        }
    };

    println!("{}", format_report(&outcome));

    if cli.procs_to_show > 0 {
        // Advisory: a failed listing is reported but never changes the
        // exit status of the primary load check.
        match top_consuming_processes(&OsCommandRunner, platform_listing(), cli.procs_to_show) {
            Ok(lines) => {
                for line in lines {
                    println!("{line}");
                }
            }
            Err(e) => eprintln!("{e}"),
        }
    }

    outcome.status.exit_code()
}

fn main() {
    std::process::exit(run());
}
