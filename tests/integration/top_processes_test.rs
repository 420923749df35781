#![allow(clippy::expect_used)]

use loadcheck::application::services::{top_consuming_processes, ListingError};
use loadcheck::domain::ports::{CommandError, CommandOutput, CommandRunner, ListingCommand};

struct FakePs {
    stdout: String,
    exit_code: i32,
}

impl CommandRunner for FakePs {
    fn run(&self, _program: &str, _args: &[&str]) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput {
            stdout: self.stdout.clone(),
            stderr: String::new(),
            exit_code: Some(self.exit_code),
        })
    }
}

const PS: ListingCommand = ListingCommand {
    program: "/bin/ps",
    args: &["axwo", "stat uid pid ppid vsz rss pcpu etime comm"],
    cpu_field: Some(6),
};

fn ps_row(pcpu: f64, comm: &str) -> String {
    format!("S     0  1000     1  10000  2000  {pcpu:.1}  01:00 {comm}")
}

#[test]
fn listing_within_limit_is_returned_whole() {
    let stdout = format!(
        "STAT UID PID PPID VSZ RSS PCPU ETIME COMM\n{}\n{}\n",
        ps_row(1.0, "sshd"),
        ps_row(0.3, "cron"),
    );
    let runner = FakePs {
        stdout,
        exit_code: 0,
    };
    let lines = top_consuming_processes(&runner, &PS, 3).expect("listing");
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "STAT UID PID PPID VSZ RSS PCPU ETIME COMM");
}

#[test]
fn top_rows_are_ranked_by_cpu_descending() {
    let mut stdout = String::from("STAT UID PID PPID VSZ RSS PCPU ETIME COMM\n");
    for (pcpu, comm) in [
        (0.1, "cron"),
        (42.7, "ffmpeg"),
        (3.3, "postgres"),
        (12.0, "rustc"),
        (0.0, "getty"),
    ] {
        stdout.push_str(&ps_row(pcpu, comm));
        stdout.push('\n');
    }
    let runner = FakePs {
        stdout,
        exit_code: 0,
    };
    let lines = top_consuming_processes(&runner, &PS, 3).expect("listing");
    assert_eq!(lines.len(), 4);
    assert!(lines[1].ends_with("ffmpeg"));
    assert!(lines[2].ends_with("rustc"));
    assert!(lines[3].ends_with("postgres"));
}

#[test]
fn ties_keep_listing_order() {
    let stdout = format!(
        "HDR\n{}\n{}\n{}\n",
        ps_row(5.0, "first"),
        ps_row(5.0, "second"),
        ps_row(5.0, "third"),
    );
    let runner = FakePs {
        stdout,
        exit_code: 0,
    };
    let lines = top_consuming_processes(&runner, &PS, 2).expect("listing");
    assert!(lines[1].ends_with("first"));
    assert!(lines[2].ends_with("second"));
}

#[test]
fn non_zero_ps_exit_is_an_error() {
    let runner = FakePs {
        stdout: format!("HDR\n{}\n", ps_row(1.0, "sshd")),
        exit_code: 1,
    };
    let err = top_consuming_processes(&runner, &PS, 3).expect_err("must fail");
    assert!(matches!(err, ListingError::CommandFailed { .. }));
}

#[test]
fn header_only_listing_is_an_error() {
    let runner = FakePs {
        stdout: "STAT UID PID PPID VSZ RSS PCPU ETIME COMM\n".to_string(),
        exit_code: 0,
    };
    let err = top_consuming_processes(&runner, &PS, 3).expect_err("must fail");
    assert!(matches!(err, ListingError::TooShort));
}
