pub mod report_fmt;

pub use report_fmt::format_report;
