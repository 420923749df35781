pub mod app;
pub mod formatters;

pub use app::Cli;
