pub mod command;
pub mod load_source;

pub use command::{CommandError, CommandOutput, CommandRunner, ListingCommand};
pub use load_source::{LoadAverageSource, LoadSourceError};
