pub mod command;
pub mod process_listing;

pub use command::OsCommandRunner;
pub use process_listing::platform_listing;
