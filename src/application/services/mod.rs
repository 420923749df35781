pub mod check;
pub mod top_processes;

pub use check::{run_check, CheckOutcome};
pub use top_processes::{top_consuming_processes, ListingError};
