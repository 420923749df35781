pub mod listing;
pub mod load;

pub use listing::ProcessListing;
pub use load::{LoadSample, ScaledLoadSample};
