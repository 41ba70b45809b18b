pub mod acceptance;
pub mod batch;
pub mod reports;
pub mod seeds;

pub use acceptance::validate_acceptance;
pub use batch::{BatchRun, run_batches};
pub use seeds::resolve_seed;
