//! Monty Hall Game Engine
//!
//! Three doors, one car, two goats. This crate models a single round under
//! different host disclosure policies and runs Monte Carlo batches that
//! estimate how often switching doors wins.

pub mod config;
pub mod constants;
pub mod door;
pub mod host;
pub mod numbers;
pub mod runner;
pub mod seed;
pub mod trial;

// Re-export commonly used types
pub use config::{AcceptanceBands, ConfigError, RateBand, SimulationConfig};
pub use door::{Door, DoorError};
pub use host::HostPolicy;
pub use runner::{RunSummary, TrialRunner};
pub use seed::{derive_stream_seed, policy_rng};
pub use trial::{TrialRecord, simulate_trial, switch_target};
