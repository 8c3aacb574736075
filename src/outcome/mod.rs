//! Distribution outcome types consumed by the response layer.

pub mod types;

pub use types::{DistributionOutcome, DistributionState};
