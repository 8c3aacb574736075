//! Outcome types and their wire mappings.
//!
//! # Responsibilities
//! - Carry the result of a distribution operation (success flag, state, message)
//! - Map each state to its canonical wire label
//! - Map each state to the HTTP status reported to clients
//!
//! # Design Decisions
//! - `DistributionState` is closed; there is no catch-all variant
//! - The label is defined once and feeds both the JSON `state` field and logs
//! - Outcomes are read-only inputs; the engine produces them, we only report them

use axum::http::StatusCode;
use serde::{Serialize, Serializer};

/// How the engine handled a distribution request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistributionState {
    /// Content was delivered to its destination.
    Distributed,
    /// Request was rejected before any delivery happened.
    Dropped,
    /// Request was queued for asynchronous delivery.
    Accepted,
}

impl DistributionState {
    /// Canonical wire label for this state.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Distributed => "DISTRIBUTED",
            Self::Dropped => "DROPPED",
            Self::Accepted => "ACCEPTED",
        }
    }

    /// HTTP status reported to clients for this state.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Distributed => StatusCode::OK,
            Self::Dropped => StatusCode::BAD_REQUEST,
            Self::Accepted => StatusCode::ACCEPTED,
        }
    }
}

impl Serialize for DistributionState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

/// Result of a distribution operation.
///
/// Produced by the engine, consumed by the response writer. `message` is
/// whatever human-readable detail the engine attached, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionOutcome {
    pub successful: bool,
    pub state: DistributionState,
    pub message: Option<String>,
}

impl DistributionOutcome {
    /// Create a new outcome.
    pub fn new(successful: bool, state: DistributionState, message: Option<String>) -> Self {
        Self {
            successful,
            state,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_labels() {
        assert_eq!(DistributionState::Distributed.label(), "DISTRIBUTED");
        assert_eq!(DistributionState::Dropped.label(), "DROPPED");
        assert_eq!(DistributionState::Accepted.label(), "ACCEPTED");
    }

    #[test]
    fn test_state_status_table() {
        assert_eq!(DistributionState::Distributed.http_status(), StatusCode::OK);
        assert_eq!(
            DistributionState::Dropped.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            DistributionState::Accepted.http_status(),
            StatusCode::ACCEPTED
        );
    }

    #[test]
    fn test_state_serializes_as_label() {
        let json = serde_json::to_string(&DistributionState::Accepted).unwrap();
        assert_eq!(json, "\"ACCEPTED\"");
    }
}
