//! HTTP response layer for a content distribution engine.
//!
//! The engine decides what happens to a distribution request; this crate
//! turns that decision into a JSON body and an HTTP status code. Nothing
//! else lives here: no queueing, no transport, no state across calls.

pub mod http;
pub mod outcome;

pub use http::response::StatusMessage;
pub use http::sink::{BufferedResponse, ResponseSink};
pub use http::writer::{write_outcome, write_status_message, WriteError};
pub use outcome::{DistributionOutcome, DistributionState};
