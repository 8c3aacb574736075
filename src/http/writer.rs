//! Response writing for distribution operations.
//!
//! # Responsibilities
//! - Map an outcome to its HTTP status and JSON body
//! - Write caller-chosen status/message/extra responses
//! - Propagate sink write failures to the caller
//!
//! # Design Decisions
//! - Each call is one construct→render→write sequence; no state is retained
//! - The body is written exactly once per call; no retry at this layer
//! - Body construction never fails a call, only the sink write can

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::http::body;
use crate::http::sink::ResponseSink;
use crate::outcome::DistributionOutcome;

/// Errors surfaced when a response cannot be written.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The sink refused the body bytes (closed connection and friends).
    #[error("failed to write response body: {0}")]
    Io(#[from] std::io::Error),
}

/// Report a distribution outcome on the given response.
///
/// Sets the status from the state table, then writes the JSON body:
/// `success`, `state`, and `message` when the engine attached one.
pub fn write_outcome<S: ResponseSink>(
    sink: &mut S,
    outcome: &DistributionOutcome,
) -> Result<(), WriteError> {
    sink.set_status(outcome.state.http_status().as_u16());
    append(sink, &body::outcome_body(outcome))?;
    tracing::debug!(
        state = outcome.state.label(),
        successful = outcome.successful,
        "outcome response written"
    );
    Ok(())
}

/// Report a caller-chosen status with an optional message and extra fields.
///
/// The status is applied verbatim, out-of-range codes included. `extra`
/// entries land as top-level keys after `message`; an entry named `message`
/// overwrites it, last write wins.
pub fn write_status_message<S: ResponseSink>(
    sink: &mut S,
    status: u16,
    message: Option<&str>,
    extra: Option<&BTreeMap<String, String>>,
) -> Result<(), WriteError> {
    sink.set_status(status);
    append(sink, &body::status_message_body(message, extra))?;
    tracing::debug!(status, "status response written");
    Ok(())
}

fn append<S: ResponseSink>(sink: &mut S, body: &Map<String, Value>) -> Result<(), WriteError> {
    sink.write_body(&body::render(body))?;
    Ok(())
}
