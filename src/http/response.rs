//! Axum response adapters.
//!
//! # Responsibilities
//! - Convert a `DistributionOutcome` into an axum response
//! - Carry caller-chosen status/message/extra responses for handlers
//!
//! # Design Decisions
//! - Bodies are byte-identical to the sink-based writer path
//! - `StatusMessage` uses `http::StatusCode`; the raw-`u16` surface lives
//!   on the sink API only

use std::collections::BTreeMap;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::http::body;
use crate::outcome::DistributionOutcome;

impl IntoResponse for DistributionOutcome {
    fn into_response(self) -> Response {
        let text = body::render(&body::outcome_body(&self));
        (
            self.state.http_status(),
            [(header::CONTENT_TYPE, "application/json")],
            text,
        )
            .into_response()
    }
}

/// Caller-chosen status code with an optional message and extra fields.
///
/// Extra entries land as top-level keys after `message`; an entry named
/// `message` overwrites it, last write wins.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    status: StatusCode,
    message: Option<String>,
    extra: BTreeMap<String, String>,
}

impl StatusMessage {
    /// Create a response carrying only a status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            message: None,
            extra: BTreeMap::new(),
        }
    }

    /// Attach a message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach an extra top-level key/value pair.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl IntoResponse for StatusMessage {
    fn into_response(self) -> Response {
        let text = body::render(&body::status_message_body(
            self.message.as_deref(),
            Some(&self.extra),
        ));
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            text,
        )
            .into_response()
    }
}
