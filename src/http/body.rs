//! JSON body construction.
//!
//! # Responsibilities
//! - Build the ordered JSON object for an outcome response
//! - Build the ordered JSON object for a status/message response
//! - Render a body to compact JSON text without ever failing the request
//!
//! # Design Decisions
//! - Key order is insertion order (`serde_json` `preserve_order`); clients
//!   and test fixtures diff the raw text
//! - Render problems are logged and downgraded to a best-effort body; only
//!   sink writes may fail a call

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::outcome::DistributionOutcome;

/// Body for an outcome response: `success`, `state`, then `message` when
/// the engine attached one.
pub(crate) fn outcome_body(outcome: &DistributionOutcome) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert("success".to_owned(), Value::Bool(outcome.successful));
    body.insert(
        "state".to_owned(),
        Value::String(outcome.state.label().to_owned()),
    );
    if let Some(message) = &outcome.message {
        body.insert("message".to_owned(), Value::String(message.clone()));
    }
    body
}

/// Body for a status/message response: `message` when given, then every
/// `extra` entry as a top-level key.
///
/// An extra entry named `message` replaces the message value in place; last
/// write wins.
pub(crate) fn status_message_body(
    message: Option<&str>,
    extra: Option<&BTreeMap<String, String>>,
) -> Map<String, Value> {
    let mut body = Map::new();
    if let Some(message) = message {
        body.insert("message".to_owned(), Value::String(message.to_owned()));
    }
    if let Some(extra) = extra {
        for (key, value) in extra {
            body.insert(key.clone(), Value::String(value.clone()));
        }
    }
    body
}

/// Render a body to compact JSON text.
///
/// Bodies hold only booleans and strings, so rendering cannot fail in
/// practice; if it ever does, the error is logged and the empty object is
/// emitted so the response still carries valid JSON. Render failures never
/// reach the caller.
pub(crate) fn render(body: &Map<String, Value>) -> String {
    match serde_json::to_string(body) {
        Ok(text) => text,
        Err(err) => {
            tracing::error!(error = %err, "cannot render response body");
            String::from("{}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::DistributionState;

    #[test]
    fn test_outcome_body_without_message() {
        let outcome = DistributionOutcome::new(true, DistributionState::Distributed, None);
        let text = render(&outcome_body(&outcome));
        assert_eq!(text, r#"{"success":true,"state":"DISTRIBUTED"}"#);
    }

    #[test]
    fn test_outcome_body_with_message() {
        let outcome = DistributionOutcome::new(
            false,
            DistributionState::Dropped,
            Some("queue full".to_owned()),
        );
        let text = render(&outcome_body(&outcome));
        assert_eq!(
            text,
            r#"{"success":false,"state":"DROPPED","message":"queue full"}"#
        );
    }

    #[test]
    fn test_status_message_body_message_only() {
        let text = render(&status_message_body(Some("not found"), None));
        assert_eq!(text, r#"{"message":"not found"}"#);
    }

    #[test]
    fn test_status_message_body_extra_only() {
        let extra = BTreeMap::from([("retryAfter".to_owned(), "30".to_owned())]);
        let text = render(&status_message_body(None, Some(&extra)));
        assert_eq!(text, r#"{"retryAfter":"30"}"#);
    }

    #[test]
    fn test_status_message_body_empty() {
        let text = render(&status_message_body(None, Some(&BTreeMap::new())));
        assert_eq!(text, "{}");
    }

    #[test]
    fn test_extra_entries_follow_message() {
        let extra = BTreeMap::from([
            ("errorCode".to_owned(), "E1".to_owned()),
            ("retryAfter".to_owned(), "30".to_owned()),
        ]);
        let text = render(&status_message_body(Some("bad request"), Some(&extra)));
        assert_eq!(
            text,
            r#"{"message":"bad request","errorCode":"E1","retryAfter":"30"}"#
        );
    }

    #[test]
    fn test_extra_message_key_wins() {
        // Last write wins; the replaced value keeps its original position.
        let extra = BTreeMap::from([("message".to_owned(), "override".to_owned())]);
        let text = render(&status_message_body(Some("original"), Some(&extra)));
        assert_eq!(text, r#"{"message":"override"}"#);
    }
}
