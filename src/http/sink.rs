//! Response sink abstraction.
//!
//! # Responsibilities
//! - Decouple response writing from the host transport
//! - Carry a status slot and an append-only text body
//!
//! # Design Decisions
//! - Status codes are raw `u16` and carried verbatim; validation is the
//!   caller's job
//! - A sink never given a status keeps the transport's default

use std::io;

/// Minimal surface the writer needs from an HTTP response.
pub trait ResponseSink {
    /// Replace the response status code.
    fn set_status(&mut self, status: u16);

    /// Append UTF-8 text to the response body.
    fn write_body(&mut self, text: &str) -> io::Result<()>;
}

/// Response buffered in memory until the host transport flushes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferedResponse {
    status: Option<u16>,
    body: String,
}

impl BufferedResponse {
    /// Create an empty response with no status set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Status explicitly set on this response, if any.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Body text accumulated so far.
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl ResponseSink for BufferedResponse {
    fn set_status(&mut self, status: u16) {
        self.status = Some(status);
    }

    fn write_body(&mut self, text: &str) -> io::Result<()> {
        self.body.push_str(text);
        Ok(())
    }
}
