//! HTTP response writing subsystem.
//!
//! # Data Flow
//! ```text
//! engine result (DistributionOutcome or status/message/extra)
//!     → body.rs (build ordered JSON object, render to text)
//!     → writer.rs (set status, write body to the sink)
//!     → sink.rs (response abstraction the host transport flushes)
//! ```
//!
//! Handlers running under axum can skip the sink and return the values from
//! `response.rs` directly.

pub(crate) mod body;
pub mod response;
pub mod sink;
pub mod writer;

pub use response::StatusMessage;
pub use sink::{BufferedResponse, ResponseSink};
pub use writer::{write_outcome, write_status_message, WriteError};
