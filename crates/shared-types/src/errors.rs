//! # Error Types
//!
//! The structured failure that crosses the protocol boundary. Subsystems
//! raise a [`ProtocolError`] when an operation must be answered with an error
//! response instead of being forwarded to business logic.

use crate::protocol::StatusCode;
use thiserror::Error;

/// A protocol-level failure: a status code plus a human-readable message.
///
/// The surrounding transport converts this into the client-visible error
/// response and decides whether to keep the connection open.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct ProtocolError {
    /// The protocol status code for the error response.
    pub code: StatusCode,
    /// Human-readable diagnostic forwarded to the client.
    pub message: String,
}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
