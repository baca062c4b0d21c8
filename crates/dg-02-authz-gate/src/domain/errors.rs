//! # Authorization Errors
//!
//! The two failure classes a capability may raise. Both deny the operation;
//! they differ only in the message the client sees.

use thiserror::Error;

/// Failure raised by an authorization capability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthzError {
    /// The check itself could not be carried out, e.g. a malformed or
    /// expired credential in the opaque data.
    #[error("{0}")]
    Security(String),

    /// The check ran and the subject is not allowed the operation.
    #[error("{0}")]
    Denied(String),
}
