//! # Key Exchange Errors
//!
//! Error taxonomy for the DH session lifecycle and the session-key ciphers.

use thiserror::Error;

/// Errors raised by [`crate::DhSession`] and the handshake material codec.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyExchangeError {
    /// Handshake text is missing required markers or contains undecodable
    /// parameter or public-value blocks. Raised before any session state is
    /// mutated.
    #[error("malformed handshake material: {0}")]
    MalformedMaterial(String),

    /// The peer's DH prime or generator differs from the set this session
    /// already adopted. Session state is left unchanged.
    #[error("remote DH parameters differ from local ones")]
    ParameterMismatch,

    /// The one-shot key agreement was already completed; a second completion
    /// is a usage error, not a retry.
    #[error("DH key agreement has already been completed")]
    AlreadyCompleted,

    /// The operation requires state the session has not reached yet (no local
    /// key pair, or agreement not completed).
    #[error("DH key agreement has not been completed")]
    NotReady,

    /// Serializing the local handshake material failed.
    #[error("failed to encode handshake material: {0}")]
    Encoding(String),

    /// The underlying cipher or key construction failed.
    #[error("cipher operation failed: {0}")]
    Crypto(String),
}
